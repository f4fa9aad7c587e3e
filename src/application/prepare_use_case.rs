// ============================================================
// Layer 2 - PrepareUseCase
// ============================================================
// The one-shot preparation run:
//
//   Step 1: load train  (builds ptb.vocab.pkl + ptb.train.npy)
//   Step 2: load val    (builds ptb.valid.npy)
//   Step 3: load test   (builds ptb.test.npy)
//
// Any step that fails stops the run; caches written by earlier
// steps stay on disk and are reused next time.

use crate::application::corpus_loader::{CacheStatus, CorpusLoader, LoaderConfig};
use crate::domain::{error::Result, split::Split};

/// Split names in the order the preparation run loads them
pub const PREPARE_ORDER: [&str; 3] = ["train", "val", "test"];

/// What happened to one split during a preparation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub split:  Split,
    pub tokens: usize,
    pub status: CacheStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    pub vocab_size: usize,
    pub splits:     Vec<SplitReport>,
}

pub struct PrepareUseCase {
    loader: CorpusLoader,
}

impl PrepareUseCase {
    pub fn new(config: LoaderConfig) -> Self {
        Self { loader: CorpusLoader::new(config) }
    }

    /// Load every split in PREPARE_ORDER, creating missing caches
    pub fn execute(&self) -> Result<PrepareReport> {
        let mut splits     = Vec::with_capacity(PREPARE_ORDER.len());
        let mut vocab_size = 0;

        for name in PREPARE_ORDER {
            tracing::info!("Loading {} data...", name);
            let split = name.parse::<Split>()?;
            let (corpus, vocab, status) = self.loader.load_split(split)?;

            vocab_size = vocab.len();
            splits.push(SplitReport { split, tokens: corpus.len(), status });
        }

        tracing::info!(
            "All data loaded from '{}'",
            self.loader.config().dataset_dir.display()
        );
        Ok(PrepareReport { vocab_size, splits })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::domain::error::CorpusError;

    fn write_all(dir: &TempDir) {
        fs::write(dir.path().join("ptb.train.txt"), " a b \n a b c \n").unwrap();
        fs::write(dir.path().join("ptb.valid.txt"), " c a \n").unwrap();
        fs::write(dir.path().join("ptb.test.txt"), " b \n").unwrap();
    }

    fn config(dir: &TempDir) -> LoaderConfig {
        LoaderConfig { dataset_dir: dir.path().to_path_buf() }
    }

    #[test]
    fn test_prepares_all_splits_in_order() {
        let dir = TempDir::new().unwrap();
        write_all(&dir);

        let report = PrepareUseCase::new(config(&dir)).execute().unwrap();
        assert_eq!(report.vocab_size, 4);

        let order: Vec<_> = report.splits.iter().map(|r| r.split).collect();
        assert_eq!(order, [Split::Train, Split::Valid, Split::Test]);

        let tokens: Vec<_> = report.splits.iter().map(|r| r.tokens).collect();
        assert_eq!(tokens, [7, 3, 2]);

        for name in ["ptb.vocab.pkl", "ptb.train.npy", "ptb.valid.npy", "ptb.test.npy"] {
            assert!(dir.path().join(name).exists(), "{name} was not written");
        }
    }

    #[test]
    fn test_second_run_is_all_cache_hits() {
        let dir = TempDir::new().unwrap();
        write_all(&dir);

        let first  = PrepareUseCase::new(config(&dir)).execute().unwrap();
        let second = PrepareUseCase::new(config(&dir)).execute().unwrap();

        assert!(first.splits.iter().all(|r| r.status == CacheStatus::Built));
        assert!(second.splits.iter().all(|r| r.status == CacheStatus::Hit));
        assert_eq!(first.vocab_size, second.vocab_size);
    }

    #[test]
    fn test_stops_at_first_missing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ptb.train.txt"), "a b").unwrap();

        let err = PrepareUseCase::new(config(&dir)).execute().unwrap_err();
        assert!(matches!(err, CorpusError::MissingFile { ref file, .. } if file == "ptb.valid.txt"));
        assert!(dir.path().join("ptb.train.npy").exists());
        assert!(!dir.path().join("ptb.test.npy").exists());
    }
}
