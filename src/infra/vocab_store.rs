// ============================================================
// Layer 6 - Vocabulary Store
// ============================================================
// Loads the cached vocabulary, or builds it from the training
// split and caches it.
//
//   ptb.vocab.pkl exists  → deserialize and return it
//   otherwise             → read ptb.train.txt, tokenize, assign IDs
//                           in first-occurrence order, save, return
//
// The cache is JSON (see domain/vocabulary.rs for the layout).
// The .pkl name keeps the directory layout other PTB tools expect.

use std::{fs, path::{Path, PathBuf}};

use crate::data::{loader::SplitLoader, tokenizer::Tokenizer};
use crate::domain::{
    error::{CorpusError, Result},
    split::Split,
    traits::Persistable,
    vocabulary::Vocabulary,
};

/// File name of the vocabulary cache inside the dataset directory
pub const VOCAB_FILE: &str = "ptb.vocab.pkl";

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(VOCAB_FILE)
    }

    pub fn is_cached(&self) -> bool {
        self.path().exists()
    }

    /// Load the cached vocabulary or build one from the training split
    pub fn load_or_build(&self, loader: &SplitLoader, tokenizer: &Tokenizer) -> Result<Vocabulary> {
        let path = self.path();
        if self.is_cached() {
            tracing::debug!("Loading cached vocabulary from '{}'", path.display());
            return Vocabulary::load(&path);
        }

        tracing::info!("Building vocabulary from {}", Split::Train.text_file());
        let text   = loader.read(Split::Train)?;
        let tokens = tokenizer.tokenize(&text);
        let vocab  = Vocabulary::from_tokens(tokens.iter().map(String::as_str));

        vocab.save(&path)?;
        tracing::info!(
            "Vocabulary built with {} words from {} tokens, saved to '{}'",
            vocab.len(),
            tokens.len(),
            path.display()
        );
        Ok(vocab)
    }
}

impl Persistable for Vocabulary {
    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CorpusError::corrupt(path, e.to_string()))?;
        fs::write(path, json).map_err(|e| CorpusError::io(path, e))
    }

    fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| CorpusError::io(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| CorpusError::corrupt(path, e.to_string()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> (VocabStore, SplitLoader) {
        (VocabStore::new(dir.path()), SplitLoader::new(dir.path()))
    }

    #[test]
    fn test_builds_and_caches() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ptb.train.txt"), "a b\na b c").unwrap();
        let (store, loader) = store_in(&dir);

        assert!(!store.is_cached());
        let vocab = store.load_or_build(&loader, &Tokenizer::new()).unwrap();
        assert!(store.is_cached());
        assert_eq!(vocab.id_to_word(), ["a", "b", "<eos>", "c"]);
    }

    #[test]
    fn test_cache_is_used_without_train_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ptb.train.txt"), "x y z").unwrap();
        let (store, loader) = store_in(&dir);

        let first = store.load_or_build(&loader, &Tokenizer::new()).unwrap();
        fs::remove_file(dir.path().join("ptb.train.txt")).unwrap();
        let second = store.load_or_build(&loader, &Tokenizer::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_train_file() {
        let dir = TempDir::new().unwrap();
        let (store, loader) = store_in(&dir);

        let err = store.load_or_build(&loader, &Tokenizer::new()).unwrap_err();
        assert!(matches!(err, CorpusError::MissingFile { ref file, .. } if file == "ptb.train.txt"));
        assert!(!store.is_cached());
    }

    #[test]
    fn test_corrupt_cache_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VOCAB_FILE), b"\x80\x04not json").unwrap();
        let (store, loader) = store_in(&dir);

        let err = store.load_or_build(&loader, &Tokenizer::new()).unwrap_err();
        assert!(matches!(err, CorpusError::CorruptCache { .. }));
    }
}
