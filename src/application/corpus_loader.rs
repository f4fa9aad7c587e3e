// ============================================================
// Layer 2 - Corpus Loader
// ============================================================
// The two public operations of the crate:
//
//   load_vocab()       → Vocabulary
//   load_data(split)   → (Corpus, Vocabulary)
//
// Both follow the same pattern against the dataset directory:
//   1. cache file present → read it
//   2. otherwise          → read the raw split, tokenize, build
//   3.                    → write the cache, return the result
//
// load_data always obtains the vocabulary first, so the
// vocabulary cache exists before any split cache is written.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

use crate::data::{loader::SplitLoader, tokenizer::Tokenizer};
use crate::domain::{
    corpus::Corpus,
    error::{CorpusError, Result},
    split::Split,
    traits::Persistable,
    vocabulary::Vocabulary,
};
use crate::infra::vocab_store::VocabStore;

// ─── Loader Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory holding ptb.*.txt and receiving the cache files
    pub dataset_dir: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { dataset_dir: PathBuf::from("ptb") }
    }
}

/// Whether a load was served from cache or built from raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Built,
}

// ─── CorpusLoader ─────────────────────────────────────────────────────────────
pub struct CorpusLoader {
    config:    LoaderConfig,
    splits:    SplitLoader,
    vocab:     VocabStore,
    tokenizer: Tokenizer,
}

impl CorpusLoader {
    pub fn new(config: LoaderConfig) -> Self {
        let splits = SplitLoader::new(&config.dataset_dir);
        let vocab  = VocabStore::new(&config.dataset_dir);
        Self { config, splits, vocab, tokenizer: Tokenizer::new() }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Path of the encoded cache for `split`
    pub fn cache_path(&self, split: Split) -> PathBuf {
        self.config.dataset_dir.join(split.cache_file())
    }

    /// Load the vocabulary, building it from the training split if
    /// no cache exists yet
    pub fn load_vocab(&self) -> Result<Vocabulary> {
        self.vocab.load_or_build(&self.splits, &self.tokenizer)
    }

    /// Load an encoded split by name (`train`, `test`, `valid` or `val`)
    pub fn load_data(&self, split: &str) -> Result<(Corpus, Vocabulary)> {
        let split = split.parse::<Split>()?;
        let (corpus, vocab, _) = self.load_split(split)?;
        Ok((corpus, vocab))
    }

    /// Load an encoded split, reporting whether its cache was used
    pub fn load_split(&self, split: Split) -> Result<(Corpus, Vocabulary, CacheStatus)> {
        let vocab = self.load_vocab()?;

        let save_path = self.cache_path(split);
        if save_path.exists() {
            tracing::debug!("Loading cached {} corpus from '{}'", split, save_path.display());
            let corpus = Corpus::load(&save_path)?;
            if let Some((pos, id)) = corpus.check_against(&vocab) {
                return Err(CorpusError::corrupt(
                    &save_path,
                    format!("id {id} at position {pos} is outside the vocabulary"),
                ));
            }
            return Ok((corpus, vocab, CacheStatus::Hit));
        }

        let text   = self.splits.read(split)?;
        let corpus = self.encode(split, &text, &vocab)?;

        corpus.save(&save_path)?;
        tracing::info!(
            "Encoded {} split: {} tokens, saved to '{}'",
            split,
            corpus.len(),
            save_path.display()
        );
        Ok((corpus, vocab, CacheStatus::Built))
    }

    /// Tokenize `text` and map every token through the vocabulary.
    /// A token the training split never produced is an error.
    fn encode(&self, split: Split, text: &str, vocab: &Vocabulary) -> Result<Corpus> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .enumerate()
            .map(|(position, token)| {
                vocab.id(&token).ok_or_else(|| CorpusError::UnknownToken {
                    token,
                    split: split.to_string(),
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Corpus::new)
    }
}
