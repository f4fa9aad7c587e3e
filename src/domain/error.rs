// ============================================================
// Layer 3 - Corpus Errors
// ============================================================
// Every failure the loader can report. The library layers return
// these through `Result<T>`; the CLI wraps them in anyhow.
//
//   MissingFile   - a raw ptb.*.txt file is not on disk
//   InvalidSplit  - split name is not train / test / valid / val
//   UnknownToken  - encoding hit a word the training vocab lacks
//   UnknownId     - decoding hit an ID the vocab lacks
//   CorruptCache  - a cache file exists but cannot be trusted
//   Io            - any other filesystem failure

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error(
        "{file} not found in {dir}\n\
         check that the ptb dataset directory is correct (current: {dir}) \
         and that it contains {file}"
    )]
    MissingFile { dir: PathBuf, file: String },

    #[error("invalid split '{0}': expected one of train, test, valid (or val)")]
    InvalidSplit(String),

    #[error("token '{token}' at position {position} of the {split} split is not in the training vocabulary")]
    UnknownToken {
        token:    String,
        split:    String,
        position: usize,
    },

    #[error("token id {0} is not in the vocabulary")]
    UnknownId(u32),

    #[error("corrupt cache file '{path}': {reason}")]
    CorruptCache { path: PathBuf, reason: String },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    /// Wrap an io::Error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptCache { path: path.into(), reason: reason.into() }
    }
}

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;
