// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Subcommands: `prepare`, `load` and `vocab`.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;
use clap::{Args, Subcommand};

use crate::application::corpus_loader::LoaderConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load train, val and test, writing any missing cache files
    Prepare(DatasetArgs),

    /// Load a single split and print a summary
    Load(LoadArgs),

    /// Load or build the vocabulary and print its size
    Vocab(DatasetArgs),
}

/// Location of the PTB files, shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Directory containing ptb.train.txt, ptb.valid.txt and ptb.test.txt.
    /// Cache files are written next to them.
    #[arg(long, default_value = "ptb")]
    pub dataset_dir: PathBuf,
}

impl From<DatasetArgs> for LoaderConfig {
    fn from(a: DatasetArgs) -> Self {
        LoaderConfig { dataset_dir: a.dataset_dir }
    }
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Split to load: train, test, valid (or val)
    #[arg(long, default_value = "train")]
    pub split: String,

    /// Print this many leading tokens of the decoded corpus
    #[arg(long, default_value_t = 0)]
    pub show: usize,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}
