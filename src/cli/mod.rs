// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   1. `prepare` - the train, val, test preparation run
//   2. `load`    - load one split, optionally preview its tokens
//   3. `vocab`   - load or build the vocabulary only
//
// Errors from the loader are wrapped with anyhow context and end
// the process with a non-zero exit status.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, DatasetArgs, LoadArgs};

use crate::application::{
    corpus_loader::{CacheStatus, CorpusLoader},
    prepare_use_case::PrepareUseCase,
};

#[derive(Parser, Debug)]
#[command(
    name = "ptb-corpus",
    version,
    about = "Build and cache the Penn Tree Bank vocabulary and integer-encoded splits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Load(args)    => run_load(args),
            Commands::Vocab(args)   => run_vocab(args),
        }
    }
}

fn run_prepare(args: DatasetArgs) -> Result<()> {
    let dir    = args.dataset_dir.clone();
    let report = PrepareUseCase::new(args.into())
        .execute()
        .with_context(|| format!("Preparing PTB data in '{}' failed", dir.display()))?;

    for r in &report.splits {
        println!("{:<6} {:>9} tokens  ({})", r.split.name(), r.tokens, status_label(r.status));
    }
    println!("vocabulary: {} words", report.vocab_size);
    println!("All data loaded.");
    Ok(())
}

fn run_load(args: LoadArgs) -> Result<()> {
    let loader = CorpusLoader::new(args.dataset.into());
    let (corpus, vocab) = loader
        .load_data(&args.split)
        .with_context(|| format!("Loading split '{}' failed", args.split))?;

    println!("split:      {}", args.split);
    println!("tokens:     {}", corpus.len());
    println!("vocabulary: {} words", vocab.len());

    if corpus.is_empty() {
        tracing::warn!("Split '{}' contains no tokens", args.split);
    }
    if args.show > 0 {
        let head  = &corpus.ids()[..args.show.min(corpus.len())];
        let words = vocab.decode(head)?;
        println!("{}", words.join(" "));
    }
    Ok(())
}

fn run_vocab(args: DatasetArgs) -> Result<()> {
    let loader = CorpusLoader::new(args.into());
    let vocab  = loader.load_vocab().context("Loading vocabulary failed")?;
    println!("vocabulary: {} words", vocab.len());
    Ok(())
}

fn status_label(status: CacheStatus) -> &'static str {
    match status {
        CacheStatus::Hit   => "cached",
        CacheStatus::Built => "built",
    }
}
