// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// From raw PTB text to a token stream:
//
//   ptb.<split>.txt
//       │
//       ▼
//   SplitLoader   → checks the file is local, reads the text
//       │
//       ▼
//   Tokenizer     → newline → <eos>, trim, split on whitespace
//
// Turning tokens into IDs happens in the application layer,
// which owns the vocabulary.

/// Reads raw split files from the dataset directory
pub mod loader;

/// Whitespace tokenizer with <eos> substitution
pub mod tokenizer;
