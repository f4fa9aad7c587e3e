// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain types that describe the dataset, with no file I/O:
//
//   split.rs      - train / test / valid and their file names
//   vocabulary.rs - the token <-> ID bijection
//   corpus.rs     - an encoded split (a sequence of IDs)
//   error.rs      - CorpusError and the crate Result alias
//   traits.rs     - Persistable, implemented in the infra layer

pub mod corpus;
pub mod error;
pub mod split;
pub mod traits;
pub mod vocabulary;
