// ============================================================
// Layer 2 - Application Layer
// ============================================================
//   corpus_loader.rs    - load_vocab / load_data with on-disk caching
//   prepare_use_case.rs - the train, val, test preparation run

pub mod corpus_loader;
pub mod prepare_use_case;
