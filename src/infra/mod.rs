// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// On-disk cache formats for the two artifacts the loader keeps:
//
//   vocab_store.rs - ptb.vocab.pkl, the vocabulary as JSON.
//                    Loads it if present, otherwise builds it
//                    from ptb.train.txt and writes it.
//
//   npy.rs         - ptb.<split>.npy, each encoded split as a
//                    1-D NumPy int64 array.
//
// Both implement domain::traits::Persistable. Caches are written
// once and never updated; delete a file to force a rebuild.

/// Vocabulary cache (JSON pair of mappings)
pub mod vocab_store;

/// Encoded split cache (NumPy .npy)
pub mod npy;
