// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// Persistable is implemented by every artifact the loader caches:
//
//   Vocabulary -> JSON pair of mappings  (infra/vocab_store.rs)
//   Corpus     -> 1-D NumPy int64 array  (infra/npy.rs)
//
// The application layer only ever asks "load this from a path"
// or "save this to a path", never which format is behind it.

use std::path::Path;

use crate::domain::error::Result;

// ─── Persistable ──────────────────────────────────────────────────────────────
/// A cache artifact that can be written once and read back later.
pub trait Persistable: Sized {
    /// Write this artifact to `path`, replacing anything there
    fn save(&self, path: &Path) -> Result<()>;

    /// Read an artifact previously written with `save`.
    /// A file that exists but cannot be decoded is a CorruptCache error.
    fn load(path: &Path) -> Result<Self>;
}
