// ============================================================
// Layer 4 - Raw Split Loader
// ============================================================
// Reads the raw ptb.{train,test,valid}.txt files from the dataset
// directory.
//
// There is no download step. A file is either already on disk
// (logged and read) or the load fails with MissingFile, naming
// both the directory searched and the file expected.

use std::{fs, path::PathBuf};

use crate::domain::{
    error::{CorpusError, Result},
    split::Split,
};

/// Loads raw split text from a local dataset directory.
pub struct SplitLoader {
    /// Directory holding the ptb.*.txt files
    dir: PathBuf,
}

impl SplitLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the raw text file for `split`
    pub fn path_for(&self, split: Split) -> PathBuf {
        self.dir.join(split.text_file())
    }

    /// Fail with MissingFile unless the raw file for `split` is on disk
    pub fn ensure_local(&self, split: Split) -> Result<PathBuf> {
        let path = self.path_for(split);
        if !path.exists() {
            return Err(CorpusError::MissingFile {
                dir:  self.dir.clone(),
                file: split.text_file(),
            });
        }
        tracing::info!("Found {} locally, skipping download", split.text_file());
        Ok(path)
    }

    /// Read the whole raw text of `split`
    pub fn read(&self, split: Split) -> Result<String> {
        let path = self.ensure_local(split)?;
        let text = fs::read_to_string(&path).map_err(|e| CorpusError::io(&path, e))?;
        tracing::debug!("Read '{}' ({} bytes)", path.display(), text.len());
        Ok(text)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ptb.valid.txt"), " a b \n").unwrap();

        let loader = SplitLoader::new(dir.path());
        assert_eq!(loader.read(Split::Valid).unwrap(), " a b \n");
    }

    #[test]
    fn test_missing_file_names_dir_and_file() {
        let dir    = TempDir::new().unwrap();
        let loader = SplitLoader::new(dir.path());

        match loader.read(Split::Test) {
            Err(CorpusError::MissingFile { dir: d, file }) => {
                assert_eq!(d, dir.path());
                assert_eq!(file, "ptb.test.txt");
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }
}
