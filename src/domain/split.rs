// ============================================================
// Layer 3 - Split Domain Type
// ============================================================
// The three partitions of the PTB corpus. Each split owns a raw
// text file and an encoded cache file in the dataset directory:
//
//   Train -> ptb.train.txt / ptb.train.npy
//   Test  -> ptb.test.txt  / ptb.test.npy
//   Valid -> ptb.valid.txt / ptb.valid.npy
//
// "val" is accepted as an alias for "valid" when parsing.

use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::domain::error::CorpusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
    Valid,
}

impl Split {
    /// Canonical name, used in file names and log lines
    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test  => "test",
            Split::Valid => "valid",
        }
    }

    /// Raw whitespace-tokenised text file
    pub fn text_file(self) -> String {
        format!("ptb.{}.txt", self.name())
    }

    /// Encoded integer-array cache file
    pub fn cache_file(self) -> String {
        format!("ptb.{}.npy", self.name())
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Split {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train"         => Ok(Split::Train),
            "test"          => Ok(Split::Test),
            "valid" | "val" => Ok(Split::Valid),
            other           => Err(CorpusError::InvalidSplit(other.to_string())),
        }
    }
}
