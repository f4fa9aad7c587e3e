// ============================================================
// Layer 3 - Corpus Domain Type
// ============================================================
// An encoded split: the token IDs of its text, in order.
// Every ID is expected to be a key of the vocabulary it was
// encoded with; `check_against` verifies that for cached data.

use crate::domain::vocabulary::{TokenId, Vocabulary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    ids: Vec<TokenId>,
}

impl Corpus {
    pub fn new(ids: Vec<TokenId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[TokenId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the first ID (with its position) that `vocab` does not know
    pub fn check_against(&self, vocab: &Vocabulary) -> Option<(usize, TokenId)> {
        self.ids
            .iter()
            .enumerate()
            .find(|(_, &id)| !vocab.contains_id(id))
            .map(|(pos, &id)| (pos, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_against_finds_first_bad_id() {
        let vocab  = Vocabulary::from_tokens(["a", "b"]);
        let corpus = Corpus::new(vec![0, 1, 5, 9]);
        assert_eq!(corpus.check_against(&vocab), Some((2, 5)));
    }

    #[test]
    fn test_check_against_accepts_valid_ids() {
        let vocab = Vocabulary::from_tokens(["a", "b"]);
        assert_eq!(Corpus::new(vec![1, 0, 1]).check_against(&vocab), None);
        assert_eq!(Corpus::default().check_against(&vocab), None);
    }
}
