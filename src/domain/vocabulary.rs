// ============================================================
// Layer 3 - Vocabulary Domain Type
// ============================================================
// The bijection between tokens and dense integer IDs.
//
//   word_to_id: HashMap<String, TokenId>   token -> id
//   id_to_word: Vec<String>                id    -> token
//
// IDs are assigned in first-occurrence order, so id_to_word is
// simply the list of distinct tokens in the order they were
// first seen. Both sides always have the same length and the
// IDs are exactly 0..len.
//
// On disk the vocabulary is a pair of JSON objects:
//   {"word_to_id": {"a": 0, ...}, "id_to_word": {"0": "a", ...}}
// Loading re-checks that the two objects are exact inverses.

use std::collections::{BTreeMap, HashMap};
use serde::{Deserialize, Serialize};

use crate::domain::error::{CorpusError, Result};

/// Integer ID of a token inside a Vocabulary
pub type TokenId = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VocabFile", into = "VocabFile")]
pub struct Vocabulary {
    word_to_id: HashMap<String, TokenId>,
    id_to_word: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from a token stream, giving each distinct
    /// token the next unused ID in first-occurrence order.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocab = Self::new();
        for token in tokens {
            vocab.insert(token);
        }
        vocab
    }

    /// Return the ID for `token`, assigning a fresh one if unseen
    pub fn insert(&mut self, token: &str) -> TokenId {
        if let Some(&id) = self.word_to_id.get(token) {
            return id;
        }
        let id = self.id_to_word.len() as TokenId;
        self.word_to_id.insert(token.to_string(), id);
        self.id_to_word.push(token.to_string());
        id
    }

    pub fn id(&self, token: &str) -> Option<TokenId> {
        self.word_to_id.get(token).copied()
    }

    pub fn word(&self, id: TokenId) -> Option<&str> {
        self.id_to_word.get(id as usize).map(String::as_str)
    }

    pub fn word_to_id(&self) -> &HashMap<String, TokenId> {
        &self.word_to_id
    }

    /// ID -> token, indexed by ID
    pub fn id_to_word(&self) -> &[String] {
        &self.id_to_word
    }

    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    pub fn contains_id(&self, id: TokenId) -> bool {
        (id as usize) < self.id_to_word.len()
    }

    /// Map IDs back to their tokens
    pub fn decode(&self, ids: &[TokenId]) -> Result<Vec<&str>> {
        ids.iter()
            .map(|&id| self.word(id).ok_or(CorpusError::UnknownId(id)))
            .collect()
    }
}

// ─── On-disk form ─────────────────────────────────────────────────────────────
// Keeps both mappings explicit in the cache file. The ID -> word side
// uses a BTreeMap so the JSON is written in ID order.
#[derive(Serialize, Deserialize)]
struct VocabFile {
    word_to_id: HashMap<String, TokenId>,
    id_to_word: BTreeMap<TokenId, String>,
}

impl From<Vocabulary> for VocabFile {
    fn from(v: Vocabulary) -> Self {
        let id_to_word = v
            .id_to_word
            .into_iter()
            .enumerate()
            .map(|(i, w)| (i as TokenId, w))
            .collect();
        Self { word_to_id: v.word_to_id, id_to_word }
    }
}

impl TryFrom<VocabFile> for Vocabulary {
    type Error = String;

    fn try_from(file: VocabFile) -> std::result::Result<Self, Self::Error> {
        if file.word_to_id.len() != file.id_to_word.len() {
            return Err(format!(
                "word_to_id has {} entries but id_to_word has {}",
                file.word_to_id.len(),
                file.id_to_word.len()
            ));
        }

        let mut id_to_word = Vec::with_capacity(file.id_to_word.len());
        // BTreeMap iterates in key order, so dense IDs show up as 0, 1, 2, ...
        for (expected, (id, word)) in file.id_to_word.into_iter().enumerate() {
            if id as usize != expected {
                return Err(format!("ids are not contiguous: expected {expected}, found {id}"));
            }
            match file.word_to_id.get(&word) {
                Some(&back) if back == id => id_to_word.push(word),
                Some(&back) => {
                    return Err(format!("'{word}' maps to {back} but id {id} maps to it"))
                }
                None => return Err(format!("'{word}' (id {id}) is missing from word_to_id")),
            }
        }

        Ok(Self { word_to_id: file.word_to_id, id_to_word })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_occurrence_order() {
        let vocab = Vocabulary::from_tokens(["a", "b", "<eos>", "a", "b", "c"]);
        assert_eq!(vocab.id("a"), Some(0));
        assert_eq!(vocab.id("b"), Some(1));
        assert_eq!(vocab.id("<eos>"), Some(2));
        assert_eq!(vocab.id("c"), Some(3));
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.id_to_word(), ["a", "b", "<eos>", "c"]);
    }

    #[test]
    fn test_insert_existing_keeps_id() {
        let mut vocab = Vocabulary::new();
        assert_eq!(vocab.insert("x"), 0);
        assert_eq!(vocab.insert("y"), 1);
        assert_eq!(vocab.insert("x"), 0);
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_decode() {
        let vocab = Vocabulary::from_tokens(["the", "cat"]);
        assert_eq!(vocab.decode(&[1, 0, 1]).unwrap(), vec!["cat", "the", "cat"]);
        assert!(matches!(vocab.decode(&[2]), Err(CorpusError::UnknownId(2))));
    }

    #[test]
    fn test_json_keeps_both_mappings() {
        let vocab = Vocabulary::from_tokens(["a", "b"]);
        let json = serde_json::to_value(&vocab).unwrap();
        assert_eq!(json["word_to_id"]["b"], 1);
        assert_eq!(json["id_to_word"]["0"], "a");

        let back: Vocabulary = serde_json::from_value(json).unwrap();
        assert_eq!(back, vocab);
    }

    #[test]
    fn test_rejects_non_inverse_mappings() {
        let json = r#"{"word_to_id": {"a": 0, "b": 1}, "id_to_word": {"0": "b", "1": "a"}}"#;
        assert!(serde_json::from_str::<Vocabulary>(json).is_err());
    }

    #[test]
    fn test_rejects_gap_in_ids() {
        let json = r#"{"word_to_id": {"a": 0, "b": 2}, "id_to_word": {"0": "a", "2": "b"}}"#;
        assert!(serde_json::from_str::<Vocabulary>(json).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let json = r#"{"word_to_id": {"a": 0}, "id_to_word": {}}"#;
        assert!(serde_json::from_str::<Vocabulary>(json).is_err());
    }

    proptest! {
        #[test]
        fn prop_mappings_are_inverse(tokens in prop::collection::vec("[a-z]{1,4}", 0..64)) {
            let vocab = Vocabulary::from_tokens(tokens.iter().map(String::as_str));

            prop_assert_eq!(vocab.word_to_id().len(), vocab.id_to_word().len());
            for t in &tokens {
                let id = vocab.id(t).unwrap();
                prop_assert_eq!(vocab.word(id), Some(t.as_str()));
            }
            for (i, w) in vocab.id_to_word().iter().enumerate() {
                prop_assert_eq!(vocab.id(w), Some(i as TokenId));
            }
        }
    }
}
