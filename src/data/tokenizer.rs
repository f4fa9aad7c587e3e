// ============================================================
// Layer 4 - Whitespace Tokenizer
// ============================================================
// Turns raw PTB text into the token stream used for both
// vocabulary building and encoding.
//
// Steps (applied in order):
//   1. Replace every '\n' with the end-of-sequence token <eos>
//   2. Trim leading/trailing whitespace of the whole text
//   3. Split on whitespace
//
// <eos> is inserted with a space on each side so it always
// stands alone, even when a line has no trailing space:
//   "a b\na b c" -> ["a", "b", "<eos>", "a", "b", "c"]

/// End-of-sequence marker substituted for each newline
pub const EOS_TOKEN: &str = "<eos>";

pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `text` into owned tokens, <eos> included
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let with_eos = text.replace('\n', &format!(" {EOS_TOKEN} "));
        with_eos
            .trim()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
