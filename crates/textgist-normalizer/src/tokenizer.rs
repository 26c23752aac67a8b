//! Word tokenization
//!
//! Treebank-flavoured: punctuation is split off words, while internal
//! periods, hyphens and apostrophes stay attached ("e.g", "state-of-the-art",
//! "o'clock"). Negation and pronoun clitics are then split into their own
//! tokens ("don't" → "do" + "n't", "it's" → "it" + "'s").

use regex::Regex;

/// A word, possibly joined by `.`, `'` or `-`, or any single non-space symbol
const TOKEN_PATTERN: &str = r"\w+(?:[.'\-]\w+)*|[^\w\s]";

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Splits text into word and punctuation tokens
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compile the token pattern
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Tokenize `text` (expected to be lowercased already)
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.replace('\u{2019}', "'");
        let mut tokens = Vec::new();

        for m in self.pattern.find_iter(&text) {
            split_clitic(m.as_str(), &mut tokens);
        }

        tokens
    }
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    if word.len() > 3 && word.ends_with("n't") {
        let (stem, clitic) = word.split_at(word.len() - 3);
        out.push(stem.to_string());
        out.push(clitic.to_string());
        return;
    }

    for clitic in CLITICS {
        if word.len() > clitic.len() && word.ends_with(clitic) {
            let (stem, clitic) = word.split_at(word.len() - clitic.len());
            out.push(stem.to_string());
            out.push(clitic.to_string());
            return;
        }
    }

    out.push(word.to_string());
}
