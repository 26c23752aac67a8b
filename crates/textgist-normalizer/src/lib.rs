//! TextGist Normalizer
//!
//! Shrinks and denoises text before it is sent to the summarization model.
//!
//! # Pipeline
//!
//! ```text
//! text → lowercase → tokenize → drop stopwords / punctuation → lemmatize → join
//! ```
//!
//! The output is a space-joined list of lemmas. It is lossy on purpose and
//! is not meant to read as prose.
//!
//! All resources (stopword set, token pattern, exception tables) are loaded
//! in `TextNormalizer::new`, which the server calls once at startup. Nothing
//! is fetched or built lazily while a request is running.
//!
//! # Example
//!
//! ```
//! use textgist_normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! assert_eq!(
//!     normalizer.normalize("The quick brown fox jumps. The fox is quick."),
//!     "quick brown fox jump fox quick"
//! );
//! ```

#![warn(missing_docs)]

mod lemmatizer;
mod stopwords;
mod tokenizer;

pub use lemmatizer::{Lemmatizer, NounLemmatizer};
pub use stopwords::{is_stopword, ENGLISH_STOPWORDS};
pub use tokenizer::Tokenizer;

use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading normalizer resources
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// The token pattern failed to compile
    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Lowercases, filters and lemmatizes text
pub struct TextNormalizer {
    tokenizer: Tokenizer,
    stopwords: HashSet<&'static str>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl TextNormalizer {
    /// Load the default English resources
    pub fn new() -> Result<Self, NormalizerError> {
        Self::with_lemmatizer(Box::new(NounLemmatizer::new()))
    }

    /// Load the default tokenizer and stopwords with a custom lemmatizer
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Result<Self, NormalizerError> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            stopwords: ENGLISH_STOPWORDS.iter().copied().collect(),
            lemmatizer,
        })
    }

    /// Normalize `text` into space-joined lemmas
    ///
    /// Tokens that are stopwords or a single ASCII punctuation character are
    /// dropped. Each surviving token is lemmatized on its own, without any
    /// part-of-speech context.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let tokens = self.tokenizer.tokenize(&lowered);
        let total = tokens.len();

        let lemmas: Vec<String> = tokens
            .into_iter()
            .filter(|token| !self.stopwords.contains(token.as_str()))
            .filter(|token| !is_single_punctuation(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .collect();

        debug!("Normalized {} tokens down to {}", total, lemmas.len());

        lemmas.join(" ")
    }
}

fn is_single_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}
