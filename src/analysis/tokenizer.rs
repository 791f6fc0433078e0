//! Tokenizer implementations for corpus lines.
//!
//! A tokenizer turns one filtered corpus line into an ordered sequence of raw
//! tokens. Tokens are plain strings: a composite token such as
//! `gatto|gatto|NOUN` is kept whole and only split into annotation layers by
//! the stop filter.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace, optionally lowercasing
//! - [`regex::RegexTokenizer`] - Extracts regex matches (or the gaps between them)
//! - [`FnTokenizer`] - Wraps any `Fn(&str) -> Vec<String>`
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::tokenizer::Tokenizer;
//! use corpora::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::lowercasing();
//! let tokens = tokenizer.tokenize("Il Gatto|NOUN").unwrap();
//! assert_eq!(tokens, vec!["il", "gatto|noun"]);
//! ```

use std::fmt;

use crate::error::Result;

/// Trait for tokenizers that convert a line into tokens.
///
/// The trait requires `Send + Sync` so a configured corpus can be shared
/// between independent traversals.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer backed by a plain function or closure.
///
/// # Examples
///
/// ```
/// use corpora::analysis::tokenizer::{FnTokenizer, Tokenizer};
///
/// let tokenizer = FnTokenizer::new(|line: &str| {
///     line.split(',').map(|s| s.trim().to_string()).collect()
/// });
/// assert_eq!(tokenizer.tokenize("a, b").unwrap(), vec!["a", "b"]);
/// ```
pub struct FnTokenizer<F> {
    func: F,
}

impl<F> FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    /// Wrap a function as a tokenizer.
    pub fn new(func: F) -> Self {
        FnTokenizer { func }
    }
}

impl<F> Tokenizer for FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok((self.func)(text))
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

impl<F> fmt::Debug for FnTokenizer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTokenizer").finish_non_exhaustive()
    }
}

// Individual tokenizer modules
pub mod regex;
pub mod whitespace;

pub use self::regex::RegexTokenizer;
pub use whitespace::WhitespaceTokenizer;
