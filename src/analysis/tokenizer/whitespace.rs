//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
///
/// With lowercasing enabled this is the default corpus tokenizer: every token
/// is lowercased before it is returned, annotation layers included.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer {
    lowercase: bool,
}

impl WhitespaceTokenizer {
    /// Create a whitespace tokenizer that keeps the original casing.
    pub fn new() -> Self {
        WhitespaceTokenizer { lowercase: false }
    }

    /// Create a whitespace tokenizer that lowercases every token.
    pub fn lowercasing() -> Self {
        WhitespaceTokenizer { lowercase: true }
    }

    /// Whether tokens are lowercased.
    pub fn is_lowercasing(&self) -> bool {
        self.lowercase
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split_whitespace()
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        if self.lowercase {
            "lowercase_whitespace"
        } else {
            "whitespace"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens = tokenizer.tokenize("hello  World\ttest\n").unwrap();

        assert_eq!(tokens, vec!["hello", "World", "test"]);
    }

    #[test]
    fn test_lowercasing_tokenizer() {
        let tokenizer = WhitespaceTokenizer::lowercasing();
        let tokens = tokenizer.tokenize("Città|NOUN È").unwrap();

        assert_eq!(tokens, vec!["città|noun", "è"]);
    }

    #[test]
    fn test_empty_line() {
        let tokenizer = WhitespaceTokenizer::lowercasing();
        assert!(tokenizer.tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
        assert_eq!(
            WhitespaceTokenizer::lowercasing().name(),
            "lowercase_whitespace"
        );
    }
}
