//! Regex-based tokenizer implementation.

use regex::Regex;

use super::Tokenizer;
use crate::error::{CorporaError, Result};

/// A regex-based tokenizer that extracts tokens using regular expressions.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Regex,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"[^\s]+"` matches runs of non-whitespace, so
    /// composite tokens survive intact.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"[^\s]+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Self::compile(pattern)?,
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Self::compile(pattern)?,
            gaps: true,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| CorporaError::analysis(format!("Invalid regex pattern: {e}")))
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = if self.gaps {
            self.pattern
                .split(text)
                .filter(|gap| !gap.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            self.pattern
                .find_iter(text)
                .map(|mat| mat.as_str().to_string())
                .collect()
        };

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("il|DET gatto|NOUN").unwrap();

        assert_eq!(tokens, vec!["il|DET", "gatto|NOUN"]);
    }

    #[test]
    fn test_regex_tokenizer_with_gaps() {
        let tokenizer = RegexTokenizer::with_gaps(r"[\s,]+").unwrap();
        let tokens = tokenizer.tokenize(" uno, due  tre,").unwrap();

        assert_eq!(tokens, vec!["uno", "due", "tre"]);
        assert!(tokenizer.gaps());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
