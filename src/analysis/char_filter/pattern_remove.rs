use std::borrow::Cow;

use regex::Regex;

use super::CharFilter;
use crate::error::{CorporaError, Result};

/// Letters kept by [`PatternRemoveCharFilter::italian`]: ASCII letters plus the
/// accented vowels used in Italian orthography.
pub const ITALIAN_LETTERS: &str = "a-zA-ZÀÈÉÌÒÙàèéìòù";

/// A char filter that deletes every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternRemoveCharFilter {
    pattern: Regex,
}

impl PatternRemoveCharFilter {
    /// Create a filter removing every match of `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CorporaError::analysis(format!("Invalid regex pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Create the default filter, which keeps only Italian letters, spaces and
    /// the annotation-layer joiner.
    ///
    /// Newlines and tabs are removed as well, so a line terminator never
    /// reaches the tokenizer.
    pub fn italian(joiner: &str) -> Result<Self> {
        Self::new(&Self::italian_pattern(joiner))
    }

    /// The pattern used by [`PatternRemoveCharFilter::italian`].
    pub fn italian_pattern(joiner: &str) -> String {
        let escaped: String = joiner
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        format!("[^{ITALIAN_LETTERS} {escaped}]")
    }

    /// Get the source pattern of this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternRemoveCharFilter {
    fn filter<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, "")
    }

    fn name(&self) -> &'static str {
        "pattern_remove"
    }
}
