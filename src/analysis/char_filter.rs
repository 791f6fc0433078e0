//! Char filter implementations for line normalization.
//!
//! Char filters pre-process a raw corpus line before it is handed to the
//! tokenizer. The only filter the corpus pipeline needs is a regex removal
//! filter; see [`pattern_remove::PatternRemoveCharFilter`].
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::char_filter::CharFilter;
//! use corpora::analysis::char_filter::pattern_remove::PatternRemoveCharFilter;
//!
//! let filter = PatternRemoveCharFilter::new(r"\d").unwrap();
//! assert_eq!(filter.filter("anno 2024"), "anno ");
//! ```

use std::borrow::Cow;

/// Trait for character filters that transform text before tokenization.
///
/// Filters that leave the input untouched should return it borrowed.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter<'a>(&self, input: &'a str) -> Cow<'a, str>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_remove;

pub use pattern_remove::PatternRemoveCharFilter;
