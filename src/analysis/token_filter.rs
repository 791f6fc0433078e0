//! Token filter implementations.
//!
//! Filters receive the ordered tokens of one line and return the tokens that
//! survive. The corpus pipeline uses a single filter,
//! [`stop::LayerStopFilter`], which drops empty tokens and stopwords found on
//! a chosen annotation layer.
//!
//! ```text
//! CharFilter → Tokenizer → LayerStopFilter → sentence
//! ```

use crate::error::Result;

/// Trait for filters that transform the tokens of one line.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token sequence, preserving order.
    fn filter(&self, tokens: Vec<String>) -> Result<Vec<String>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod stop;

pub use stop::{LayerStopFilter, MissingLayerPolicy};
