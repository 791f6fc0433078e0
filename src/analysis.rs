//! Text analysis for corpus lines.
//!
//! This module provides the per-line processing used by the corpus iterator:
//! character removal, tokenization, and stopword filtering on an annotation
//! layer, combined by [`pipeline::LinePipeline`].

pub mod char_filter;
pub mod pipeline;
pub mod stopwords;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use char_filter::{CharFilter, PatternRemoveCharFilter};
pub use pipeline::LinePipeline;
pub use stopwords::load_stopwords;
pub use token_filter::{Filter, LayerStopFilter, MissingLayerPolicy};
pub use tokenizer::{FnTokenizer, RegexTokenizer, Tokenizer, WhitespaceTokenizer};
