//! Line pipeline combining a char filter, a tokenizer and token filters.
//!
//! # Architecture
//!
//! The pipeline applies processing in this order:
//! 1. Char filter: removes unwanted characters from the raw line
//! 2. Tokenizer: splits the line into tokens
//! 3. Token filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use corpora::analysis::char_filter::pattern_remove::PatternRemoveCharFilter;
//! use corpora::analysis::pipeline::LinePipeline;
//! use corpora::analysis::token_filter::stop::LayerStopFilter;
//! use corpora::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let pipeline = LinePipeline::new(Arc::new(WhitespaceTokenizer::lowercasing()))
//!     .with_char_filter(Arc::new(PatternRemoveCharFilter::italian("|").unwrap()))
//!     .add_filter(Arc::new(LayerStopFilter::from_words(vec!["il"])));
//!
//! let tokens = pipeline.process("Il gatto, nero!").unwrap();
//! assert_eq!(tokens, vec!["gatto", "nero"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable per-line pipeline.
#[derive(Clone)]
pub struct LinePipeline {
    char_filter: Option<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl LinePipeline {
    /// Create a new pipeline with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        LinePipeline {
            char_filter: None,
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Set the char filter applied before tokenization.
    pub fn with_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filter = Some(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filter used by this pipeline, if any.
    pub fn char_filter(&self) -> Option<&Arc<dyn CharFilter>> {
        self.char_filter.as_ref()
    }

    /// Get the token filters used by this pipeline.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Run one raw line through the pipeline.
    pub fn process(&self, line: &str) -> Result<Vec<String>> {
        let mut tokens = match &self.char_filter {
            Some(char_filter) => self.tokenizer.tokenize(&char_filter.filter(line))?,
            None => self.tokenizer.tokenize(line)?,
        };

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }
}

impl fmt::Debug for LinePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinePipeline")
            .field("char_filter", &self.char_filter.as_ref().map(|c| c.name()))
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::pattern_remove::PatternRemoveCharFilter;
    use crate::analysis::token_filter::stop::LayerStopFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_without_char_filter() {
        let pipeline = LinePipeline::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LayerStopFilter::empty_only()));

        assert_eq!(pipeline.process("Uno, due").unwrap(), vec!["Uno,", "due"]);
        assert!(pipeline.char_filter().is_none());
    }

    #[test]
    fn test_pipeline_character_removal() {
        let pipeline = LinePipeline::new(Arc::new(WhitespaceTokenizer::lowercasing()))
            .with_char_filter(Arc::new(PatternRemoveCharFilter::italian("|").unwrap()))
            .add_filter(Arc::new(LayerStopFilter::empty_only()));

        assert_eq!(
            pipeline.process("Ciao, mondo1 bello|ADJ").unwrap(),
            vec!["ciao", "mondo", "bello|adj"]
        );
    }

    #[test]
    fn test_pipeline_filters_in_order() {
        let pipeline = LinePipeline::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LayerStopFilter::from_words(vec!["a"])))
            .add_filter(Arc::new(LayerStopFilter::from_words(vec!["b"])));

        assert_eq!(pipeline.process("a b c").unwrap(), vec!["c"]);
        assert_eq!(pipeline.filters().len(), 2);
    }

    #[test]
    fn test_debug_lists_components() {
        let pipeline = LinePipeline::new(Arc::new(WhitespaceTokenizer::new()));
        let debug = format!("{pipeline:?}");
        assert!(debug.contains("whitespace"));
    }
}
