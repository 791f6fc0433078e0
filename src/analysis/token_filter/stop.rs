//! Annotation-layer stop filter.
//!
//! Corpus tokens may stack several annotation layers joined by a separator,
//! e.g. `gatti|gatto|NOUN`. The stop filter splits each token by the joiner
//! and looks up a single layer in the stopword set; the token is kept or
//! dropped whole.
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::token_filter::Filter;
//! use corpora::analysis::token_filter::stop::LayerStopFilter;
//!
//! let filter = LayerStopFilter::from_words(vec!["il", "la"]);
//! let tokens = vec!["il|DET".to_string(), "gatto|NOUN".to_string()];
//!
//! assert_eq!(filter.filter(tokens).unwrap(), vec!["gatto|NOUN"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::Filter;
use crate::error::{CorporaError, Result};

/// What to do with a token that has fewer annotation layers than the
/// configured layer index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingLayerPolicy {
    /// Treat the token as not a stopword and keep it.
    #[default]
    Keep,
    /// Drop the token.
    Drop,
    /// Fail the current line with an analysis error.
    Error,
}

/// A filter that removes empty tokens and tokens whose designated annotation
/// layer is a stopword.
///
/// The empty string is always part of the stopword set, so an empty token, or
/// a token whose checked layer is empty (`|NOUN` with index 0), is dropped
/// even when stopword removal is otherwise disabled.
#[derive(Clone, Debug)]
pub struct LayerStopFilter {
    /// The set of stop words, always including the empty string
    stop_words: Arc<HashSet<String>>,
    /// Separator between annotation layers
    joiner: String,
    /// Index of the layer compared against the stopword set
    layer: usize,
    /// Handling of tokens without the checked layer
    missing_layer: MissingLayerPolicy,
}

impl LayerStopFilter {
    /// Create a stop filter with custom stop words, checking layer 0 of
    /// `|`-joined tokens.
    pub fn with_stop_words(mut stop_words: HashSet<String>) -> Self {
        stop_words.insert(String::new());
        LayerStopFilter {
            stop_words: Arc::new(stop_words),
            joiner: "|".to_string(),
            layer: 0,
            missing_layer: MissingLayerPolicy::default(),
        }
    }

    /// Create a stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Create a filter that only removes empty tokens.
    pub fn empty_only() -> Self {
        Self::with_stop_words(HashSet::new())
    }

    /// Set the annotation-layer separator.
    pub fn with_joiner<S: Into<String>>(mut self, joiner: S) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// Set the index of the layer checked against the stopword set.
    pub fn with_layer(mut self, layer: usize) -> Self {
        self.layer = layer;
        self
    }

    /// Set the handling of tokens without the checked layer.
    pub fn with_missing_layer(mut self, policy: MissingLayerPolicy) -> Self {
        self.missing_layer = policy;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Decide whether a single token survives.
    pub fn keeps(&self, token: &str) -> Result<bool> {
        if token.is_empty() {
            return Ok(false);
        }

        match token.split(self.joiner.as_str()).nth(self.layer) {
            Some(layer) => Ok(!self.is_stop_word(layer)),
            None => match self.missing_layer {
                MissingLayerPolicy::Keep => Ok(true),
                MissingLayerPolicy::Drop => Ok(false),
                MissingLayerPolicy::Error => Err(CorporaError::analysis(format!(
                    "Token '{token}' has no annotation layer {} (joiner '{}')",
                    self.layer, self.joiner
                ))),
            },
        }
    }

    /// The stopword set, including the empty string.
    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    /// The annotation-layer separator.
    pub fn joiner(&self) -> &str {
        &self.joiner
    }

    /// The checked layer index.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Get the number of stop words, not counting the empty string.
    pub fn len(&self) -> usize {
        self.stop_words.len() - 1
    }

    /// Check if the filter only removes empty tokens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LayerStopFilter {
    fn default() -> Self {
        Self::empty_only()
    }
}

impl Filter for LayerStopFilter {
    fn filter(&self, tokens: Vec<String>) -> Result<Vec<String>> {
        let mut kept = Vec::with_capacity(tokens.len());
        for token in tokens {
            if self.keeps(&token)? {
                kept.push(token);
            }
        }
        Ok(kept)
    }

    fn name(&self) -> &'static str {
        "layer_stop"
    }
}
