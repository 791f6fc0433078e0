//! Configuration for corpus iteration.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::MissingLayerPolicy;
use crate::error::{CorporaError, Result};

/// Character removal applied to each line before tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharRemoval {
    /// Keep only Italian letters, spaces and the joiner.
    #[default]
    Italian,
    /// Remove every match of a custom regex.
    Pattern(String),
    /// Leave lines untouched.
    None,
}

/// Serializable part of a corpus iterator's configuration.
///
/// Tokenizer and validator functions are not serializable and are supplied
/// through [`super::CorpusIteratorBuilder`]; `lowercase` selects between the
/// two whitespace tokenizers when no custom tokenizer is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Corpus file, one sentence per line.
    pub path: PathBuf,

    /// Language of the stopword list, or `None` to disable stopword removal.
    pub stopword_language: Option<String>,

    /// Separator between stacked annotation layers.
    pub joiner: String,

    /// Index of the annotation layer checked against the stopword list.
    pub stopword_index: usize,

    /// Character removal applied before tokenization.
    pub remove_chars: CharRemoval,

    /// Skip lines identical to one already seen in the same traversal.
    pub remove_identical_lines: bool,

    /// Lowercase tokens in the default whitespace tokenizer.
    pub lowercase: bool,

    /// Handling of tokens with fewer layers than `stopword_index`.
    pub missing_layer: MissingLayerPolicy,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            stopword_language: Some("italian".to_string()),
            joiner: "|".to_string(),
            stopword_index: 0,
            remove_chars: CharRemoval::Italian,
            remove_identical_lines: true,
            lowercase: true,
            missing_layer: MissingLayerPolicy::Keep,
        }
    }
}

impl CorpusConfig {
    /// Create a default configuration for the given corpus file.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Set the stopword language.
    pub fn with_stopword_language<S: Into<String>>(mut self, language: S) -> Self {
        self.stopword_language = Some(language.into());
        self
    }

    /// Disable stopword removal. Empty tokens are still dropped.
    pub fn without_stopwords(mut self) -> Self {
        self.stopword_language = None;
        self
    }

    /// Set the annotation-layer joiner.
    pub fn with_joiner<S: Into<String>>(mut self, joiner: S) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// Set the stopword layer index.
    pub fn with_stopword_index(mut self, index: usize) -> Self {
        self.stopword_index = index;
        self
    }

    /// Set the character removal mode.
    pub fn with_remove_chars(mut self, remove_chars: CharRemoval) -> Self {
        self.remove_chars = remove_chars;
        self
    }

    /// Enable or disable duplicate-line suppression.
    pub fn with_remove_identical_lines(mut self, enabled: bool) -> Self {
        self.remove_identical_lines = enabled;
        self
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.joiner.is_empty() {
            return Err(CorporaError::config("joiner must not be empty"));
        }
        if let CharRemoval::Pattern(pattern) = &self.remove_chars
            && pattern.is_empty()
        {
            return Err(CorporaError::config(
                "character removal pattern must not be empty",
            ));
        }
        Ok(())
    }
}
