//! Restartable streaming iterator over a tokenized corpus file.
//!
//! A [`CorpusIterator`] is an immutable, fully compiled configuration. Each
//! call to [`SentenceSource::sentences`] opens the file again and returns a
//! fresh [`Sentences`] traversal that owns its reader and its dedup set, so
//! traversals never observe one another.
//!
//! # Examples
//!
//! ```no_run
//! use corpora::corpus::{CorpusIterator, SentenceSource};
//!
//! let corpus = CorpusIterator::builder("paisa.txt").build().unwrap();
//!
//! // First epoch
//! for sentence in corpus.sentences().unwrap() {
//!     let tokens = sentence.unwrap();
//!     println!("{}", tokens.join(" "));
//! }
//!
//! // Second epoch starts from the top of the file.
//! let count = corpus.sentences().unwrap().count();
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::pattern_remove::PatternRemoveCharFilter;
use crate::analysis::pipeline::LinePipeline;
use crate::analysis::stopwords::load_stopwords;
use crate::analysis::token_filter::stop::{LayerStopFilter, MissingLayerPolicy};
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::{FnTokenizer, Tokenizer};
use crate::corpus::config::{CharRemoval, CorpusConfig};
use crate::corpus::validation::{FnValidator, LineDeduplicator, LineValidator};
use crate::error::Result;

/// A sequence of sentences that can be traversed any number of times.
///
/// Each call starts an independent traversal.
pub trait SentenceSource {
    /// The traversal type.
    type Iter: Iterator<Item = Result<Vec<String>>>;

    /// Start a new traversal from the beginning of the source.
    fn sentences(&self) -> Result<Self::Iter>;
}

/// Configured, restartable reader over a corpus file.
#[derive(Clone)]
pub struct CorpusIterator {
    config: CorpusConfig,
    pipeline: LinePipeline,
    stop_filter: LayerStopFilter,
    validator: Option<Arc<dyn LineValidator>>,
}

impl CorpusIterator {
    /// Start building an iterator over the given corpus file.
    pub fn builder<P: Into<PathBuf>>(path: P) -> CorpusIteratorBuilder {
        CorpusIteratorBuilder::new(CorpusConfig::new(path))
    }

    /// Build an iterator from a serializable configuration, using the default
    /// tokenizer and no validator.
    pub fn from_config(config: CorpusConfig) -> Result<Self> {
        CorpusIteratorBuilder::new(config).build()
    }

    /// The corpus file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// The configuration this iterator was built from.
    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// The stopword set in use, including the empty string.
    pub fn stop_words(&self) -> &HashSet<String> {
        self.stop_filter.stop_words()
    }

    /// The per-line pipeline.
    pub fn pipeline(&self) -> &LinePipeline {
        &self.pipeline
    }

    /// Whether a validator function is configured.
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Run one full traversal and collect counters.
    pub fn stats(&self) -> Result<CorpusStats> {
        let mut sentences = self.sentences()?;
        let mut stats = CorpusStats::default();
        for sentence in sentences.by_ref() {
            stats.sentences += 1;
            stats.tokens += sentence?.len();
        }
        stats.lines_read = sentences.lines_read();
        stats.rejected_lines = sentences.rejected_lines();
        stats.empty_lines = sentences.empty_lines();
        Ok(stats)
    }
}

impl SentenceSource for CorpusIterator {
    type Iter = Sentences;

    fn sentences(&self) -> Result<Sentences> {
        let file = File::open(&self.config.path)?;
        info!("Opened corpus {}", self.config.path.display());

        let dedup = self
            .config
            .remove_identical_lines
            .then(LineDeduplicator::new);

        Ok(Sentences {
            reader: BufReader::new(file),
            buffer: String::new(),
            pipeline: self.pipeline.clone(),
            validator: self.validator.clone(),
            dedup,
            finished: false,
            lines_read: 0,
            rejected_lines: 0,
            empty_lines: 0,
        })
    }
}

impl fmt::Debug for CorpusIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusIterator")
            .field("config", &self.config)
            .field("pipeline", &self.pipeline)
            .field("stop_words", &self.stop_filter.len())
            .field("validator", &self.validator.as_ref().map(|_| "<LineValidator>"))
            .finish()
    }
}

/// Builder for [`CorpusIterator`].
///
/// Nothing is read from the corpus file at build time; building compiles the
/// character-removal pattern and loads the stopword list.
pub struct CorpusIteratorBuilder {
    config: CorpusConfig,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    validator: Option<Arc<dyn LineValidator>>,
    stop_words: Option<HashSet<String>>,
}

impl CorpusIteratorBuilder {
    /// Create a builder from a configuration.
    pub fn new(config: CorpusConfig) -> Self {
        CorpusIteratorBuilder {
            config,
            tokenizer: None,
            validator: None,
            stop_words: None,
        }
    }

    /// Use a custom tokenizer instead of the whitespace tokenizer.
    pub fn tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Use a function as tokenizer.
    pub fn tokenizer_fn<F>(self, func: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        self.tokenizer(Arc::new(FnTokenizer::new(func)))
    }

    /// Set a line validator. It is only consulted when duplicate suppression
    /// is disabled.
    pub fn validator(mut self, validator: Arc<dyn LineValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Use a predicate as line validator.
    pub fn validator_fn<F>(self, func: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator(Arc::new(FnValidator::new(func)))
    }

    /// Load stopwords for a named language.
    pub fn stopword_language<S: Into<String>>(mut self, language: S) -> Self {
        self.config.stopword_language = Some(language.into());
        self.stop_words = None;
        self
    }

    /// Use an explicit stopword list instead of a named language. The
    /// configured language is cleared.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stopword_language = None;
        self.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Disable stopword removal. Empty tokens are still dropped.
    pub fn no_stopwords(mut self) -> Self {
        self.config.stopword_language = None;
        self.stop_words = None;
        self
    }

    /// Set the annotation-layer joiner.
    pub fn joiner<S: Into<String>>(mut self, joiner: S) -> Self {
        self.config.joiner = joiner.into();
        self
    }

    /// Set the annotation layer checked against the stopword set.
    pub fn stopword_index(mut self, index: usize) -> Self {
        self.config.stopword_index = index;
        self
    }

    /// Set the character removal mode.
    pub fn remove_chars(mut self, remove_chars: CharRemoval) -> Self {
        self.config.remove_chars = remove_chars;
        self
    }

    /// Enable or disable duplicate-line suppression.
    pub fn remove_identical_lines(mut self, enabled: bool) -> Self {
        self.config.remove_identical_lines = enabled;
        self
    }

    /// Choose whether the default tokenizer lowercases tokens.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Set the handling of tokens with fewer layers than the stopword index.
    pub fn missing_layer(mut self, policy: MissingLayerPolicy) -> Self {
        self.config.missing_layer = policy;
        self
    }

    /// Compile the configuration into a [`CorpusIterator`].
    pub fn build(self) -> Result<CorpusIterator> {
        let config = self.config;
        config.validate()?;

        let stop_words = match (self.stop_words, &config.stopword_language) {
            (Some(words), _) => words,
            (None, Some(language)) => load_stopwords(language)?,
            (None, None) => HashSet::new(),
        };
        let stop_filter = LayerStopFilter::with_stop_words(stop_words)
            .with_joiner(config.joiner.as_str())
            .with_layer(config.stopword_index)
            .with_missing_layer(config.missing_layer);

        let tokenizer = self.tokenizer.unwrap_or_else(|| {
            if config.lowercase {
                Arc::new(WhitespaceTokenizer::lowercasing())
            } else {
                Arc::new(WhitespaceTokenizer::new())
            }
        });

        let mut pipeline = LinePipeline::new(tokenizer).add_filter(Arc::new(stop_filter.clone()));
        match &config.remove_chars {
            CharRemoval::Italian => {
                pipeline = pipeline
                    .with_char_filter(Arc::new(PatternRemoveCharFilter::italian(&config.joiner)?));
            }
            CharRemoval::Pattern(pattern) => {
                pipeline =
                    pipeline.with_char_filter(Arc::new(PatternRemoveCharFilter::new(pattern)?));
            }
            CharRemoval::None => {}
        }

        debug!(
            "Built corpus iterator for {} ({} stopwords, dedup={})",
            config.path.display(),
            stop_filter.len(),
            config.remove_identical_lines
        );

        Ok(CorpusIterator {
            config,
            pipeline,
            stop_filter,
            validator: self.validator,
        })
    }
}

/// One traversal over a corpus file.
///
/// Holds the file open until it is exhausted or dropped. After an error item
/// the traversal ends.
pub struct Sentences {
    reader: BufReader<File>,
    buffer: String,
    pipeline: LinePipeline,
    validator: Option<Arc<dyn LineValidator>>,
    dedup: Option<LineDeduplicator>,
    finished: bool,
    lines_read: usize,
    rejected_lines: usize,
    empty_lines: usize,
}

impl Sentences {
    /// Lines read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Lines skipped as duplicates or by the validator.
    pub fn rejected_lines(&self) -> usize {
        self.rejected_lines
    }

    /// Accepted lines that produced no tokens.
    pub fn empty_lines(&self) -> usize {
        self.empty_lines
    }

    /// Apply the first applicable validity rule. Duplicates are detected on
    /// the raw line including its terminator, so an unterminated last line
    /// never matches a terminated one.
    fn accepts(
        dedup: Option<&mut LineDeduplicator>,
        validator: Option<&Arc<dyn LineValidator>>,
        raw: &str,
        line: &str,
    ) -> bool {
        if let Some(dedup) = dedup {
            dedup.insert(raw)
        } else if let Some(validator) = validator {
            validator.is_valid(line)
        } else {
            true
        }
    }
}

/// Rewrite a trailing `\r\n` as `\n`.
fn normalize_line_ending(buffer: &mut String) {
    if buffer.ends_with("\r\n") {
        buffer.truncate(buffer.len() - 2);
        buffer.push('\n');
    }
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

impl Iterator for Sentences {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.finished = true;
                    debug!(
                        "Corpus exhausted: {} lines read, {} rejected, {} empty",
                        self.lines_read, self.rejected_lines, self.empty_lines
                    );
                }
                Ok(_) => {
                    self.lines_read += 1;
                    normalize_line_ending(&mut self.buffer);
                    let raw = self.buffer.as_str();
                    let line = trim_line_ending(raw);
                    if !Self::accepts(self.dedup.as_mut(), self.validator.as_ref(), raw, line) {
                        self.rejected_lines += 1;
                        continue;
                    }
                    match self.pipeline.process(line) {
                        Ok(tokens) if tokens.is_empty() => self.empty_lines += 1,
                        Ok(tokens) => return Some(Ok(tokens)),
                        Err(e) => {
                            self.finished = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
        None
    }
}

impl FusedIterator for Sentences {}

impl fmt::Debug for Sentences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentences")
            .field("lines_read", &self.lines_read)
            .field("rejected_lines", &self.rejected_lines)
            .field("empty_lines", &self.empty_lines)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

/// Counters collected by [`CorpusIterator::stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub lines_read: usize,
    pub sentences: usize,
    pub tokens: usize,
    pub rejected_lines: usize,
    pub empty_lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn collect(corpus: &CorpusIterator) -> Vec<Vec<String>> {
        corpus
            .sentences()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending("abc\n"), "abc");
        assert_eq!(trim_line_ending("abc\r\n"), "abc");
        assert_eq!(trim_line_ending("abc"), "abc");
    }

    #[test]
    fn test_normalize_line_ending() {
        let mut crlf = "abc\r\n".to_string();
        normalize_line_ending(&mut crlf);
        assert_eq!(crlf, "abc\n");

        let mut last = "abc".to_string();
        normalize_line_ending(&mut last);
        assert_eq!(last, "abc");
    }

    #[test]
    fn test_unterminated_last_line_is_not_a_duplicate() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"gatto nero\ngatto nero").unwrap();
        file.flush().unwrap();
        let corpus = CorpusIterator::builder(file.path()).build().unwrap();

        assert_eq!(
            collect(&corpus),
            vec![vec!["gatto", "nero"], vec!["gatto", "nero"]]
        );
    }

    #[test]
    fn test_explicit_stop_words_clear_language() {
        let corpus = CorpusIterator::builder("corpus.txt")
            .stop_words(["il"])
            .build()
            .unwrap();

        assert!(corpus.config().stopword_language.is_none());
        assert!(corpus.stop_words().contains("il"));
        assert!(!corpus.stop_words().contains("di"));
    }

    #[test]
    fn test_default_pipeline() {
        let file = corpus_file(&["Ciao, mondo1 bello|ADJ"]);
        let corpus = CorpusIterator::builder(file.path()).build().unwrap();

        assert_eq!(collect(&corpus), vec![vec!["ciao", "mondo", "bello|adj"]]);
    }

    #[test]
    fn test_stopwords_on_layer() {
        let file = corpus_file(&["il|DET gatto|NOUN"]);
        let corpus = CorpusIterator::builder(file.path())
            .stop_words(["il", "la"])
            .lowercase(false)
            .build()
            .unwrap();

        assert_eq!(collect(&corpus), vec![vec!["gatto|NOUN"]]);
    }

    #[test]
    fn test_validator_ignored_while_deduplicating() {
        let file = corpus_file(&["gatto", "cane"]);
        let corpus = CorpusIterator::builder(file.path())
            .validator_fn(|_| false)
            .build()
            .unwrap();

        assert_eq!(collect(&corpus).len(), 2);
        assert!(corpus.has_validator());
    }

    #[test]
    fn test_validator_without_dedup() {
        let file = corpus_file(&["gatto nero", "#commento", "cane"]);
        let corpus = CorpusIterator::builder(file.path())
            .remove_identical_lines(false)
            .remove_chars(CharRemoval::None)
            .validator_fn(|line| !line.starts_with('#'))
            .build()
            .unwrap();

        assert_eq!(
            collect(&corpus),
            vec![vec!["gatto", "nero"], vec!["cane"]]
        );
    }

    #[test]
    fn test_stats() {
        let file = corpus_file(&["il gatto", "il gatto", "e il", "cane nero"]);
        let corpus = CorpusIterator::builder(file.path()).build().unwrap();
        let stats = corpus.stats().unwrap();

        assert_eq!(
            stats,
            CorpusStats {
                lines_read: 4,
                sentences: 2,
                tokens: 3,
                rejected_lines: 1,
                empty_lines: 1,
            }
        );
    }

    #[test]
    fn test_missing_file_fails_on_open() {
        let corpus = CorpusIterator::builder("/nonexistent/corpus.txt")
            .build()
            .unwrap();

        assert!(corpus.sentences().unwrap_err().is_io());
    }

    #[test]
    fn test_unknown_language_fails_at_build() {
        let result = CorpusIterator::builder("corpus.txt")
            .stopword_language("klingon")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_error_item_ends_traversal() {
        let file = corpus_file(&["gatto", "il|DET cane|NOUN", "casa"]);
        let corpus = CorpusIterator::builder(file.path())
            .no_stopwords()
            .stopword_index(1)
            .missing_layer(MissingLayerPolicy::Error)
            .build()
            .unwrap();

        let mut sentences = corpus.sentences().unwrap();
        assert!(sentences.next().unwrap().is_err());
        assert!(sentences.next().is_none());
    }
}
