//! Streaming corpus iteration.
//!
//! A corpus file holds one sentence per line. Iterating it applies, per line:
//! validation (duplicate suppression or a user validator), character removal,
//! tokenization and stopword filtering on an annotation layer. Only non-empty
//! sentences are yielded, and every traversal starts again from the top of
//! the file with fresh state.
//!
//! # Examples
//!
//! ```no_run
//! use corpora::corpus::{CorpusIterator, SentenceSource};
//!
//! let corpus = CorpusIterator::builder("paisa.txt")
//!     .joiner("|")
//!     .stopword_index(1)
//!     .build()
//!     .unwrap();
//!
//! for _epoch in 0..5 {
//!     for sentence in corpus.sentences().unwrap() {
//!         let _tokens: Vec<String> = sentence.unwrap();
//!     }
//! }
//! ```

pub mod config;
pub mod iterator;
pub mod validation;

pub use config::{CharRemoval, CorpusConfig};
pub use iterator::{CorpusIterator, CorpusIteratorBuilder, CorpusStats, SentenceSource, Sentences};
pub use validation::{FnValidator, LineDeduplicator, LineValidator};
