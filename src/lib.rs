//! # Corpora
//!
//! Lazy, restartable sentence streams over large tokenized text corpora.
//!
//! ## Features
//!
//! - Streaming line-by-line reads, nothing held in memory between sentences
//! - Fresh state on every traversal, so a corpus can feed many training epochs
//! - Duplicate line suppression or a custom line validator
//! - Regex character removal and pluggable tokenizers
//! - Stopword filtering on one layer of multi-layer tokens (`word|POS|lemma`)
//! - Conversion of token-per-row PAISÀ/CoNLL files into corpus files

pub mod analysis;
pub mod cli;
pub mod convert;
pub mod corpus;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
