//! Conversion of tab-separated token-per-row corpora into sentence-per-line
//! text.
//!
//! The input carries one token per row, column 0 being the token's position
//! inside its sentence. The output is the plain corpus format read by
//! [`crate::corpus::CorpusIterator`]: one sentence per line, tokens separated
//! by spaces, selected columns stacked into composite tokens with a joiner.
//!
//! ```text
//! 1   Il      il      DET          il|DET gatto|NOUN
//! 2   gatto   gatto   NOUN    →    corre|VERB
//! 1   corre   correre VERB
//! ```

use serde::{Deserialize, Serialize};

pub mod paisa;

pub use paisa::{ConversionConfig, PaisaConverter};

/// Counters for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Token rows converted.
    pub rows: usize,
    /// Raw lines skipped because they start with a forbidden prefix.
    pub skipped_lines: usize,
    /// Sentence lines written.
    pub sentences: usize,
    /// Tokens written.
    pub tokens: usize,
}
