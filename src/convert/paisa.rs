//! PAISÀ-style CoNLL converter.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::convert::ConversionStats;
use crate::error::{CorporaError, Result};

/// Settings for [`PaisaConverter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// 0-based columns stacked into each output token, in column order.
    /// Column 0 holds the position in sentence.
    pub cols: Vec<usize>,

    /// Separator placed between the selected columns. Occurrences inside a
    /// column value are removed.
    pub joiner: String,

    /// Raw lines starting with any of these prefixes are skipped. `"\n"`
    /// matches empty lines.
    pub forbidden_starts: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            cols: vec![2],
            joiner: "|".to_string(),
            forbidden_starts: vec!["#".to_string(), "\n".to_string(), "<".to_string()],
        }
    }
}

impl ConversionConfig {
    /// Set the selected columns.
    pub fn with_cols<I: IntoIterator<Item = usize>>(mut self, cols: I) -> Self {
        self.cols = cols.into_iter().collect();
        self
    }

    /// Set the joiner.
    pub fn with_joiner<S: Into<String>>(mut self, joiner: S) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// Set the forbidden line prefixes.
    pub fn with_forbidden_starts<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_starts = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

/// Converts token-per-row files into sentence-per-line corpora.
///
/// # Examples
///
/// ```
/// use corpora::convert::{ConversionConfig, PaisaConverter};
///
/// let source = "# sent 1\n1\tIl\til\tDET\n2\tgatto\tgatto\tNOUN\n\n1\tcorre\tcorrere\tVERB\n";
/// let converter = PaisaConverter::new(ConversionConfig::default().with_cols([2, 3]));
///
/// let mut output = Vec::new();
/// let stats = converter.convert_stream(source.as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "il|DET gatto|NOUN \ncorrere|VERB \n");
/// assert_eq!(stats.sentences, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaisaConverter {
    config: ConversionConfig,
}

impl PaisaConverter {
    /// Create a converter.
    pub fn new(config: ConversionConfig) -> Self {
        PaisaConverter { config }
    }

    /// The converter settings.
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert `source` into a new file at `target`.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        target: Q,
    ) -> Result<ConversionStats> {
        let reader = BufReader::new(File::open(source.as_ref())?);
        let writer = BufWriter::new(File::create(target.as_ref())?);
        info!(
            "Converting {} into {}",
            source.as_ref().display(),
            target.as_ref().display()
        );
        self.convert_stream(reader, writer)
    }

    /// Convert from any buffered reader into any writer.
    ///
    /// A newline is written whenever the position counter drops below the
    /// previous row's position. Every token is followed by a space.
    pub fn convert_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<ConversionStats> {
        if self.config.joiner.is_empty() {
            return Err(CorporaError::config("joiner must not be empty"));
        }
        let cols: BTreeSet<usize> = self.config.cols.iter().copied().collect();
        if cols.is_empty() {
            return Err(CorporaError::config("at least one column must be selected"));
        }

        let lines = FilteredLines::new(reader, &self.config.forbidden_starts);
        let mut rows = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(lines);

        let mut stats = ConversionStats::default();
        let mut previous_position = 0i64;
        let mut record = StringRecord::new();

        while rows.read_record(&mut record)? {
            let position = Self::position(&record, stats.rows)?;
            let token = self.token(&record, &cols, stats.rows)?;

            if position < previous_position {
                writer.write_all(b"\n")?;
                stats.sentences += 1;
            }
            writer.write_all(token.as_bytes())?;
            writer.write_all(b" ")?;

            previous_position = position;
            stats.rows += 1;
            stats.tokens += 1;
        }

        if stats.rows > 0 {
            writer.write_all(b"\n")?;
            stats.sentences += 1;
        }
        writer.flush()?;

        stats.skipped_lines = rows.get_ref().skipped;
        debug!(
            "Converted {} rows into {} sentences ({} lines skipped)",
            stats.rows, stats.sentences, stats.skipped_lines
        );
        Ok(stats)
    }

    fn position(record: &StringRecord, row: usize) -> Result<i64> {
        let raw = record
            .get(0)
            .ok_or_else(|| CorporaError::parse(format!("row {}: empty row", row + 1)))?;
        raw.trim().parse().map_err(|e| {
            CorporaError::parse(format!(
                "row {}: invalid position in sentence '{raw}': {e}",
                row + 1
            ))
        })
    }

    fn token(&self, record: &StringRecord, cols: &BTreeSet<usize>, row: usize) -> Result<String> {
        let joiner = self.config.joiner.as_str();
        let mut parts = Vec::with_capacity(cols.len());
        for &col in cols {
            let value = record.get(col).ok_or_else(|| {
                CorporaError::parse(format!(
                    "row {}: missing column {col} ({} columns)",
                    row + 1,
                    record.len()
                ))
            })?;
            parts.push(value.replace(joiner, ""));
        }
        Ok(parts.join(joiner))
    }
}

/// A reader that drops raw lines starting with a forbidden prefix.
struct FilteredLines<'a, R> {
    inner: R,
    forbidden: &'a [String],
    line: Vec<u8>,
    offset: usize,
    skipped: usize,
}

impl<'a, R: BufRead> FilteredLines<'a, R> {
    fn new(inner: R, forbidden: &'a [String]) -> Self {
        FilteredLines {
            inner,
            forbidden,
            line: Vec::new(),
            offset: 0,
            skipped: 0,
        }
    }

    fn is_forbidden(&self) -> bool {
        self.forbidden
            .iter()
            .any(|prefix| !prefix.is_empty() && self.line.starts_with(prefix.as_bytes()))
    }

    /// Load the next allowed line; returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        loop {
            self.line.clear();
            self.offset = 0;
            if self.inner.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(false);
            }
            if self.is_forbidden() {
                self.skipped += 1;
            } else {
                return Ok(true);
            }
        }
    }
}

impl<R: BufRead> Read for FilteredLines<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.offset >= self.line.len() && !self.fill()? {
            return Ok(0);
        }
        let remaining = &self.line[self.offset..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.offset += n;
        Ok(n)
    }
}
