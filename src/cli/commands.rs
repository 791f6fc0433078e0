//! Command implementations for the corpora CLI.

use std::io::{self, BufWriter, Write};
use std::time::Instant;

use log::{info, warn};
use serde::Serialize;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::convert::{ConversionConfig, PaisaConverter};
use crate::corpus::{CharRemoval, CorpusConfig, CorpusIterator, SentenceSource};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: CorporaArgs) -> Result<()> {
    match &args.command {
        Command::Convert(convert_args) => convert_corpus(convert_args, &args),
        Command::Iterate(iterate_args) => iterate_corpus(iterate_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Result structure for a conversion run.
#[derive(Debug, Serialize)]
struct ConversionResult {
    target: String,
    rows: usize,
    skipped_lines: usize,
    sentences: usize,
    tokens: usize,
    duration_ms: u64,
}

/// Result structure for corpus statistics.
#[derive(Debug, Serialize)]
struct StatsResult {
    corpus: String,
    lines_read: usize,
    sentences: usize,
    tokens: usize,
    rejected_lines: usize,
    empty_lines: usize,
    duration_ms: u64,
}

/// Convert a token-per-row file into a corpus file.
fn convert_corpus(args: &ConvertArgs, cli_args: &CorporaArgs) -> Result<()> {
    let mut config = ConversionConfig::default()
        .with_cols(args.cols.iter().copied())
        .with_joiner(args.joiner.as_str());
    if !args.forbidden_starts.is_empty() {
        config = config.with_forbidden_starts(args.forbidden_starts.iter().cloned());
    }

    let start_time = Instant::now();
    let stats = PaisaConverter::new(config).convert(&args.source, &args.target)?;

    output_result(
        "Conversion finished",
        &ConversionResult {
            target: args.target.to_string_lossy().to_string(),
            rows: stats.rows,
            skipped_lines: stats.skipped_lines,
            sentences: stats.sentences,
            tokens: stats.tokens,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Stream sentences to standard output.
fn iterate_corpus(args: &IterateArgs, cli_args: &CorporaArgs) -> Result<()> {
    let corpus = build_corpus(&args.corpus)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut written = 0usize;

    for sentence in corpus.sentences()?.take(limit) {
        let tokens = sentence?;
        match write_sentence(&mut writer, &tokens, cli_args.output_format) {
            Ok(()) => written += 1,
            Err(crate::error::CorporaError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                warn!("Output closed after {written} sentences");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
    writer.flush()?;

    info!("Wrote {written} sentences");
    Ok(())
}

/// Show corpus statistics.
fn show_stats(args: &StatsArgs, cli_args: &CorporaArgs) -> Result<()> {
    let corpus = build_corpus(&args.corpus)?;

    let start_time = Instant::now();
    let stats = corpus.stats()?;

    output_result(
        "Corpus statistics",
        &StatsResult {
            corpus: corpus.path().to_string_lossy().to_string(),
            lines_read: stats.lines_read,
            sentences: stats.sentences,
            tokens: stats.tokens,
            rejected_lines: stats.rejected_lines,
            empty_lines: stats.empty_lines,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Build a corpus iterator from a config file (if any) and command line flags.
pub fn build_corpus(options: &CorpusOptions) -> Result<CorpusIterator> {
    CorpusIterator::from_config(corpus_config(options)?)
}

/// Resolve the corpus configuration for the given options.
pub fn corpus_config(options: &CorpusOptions) -> Result<CorpusConfig> {
    let mut config = match &options.config {
        Some(path) => CorpusConfig::from_json_file(path)?,
        None => CorpusConfig::default(),
    };
    config.path = options.corpus.clone();

    if let Some(language) = &options.language {
        config.stopword_language = Some(language.clone());
    }
    if options.no_stopwords {
        config.stopword_language = None;
    }
    if let Some(index) = options.stopword_index {
        config.stopword_index = index;
    }
    if let Some(joiner) = &options.joiner {
        config.joiner = joiner.clone();
    }
    if let Some(pattern) = &options.remove_chars {
        config.remove_chars = CharRemoval::Pattern(pattern.clone());
    }
    if options.keep_chars {
        config.remove_chars = CharRemoval::None;
    }
    if options.keep_duplicates {
        config.remove_identical_lines = false;
    }
    if options.keep_case {
        config.lowercase = false;
    }
    if let Some(policy) = options.missing_layer {
        config.missing_layer = policy.into();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn corpus_options(extra: &[&str]) -> CorpusOptions {
        let mut argv = vec!["corpora", "stats", "corpus.txt"];
        argv.extend_from_slice(extra);
        match CorporaArgs::parse_from(argv).command {
            Command::Stats(stats) => stats.corpus,
            _ => panic!("Expected stats command"),
        }
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = corpus_config(&corpus_options(&[])).unwrap();

        assert_eq!(config.path, PathBuf::from("corpus.txt"));
        assert_eq!(config, CorpusConfig::new("corpus.txt"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"joiner": "/", "stopword_index": 2}}"#).unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().to_string();
        let options = corpus_options(&["--config", &path, "-i", "1", "--keep-chars"]);
        let config = corpus_config(&options).unwrap();

        assert_eq!(config.joiner, "/");
        assert_eq!(config.stopword_index, 1);
        assert_eq!(config.remove_chars, CharRemoval::None);
        assert_eq!(config.path, PathBuf::from("corpus.txt"));
    }

    #[test]
    fn test_no_stopwords_flag() {
        let config = corpus_config(&corpus_options(&["--no-stopwords", "--keep-duplicates"]))
            .unwrap();

        assert!(config.stopword_language.is_none());
        assert!(!config.remove_identical_lines);
    }
}
