//! Command line argument parsing for the corpora CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::MissingLayerPolicy;

/// corpora - convert and stream tokenized corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "corpora")]
#[command(about = "Convert token-per-row corpora and stream them sentence by sentence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorporaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorporaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a token-per-row file into a sentence-per-line corpus
    Convert(ConvertArgs),

    /// Stream the sentences of a corpus to standard output
    Iterate(IterateArgs),

    /// Count sentences and tokens of a corpus
    Stats(StatsArgs),
}

/// Arguments for the conversion step
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Tab-separated source file, one token per row
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Corpus file to create
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Columns stacked into each token (comma-separated, 0-based)
    #[arg(short, long, value_delimiter = ',', default_value = "2")]
    pub cols: Vec<usize>,

    /// Separator between stacked columns
    #[arg(short, long, default_value = "|")]
    pub joiner: String,

    /// Skip lines starting with this prefix (repeatable; replaces the defaults)
    #[arg(long = "forbidden-start", value_name = "PREFIX")]
    pub forbidden_starts: Vec<String>,
}

/// Corpus options shared by `iterate` and `stats`
#[derive(Args, Debug, Clone)]
pub struct CorpusOptions {
    /// Corpus file, one sentence per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// JSON configuration file; command line flags override it
    #[arg(long, value_name = "CONFIG_FILE", env = "CORPORA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stopword language (name or ISO code)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Disable stopword removal
    #[arg(long, conflicts_with = "language")]
    pub no_stopwords: bool,

    /// Annotation layer checked against the stopword list
    #[arg(short = 'i', long)]
    pub stopword_index: Option<usize>,

    /// Separator between annotation layers
    #[arg(short, long)]
    pub joiner: Option<String>,

    /// Custom character removal regex
    #[arg(long, value_name = "REGEX", conflicts_with = "keep_chars")]
    pub remove_chars: Option<String>,

    /// Disable character removal
    #[arg(long)]
    pub keep_chars: bool,

    /// Keep repeated identical lines
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Keep the original token casing
    #[arg(long)]
    pub keep_case: bool,

    /// Handling of tokens without the checked annotation layer
    #[arg(long, value_enum)]
    pub missing_layer: Option<MissingLayerArg>,
}

/// Arguments for streaming a corpus
#[derive(Parser, Debug, Clone)]
pub struct IterateArgs {
    #[command(flatten)]
    pub corpus: CorpusOptions,

    /// Stop after this many sentences
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusOptions,
}

/// Missing-layer policies available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingLayerArg {
    /// Keep the token
    Keep,
    /// Drop the token
    Drop,
    /// Abort with an error
    Error,
}

impl From<MissingLayerArg> for MissingLayerPolicy {
    fn from(arg: MissingLayerArg) -> Self {
        match arg {
            MissingLayerArg::Keep => MissingLayerPolicy::Keep,
            MissingLayerArg::Drop => MissingLayerPolicy::Drop,
            MissingLayerArg::Error => MissingLayerPolicy::Error,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
