//! Corpora CLI binary.
//!
//! ```text
//! corpora convert paisa.conll paisa.txt --cols 2,3   # token rows -> sentence lines
//! corpora iterate paisa.txt -i 0 -n 10               # stream filtered sentences
//! corpora stats paisa.txt -f json                    # count sentences and tokens
//! ```
//!
//! Log output goes to stderr at warn level; `-vv` raises it to info, `-vvv` to
//! debug, and `-q` keeps only errors.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use corpora::cli::args::*;
use corpora::cli::commands::*;

fn main() {
    let args = CorporaArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
