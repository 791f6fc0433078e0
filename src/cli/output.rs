//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{CorporaArgs, OutputFormat};
use crate::error::Result;

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CorporaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Write one sentence in the specified format.
///
/// Human output joins tokens with spaces, mirroring the corpus file format;
/// JSON output writes one array per line.
pub fn write_sentence<W: Write>(
    writer: &mut W,
    tokens: &[String],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{}", tokens.join(" "))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, tokens)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CorporaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{}: {}", humanize_key(&key), format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CorporaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Turn `snake_case` field names into labels.
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("lines_read"), "Lines read");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_write_sentence_human() {
        let mut out = Vec::new();
        let tokens = vec!["gatto|noun".to_string(), "nero|adj".to_string()];
        write_sentence(&mut out, &tokens, OutputFormat::Human).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "gatto|noun nero|adj\n");
    }

    #[test]
    fn test_write_sentence_json() {
        let mut out = Vec::new();
        let tokens = vec!["perché".to_string(), "\"".to_string()];
        write_sentence(&mut out, &tokens, OutputFormat::Json).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[\"perché\",\"\\\"\"]\n");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&serde_json::json!(42)), "42");
        assert_eq!(format_value(&serde_json::json!([1, 2])), "[1, 2]");
    }
}
