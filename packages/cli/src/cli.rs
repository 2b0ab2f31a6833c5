//! Command-line interface for Roman numeral addition.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use console::style;
use serde::Serialize;

use roman_engine::{add, parse, Numeral};

use crate::error::{CliError, Result};

/// Prompt shown when operands are read from stdin.
pub const PROMPT: &str = "Enter two Roman numerals separated by spaces.";

/// Add two Roman numerals in the range I..MMMMCMXCIX.
#[derive(Debug, Parser)]
#[command(name = "roman-add")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// First numeral (both operands are read from stdin when omitted)
    #[arg(requires = "right")]
    pub left: Option<String>,

    /// Second numeral
    pub right: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Result: <numeral>`
    Text,
    /// A single JSON object
    Json,
}

/// JSON report for one addition.
#[derive(Debug, Serialize)]
struct Report<'a> {
    left: &'a str,
    right: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a Numeral>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_with(&cli, stdin.lock(), &mut stdout)
}

/// Run with explicit input and output streams.
pub fn run_with<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<()> {
    let (left, right) = match (&cli.left, &cli.right) {
        (Some(left), Some(right)) => (left.clone(), right.clone()),
        _ => {
            if cli.format == OutputFormat::Text {
                writeln!(out, "{PROMPT}")?;
                out.flush()?;
            }
            read_operands(input)?
        }
    };

    tracing::debug!(left = %left, right = %right, "Adding operands");
    let outcome = evaluate(&left, &right);

    match cli.format {
        OutputFormat::Text => {
            let sum = outcome?;
            writeln!(out, "{} {}", style("Result:").green().bold(), sum)?;
        }
        OutputFormat::Json => {
            let report = Report {
                left: &left,
                right: &right,
                result: outcome.as_ref().ok(),
                error: outcome.as_ref().err().map(ToString::to_string),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
            outcome?;
        }
    }

    Ok(())
}

/// Parse both operands and add them.
fn evaluate(left: &str, right: &str) -> roman_engine::Result<Numeral> {
    let a = parse(left)?;
    let b = parse(right)?;
    Ok(add(&a, &b)?)
}

/// Read the first two whitespace-delimited tokens, which may span lines.
fn read_operands<R: BufRead>(input: R) -> Result<(String, String)> {
    let mut tokens = Vec::with_capacity(2);
    for line in input.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
        if tokens.len() >= 2 {
            break;
        }
    }

    let mut tokens = tokens.into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(CliError::MissingOperand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roman_engine::{InvalidNumeral, NumeralError, Overflow};

    fn run_capture(args: &[&str], stdin: &str) -> (Result<()>, String) {
        let cli = Cli::parse_from(args);
        let mut out = Vec::new();
        let result = run_with(&cli, stdin.as_bytes(), &mut out);
        let text = String::from_utf8(out).unwrap();
        (result, console::strip_ansi_codes(&text).into_owned())
    }

    #[test]
    fn test_cli_parse_operands() {
        let cli = Cli::parse_from(["roman-add", "XIV", "IX"]);
        assert_eq!(cli.left.as_deref(), Some("XIV"));
        assert_eq!(cli.right.as_deref(), Some("IX"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parse_json_format() {
        let cli = Cli::parse_from(["roman-add", "--format", "json"]);
        assert!(cli.left.is_none());
        assert!(cli.right.is_none());
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_single_operand() {
        assert!(Cli::try_parse_from(["roman-add", "XIV"]).is_err());
    }

    #[test]
    fn test_run_with_arguments() {
        let (result, out) = run_capture(&["roman-add", "IV", "I"], "");
        assert!(result.is_ok());
        assert_eq!(out, "Result: V\n");
    }

    #[test]
    fn test_run_reads_stdin_across_lines() {
        let (result, out) = run_capture(&["roman-add"], "IV\n  IX\n");
        assert!(result.is_ok());
        assert_eq!(out, format!("{PROMPT}\nResult: XIII\n"));
    }

    #[test]
    fn test_run_stdin_ignores_extra_tokens() {
        let (result, out) = run_capture(&["roman-add"], "X X X\n");
        assert!(result.is_ok());
        assert!(out.ends_with("Result: XX\n"));
    }

    #[test]
    fn test_run_missing_operand() {
        let (result, _) = run_capture(&["roman-add"], "XIV\n");
        assert!(matches!(result, Err(CliError::MissingOperand)));
    }

    #[test]
    fn test_run_invalid_operand() {
        let (result, _) = run_capture(&["roman-add", "VX", "I"], "");
        assert!(matches!(
            result,
            Err(CliError::Numeral(NumeralError::Invalid(InvalidNumeral::NotCanonical(ref t)))) if t == "VX"
        ));
    }

    #[test]
    fn test_run_empty_operand() {
        let (result, out) = run_capture(&["roman-add", "", "I"], "");
        assert!(matches!(
            result,
            Err(CliError::Numeral(NumeralError::Invalid(InvalidNumeral::Empty)))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_overflow() {
        let (result, _) = run_capture(&["roman-add", "MMMMCMXCIX", "I"], "");
        assert!(matches!(
            result,
            Err(CliError::Numeral(NumeralError::Overflow(Overflow)))
        ));
    }

    #[test]
    fn test_run_json_success() {
        let (result, out) = run_capture(&["roman-add", "-f", "json", "XLIX", "I"], "");
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"left": "XLIX", "right": "I", "result": "L"})
        );
    }

    #[test]
    fn test_run_json_error_is_reported() {
        let (result, out) = run_capture(&["roman-add", "--format", "json"], "MMMM M\n");
        assert!(result.is_err());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "left": "MMMM",
                "right": "M",
                "error": "Resulting Roman numeral larger than 4999"
            })
        );
    }
}
