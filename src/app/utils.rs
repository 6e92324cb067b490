use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

pub const INVESTOR_ID_EMPTY: &str = "Investor ID cannot be empty.";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format. Please use yyyy-MM-dd.";

pub fn prompt(label: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read input for '{}'", label.trim()))?;

    Ok(line.trim().to_string())
}

pub fn prompt_stdin(label: &str) -> Result<String> {
    prompt(label, &mut io::stdin().lock(), &mut io::stdout())
}

pub fn parse_investor_id(input: &str) -> Result<String> {
    let investor_id = input.trim();
    if investor_id.is_empty() {
        bail!(INVESTOR_ID_EMPTY);
    }
    Ok(investor_id.to_string())
}

/// Reference dates must be given exactly as `yyyy-MM-dd`.
pub fn parse_as_of(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").with_context(|| INVALID_DATE_FORMAT)
}
