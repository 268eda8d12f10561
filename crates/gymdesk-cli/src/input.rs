//! Line-oriented input helpers for the menus.
//!
//! All prompts read a full line from stdin and trim it. Numeric prompts
//! never panic on bad input: a failed parse prints a message and returns
//! `None`, and the calling menu action simply returns to its menu.

use std::io::{self, Write};
use std::str::FromStr;

/// Print a prompt and read one trimmed line.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Prompt for a required numeric value.
///
/// Returns `None` (after printing a message) if the input does not parse.
pub fn prompt_parse<T: FromStr>(label: &str) -> io::Result<Option<T>> {
    let raw = prompt(label)?;
    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid number: '{raw}'");
            Ok(None)
        }
    }
}

/// Prompt for a text field update; blank keeps the current value.
pub fn prompt_or_keep(label: &str, current: &str) -> io::Result<String> {
    let raw = prompt(label)?;
    if raw.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(raw)
    }
}

/// Prompt for a numeric field update; blank keeps the current value.
///
/// Returns `None` (after printing a message) if a non-blank input does
/// not parse.
pub fn prompt_parse_or_keep<T: FromStr + Copy>(label: &str, current: T) -> io::Result<Option<T>> {
    let raw = prompt(label)?;
    if raw.is_empty() {
        return Ok(Some(current));
    }

    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Invalid number: '{raw}'");
            Ok(None)
        }
    }
}
