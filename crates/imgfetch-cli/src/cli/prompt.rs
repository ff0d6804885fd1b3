//! The single input line.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter image URLs (separated by spaces): ";

pub fn split_urls(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Writes the prompt and reads one line of whitespace-separated URLs.
/// EOF yields an empty list.
pub fn read_urls<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Vec<String>> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(split_urls(&line))
}
