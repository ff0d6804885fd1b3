//! Per-URL results and their console rendering.

use super::FetchError;
use std::fmt;
use std::path::PathBuf;

/// Deliberate policy rejections. Not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotImage,
    TooLarge,
    Duplicate,
}

impl SkipReason {
    pub fn label(self) -> &'static str {
        match self {
            SkipReason::NotImage => "not an image",
            SkipReason::TooLarge => "file too large",
            SkipReason::Duplicate => "duplicate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Saved { filename: String, path: PathBuf },
    Skipped(SkipReason),
}

/// One URL and what happened to it.
#[derive(Debug)]
pub struct FetchReport {
    pub url: String,
    pub result: Result<FetchOutcome, FetchError>,
}

impl FetchReport {
    /// Console lines for this URL.
    pub fn lines(&self) -> Vec<String> {
        match &self.result {
            Ok(FetchOutcome::Saved { filename, path }) => vec![
                format!("✓ Successfully fetched: {}", filename),
                format!("✓ Image saved to {}", path.display()),
            ],
            Ok(FetchOutcome::Skipped(reason)) => {
                vec![format!("✗ Skipped ({}): {}", reason.label(), self.url)]
            }
            Err(e) if e.is_connection() => vec![format!("✗ Connection error: {}", e)],
            Err(e) => vec![format!("✗ Error: {}", e)],
        }
    }
}

impl fmt::Display for FetchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
