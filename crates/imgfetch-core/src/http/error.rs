//! Network-level failures of a single GET.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// libcurl reported an error (bad URL, DNS, refused, timeout, reset).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The final response had a non-2xx status.
    #[error("HTTP {code} for url: {url}")]
    Status { code: u32, url: String },
}

impl HttpError {
    /// Connect timeout or the stall timeout (no byte for the whole window).
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_operation_timedout())
    }
}
