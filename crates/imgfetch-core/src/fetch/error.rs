//! Per-URL fetch failures.

use crate::http::HttpError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a URL could not be fetched and saved. Skips are not errors; see
/// [`SkipReason`](super::SkipReason).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure or non-2xx status.
    #[error(transparent)]
    Connection(#[from] HttpError),
    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),
    #[error("could not create output directory {}: {}", .path.display(), .source)]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

impl FetchError {
    /// True for the network failure class (reported as a connection error).
    pub fn is_connection(&self) -> bool {
        matches!(self, FetchError::Connection(_))
    }
}
