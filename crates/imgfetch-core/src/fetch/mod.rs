//! Fetch orchestration for a single URL.
//!
//! Gates, in order: transport and status, content type, declared length,
//! received length, duplicate content. A response that fails a gate is
//! reported and nothing is written. Survivors get a run-unique filename and
//! are written in full into the output directory.

mod error;
mod outcome;
mod screen;

pub use error::FetchError;
pub use outcome::{FetchOutcome, FetchReport, SkipReason};
pub use screen::screen_head;

use crate::config::FetcherConfig;
use crate::http::{HttpClient, HttpError, ResponseHead, Transfer};
use crate::run::RunContext;
use crate::storage;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Fetches URLs into one output directory under a fixed policy.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: HttpClient,
    output_dir: PathBuf,
    max_content_length: u64,
}

impl Fetcher {
    pub fn new(config: &FetcherConfig) -> Self {
        Self {
            client: HttpClient::new(config),
            output_dir: config.output_dir.clone(),
            max_content_length: config.max_content_length,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetches `url` and saves it if it passes every gate.
    ///
    /// `ctx` is only touched on the dedupe and naming steps: a body that
    /// reaches dedupe is remembered, and a name is reserved only for bodies
    /// that are about to be written.
    pub fn fetch(&self, url: &str, ctx: &mut RunContext) -> Result<FetchOutcome, FetchError> {
        let max = self.max_content_length;
        let transfer = self
            .client
            .get(url, |head| match admit(url, head, max) {
                Ok(None) => ControlFlow::Continue(()),
                Ok(Some(reason)) => ControlFlow::Break(Ok(reason)),
                Err(e) => ControlFlow::Break(Err(e)),
            })?;

        let body = match transfer {
            Transfer::Stopped(verdict) => return verdict.map(FetchOutcome::Skipped),
            Transfer::Oversized { received, .. } => {
                tracing::debug!(url, received, limit = max, "body exceeded size ceiling");
                return Ok(FetchOutcome::Skipped(SkipReason::TooLarge));
            }
            Transfer::Complete { body, .. } => body,
        };

        if ctx.digests.is_duplicate(&body) {
            return Ok(FetchOutcome::Skipped(SkipReason::Duplicate));
        }

        let filename = ctx.filenames.resolve(url);
        let path = self.output_dir.join(&filename);
        storage::write_complete(&path, &body).map_err(|source| FetchError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(url, path = %path.display(), bytes = body.len(), "image written");

        Ok(FetchOutcome::Saved { filename, path })
    }
}

/// Status check followed by the head gates.
fn admit(url: &str, head: &ResponseHead, max: u64) -> Result<Option<SkipReason>, FetchError> {
    if !head.is_success() {
        return Err(FetchError::Connection(HttpError::Status {
            code: head.status,
            url: url.to_string(),
        }));
    }
    screen_head(head, max)
}
