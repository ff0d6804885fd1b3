//! Blocking HTTP GET over libcurl.
//!
//! One `Easy` handle per request. The caller screens the response head
//! before any body byte is kept; a rejected response is aborted without
//! downloading the rest of it. Bodies are also capped at a byte ceiling
//! whether or not the server declared a length.

mod error;
mod parse;

pub use error::HttpError;
pub use parse::ResponseHead;

use crate::config::FetcherConfig;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::str;
use std::time::Duration;

/// What a GET produced.
#[derive(Debug)]
pub enum Transfer<B> {
    /// The screen broke off the transfer at the response head.
    Stopped(B),
    /// Full body received.
    Complete { head: ResponseHead, body: Vec<u8> },
    /// Body grew past the ceiling and the transfer was aborted.
    Oversized { head: ResponseHead, received: u64 },
}

enum Phase<B> {
    Head,
    Body,
    Stopped(B),
    Oversized(u64),
}

/// Blocking GET client with a fixed identity and timeouts.
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
    timeout: Duration,
    max_redirects: u32,
    max_body_bytes: u64,
}

impl HttpClient {
    pub fn new(config: &FetcherConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_redirects: config.max_redirects,
            max_body_bytes: config.max_content_length,
        }
    }

    /// Performs a GET for `url`.
    ///
    /// `screen` runs exactly once per successful exchange, on the head of the
    /// final response in the redirect chain, before any body byte is kept.
    /// `Break(b)` aborts the transfer and is returned as [`Transfer::Stopped`].
    pub fn get<B, S>(&self, url: &str, mut screen: S) -> Result<Transfer<B>, HttpError>
    where
        S: FnMut(&ResponseHead) -> ControlFlow<B>,
    {
        let lines: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let mut body: Vec<u8> = Vec::new();
        let mut phase: Phase<B> = Phase::Head;
        let max_body = self.max_body_bytes;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirects)?;
        easy.connect_timeout(self.timeout)?;
        // Stall timeout: fail if no byte arrives for `timeout`.
        easy.low_speed_limit(1)?;
        easy.low_speed_time(self.timeout)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.borrow_mut().push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                if let Phase::Head = phase {
                    let head = parse::parse_head(&lines.borrow());
                    phase = match screen(&head) {
                        ControlFlow::Continue(()) => Phase::Body,
                        ControlFlow::Break(b) => Phase::Stopped(b),
                    };
                }
                if !matches!(phase, Phase::Body) {
                    return Ok(0);
                }
                let received = (body.len() + data.len()) as u64;
                if received > max_body {
                    phase = Phase::Oversized(received);
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            let result = transfer.perform();
            result
        };

        if let Err(e) = performed {
            let aborted_by_us = matches!(phase, Phase::Stopped(_) | Phase::Oversized(_));
            if !(aborted_by_us && e.is_write_error()) {
                let err = HttpError::Transport(e);
                tracing::debug!(url, error = %err, timed_out = err.is_timeout(), "GET failed");
                return Err(err);
            }
        }

        let mut head = parse::parse_head(&lines.into_inner());
        let code = easy.response_code()?;
        if code != 0 {
            head.status = code;
        }
        tracing::debug!(url, status = head.status, bytes = body.len(), "GET finished");

        Ok(match phase {
            Phase::Head => match screen(&head) {
                ControlFlow::Continue(()) => Transfer::Complete { head, body },
                ControlFlow::Break(b) => Transfer::Stopped(b),
            },
            Phase::Body => Transfer::Complete { head, body },
            Phase::Stopped(b) => Transfer::Stopped(b),
            Phase::Oversized(received) => Transfer::Oversized { head, received },
        })
    }
}
