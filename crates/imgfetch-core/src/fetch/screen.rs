//! Content-type and declared-size gates on a response head.

use super::{FetchError, SkipReason};
use crate::http::ResponseHead;

/// Applies the content-type and declared-length gates, in that order.
///
/// `Ok(None)` lets the body through. A missing `Content-Type` counts as
/// not an image; a missing `Content-Length` is not checked here.
pub fn screen_head(
    head: &ResponseHead,
    max_content_length: u64,
) -> Result<Option<SkipReason>, FetchError> {
    let content_type = head.content_type.as_deref().unwrap_or("");
    if !content_type.starts_with("image/") {
        return Ok(Some(SkipReason::NotImage));
    }

    if let Some(raw) = head.content_length.as_deref() {
        let declared: u64 = raw
            .trim()
            .parse()
            .map_err(|_| FetchError::InvalidContentLength(raw.to_string()))?;
        if declared > max_content_length {
            return Ok(Some(SkipReason::TooLarge));
        }
    }

    Ok(None)
}
