//! Parse HTTP response header lines into a ResponseHead.

/// Status line and the headers the fetch gates look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// HTTP status code (0 if no status line was seen).
    pub status: u32,
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
    /// Raw `Content-Length` value if present; parsed by the caller.
    pub content_length: Option<String>,
}

impl ResponseHead {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parse collected header lines into a ResponseHead.
///
/// With redirects libcurl reports every response in the chain; only the
/// block after the last status line is used.
pub(crate) fn parse_head(lines: &[String]) -> ResponseHead {
    let start = lines
        .iter()
        .rposition(|l| l.starts_with("HTTP/"))
        .unwrap_or(0);

    let mut head = ResponseHead::default();
    for line in &lines[start..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head.status = line
                .split_whitespace()
                .nth(1)
                .and_then(|code| code.parse().ok())
                .unwrap_or(0);
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                head.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                head.content_length = Some(value.to_string());
            }
        }
    }
    head
}
