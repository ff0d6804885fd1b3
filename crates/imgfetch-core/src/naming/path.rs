//! Filename extraction from URL path.

/// Returns the final segment of the URL path (the text after the last `/`).
///
/// `None` if the URL cannot be parsed or the path ends in `/`. Query and
/// fragment are never part of the result.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
