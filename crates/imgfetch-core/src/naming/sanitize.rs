//! Linux-safe filename sanitization.

use super::collision::{fit_name, split_extension};
use super::NAME_MAX;

/// Makes a URL-derived name safe to create inside the output directory.
///
/// - NUL, `/`, `\`, control characters and whitespace are unsafe; an inner
///   run of them becomes a single `_`, at either end they are dropped
/// - literal `_` in the name is kept as is
/// - leading/trailing dots are trimmed
/// - names over 255 bytes are cut in the base, keeping a short extension
pub fn sanitize_filename_for_linux(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            pending_sep = !out.is_empty();
            continue;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches('.');
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let (base, ext) = split_extension(trimmed);
    fit_name(base, "", ext)
}
