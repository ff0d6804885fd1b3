//! Filename resolution for saved images.
//!
//! Derives a safe on-disk name from the last segment of a URL path, falls
//! back to [`DEFAULT_FILENAME`] when the path gives nothing usable, and
//! disambiguates names already issued in the current run with a numeric
//! suffix (`cat.png`, `cat_1.png`, `cat_2.png`, ...).

mod collision;
mod path;
mod sanitize;

use std::collections::HashSet;

pub use collision::{disambiguate, split_extension};
pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Name used when the URL path has no segment or the segment has no extension.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Linux NAME_MAX in bytes. No resolved name is longer.
pub const NAME_MAX: usize = 255;

/// Derives the pre-disambiguation filename for `url`.
///
/// # Examples
///
/// - `candidate_filename("http://a/x.png")` → `"x.png"`
/// - `candidate_filename("http://a/")` → `"downloaded_image.jpg"`
/// - `candidate_filename("http://a/photo")` → `"downloaded_image.jpg"`
pub fn candidate_filename(url: &str) -> String {
    filename_from_url_path(url)
        .map(|raw| sanitize_filename_for_linux(&raw))
        .filter(|name| !name.is_empty() && name.contains('.'))
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

/// Filenames issued during one run. A name handed out by [`resolve`](Self::resolve)
/// is never handed out again by the same set.
#[derive(Debug, Default)]
pub struct UsedFilenames {
    names: HashSet<String>,
}

impl UsedFilenames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a unique filename for `url` and records it as used.
    pub fn resolve(&mut self, url: &str) -> String {
        let name = disambiguate(&candidate_filename(url), &self.names);
        self.names.insert(name.clone());
        name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
