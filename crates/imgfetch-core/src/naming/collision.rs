//! Numeric-suffix disambiguation of names already used in a run.

use super::NAME_MAX;
use std::collections::HashSet;

/// Extensions longer than this are not preserved when a name must be cut.
const MAX_KEPT_EXTENSION: usize = 32;

/// Splits `name` into base and extension, the extension keeping its dot.
///
/// Leading dots never start an extension: `.png` has none, `a.tar.gz`
/// splits into `a.tar` and `.gz`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => name.split_at(stem_start + idx),
        None => (name, ""),
    }
}

/// Longest prefix of `s` of at most `max` bytes ending on a char boundary.
fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Joins `base`, `suffix` and `ext` into a name of at most NAME_MAX bytes.
///
/// Only the base is shortened; `suffix` always survives. `ext` survives too
/// unless it is longer than 32 bytes, in which case it is treated as part
/// of the base.
pub(super) fn fit_name(base: &str, suffix: &str, ext: &str) -> String {
    if base.len() + suffix.len() + ext.len() <= NAME_MAX {
        return format!("{}{}{}", base, suffix, ext);
    }
    if ext.len() > MAX_KEPT_EXTENSION {
        let whole = format!("{}{}", base, ext);
        let keep = truncate_on_char_boundary(&whole, NAME_MAX - suffix.len());
        return format!("{}{}", keep, suffix);
    }
    let budget = NAME_MAX - suffix.len() - ext.len();
    format!("{}{}{}", truncate_on_char_boundary(base, budget), suffix, ext)
}

/// Returns `candidate` if unused, else the first of `base_1.ext`,
/// `base_2.ext`, ... not in `used`. Results never exceed NAME_MAX bytes.
pub fn disambiguate(candidate: &str, used: &HashSet<String>) -> String {
    if !used.contains(candidate) {
        return candidate.to_string();
    }
    let (base, ext) = split_extension(candidate);
    let mut counter: u64 = 1;
    loop {
        let name = fit_name(base, &format!("_{}", counter), ext);
        if !used.contains(&name) {
            return name;
        }
        counter += 1;
    }
}
