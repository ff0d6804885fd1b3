//! Disk writes for fetched images.
//!
//! A body is written to a uniquely named temp file inside the target
//! directory, synced, then persisted (renamed) onto the final name, so the
//! output directory never holds a half-written image. The temp file is
//! removed when any step fails. Temp names start with `.tmp`; resolved
//! names never start with a dot, so the two cannot collide.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Creates `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Writes all of `bytes` to `final_path`, replacing any existing file.
pub fn write_complete(final_path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match final_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(final_path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn write_complete_leaves_only_final_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        write_complete(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"\x89PNG\r\n\x1a\n");
        assert_eq!(entries(dir.path()), vec!["x.png"]);
    }

    #[test]
    fn write_complete_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        fs::write(&path, b"old content that is longer").unwrap();
        write_complete(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn writing_a_name_never_touches_its_part_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let part = dir.path().join("x.png.part");
        let plain = dir.path().join("x.png");

        write_complete(&part, b"first").unwrap();
        write_complete(&plain, b"second").unwrap();

        assert_eq!(fs::read(&part).unwrap(), b"first");
        assert_eq!(fs::read(&plain).unwrap(), b"second");
        assert_eq!(entries(dir.path()), vec!["x.png", "x.png.part"]);
    }

    #[test]
    fn write_into_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        assert!(write_complete(&path, b"data").is_err());
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("Fetched_Images");
        ensure_dir(&out).unwrap();
        assert!(out.is_dir());
        ensure_dir(&out).unwrap();
    }
}
