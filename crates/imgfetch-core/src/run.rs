//! One batch run: a fresh context, every URL in input order, a summary.

use crate::checksum::SeenDigests;
use crate::fetch::{FetchError, FetchOutcome, FetchReport, Fetcher};
use crate::naming::UsedFilenames;
use crate::storage;
use std::path::Path;

/// State scoped to a single run. Owned by the run loop and dropped with it.
#[derive(Debug, Default)]
pub struct RunContext {
    pub filenames: UsedFilenames,
    pub digests: SeenDigests,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Per-run tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &Result<FetchOutcome, FetchError>) {
        match result {
            Ok(FetchOutcome::Saved { .. }) => self.saved += 1,
            Ok(FetchOutcome::Skipped(_)) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }
}

/// Creates the output directory (and parents) if absent.
pub fn prepare_output_dir(dir: &Path) -> Result<(), FetchError> {
    storage::ensure_dir(dir).map_err(|source| FetchError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Fetches each URL in order, handing every report to `on_report` as soon as
/// it is known. Never stops early.
pub fn run_batch<I, S, F>(fetcher: &Fetcher, urls: I, mut on_report: F) -> RunSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&FetchReport),
{
    let mut ctx = RunContext::new();
    let mut summary = RunSummary::default();

    for url in urls {
        let url = url.as_ref();
        let result = fetcher.fetch(url, &mut ctx);
        match &result {
            Ok(FetchOutcome::Saved { path, .. }) => {
                tracing::info!(url, path = %path.display(), "saved")
            }
            Ok(FetchOutcome::Skipped(reason)) => {
                tracing::info!(url, reason = reason.label(), "skipped")
            }
            Err(e) => tracing::warn!(url, error = %e, "fetch failed"),
        }
        summary.record(&result);
        on_report(&FetchReport {
            url: url.to_string(),
            result,
        });
    }

    tracing::info!(
        saved = summary.saved,
        skipped = summary.skipped,
        failed = summary.failed,
        "run finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::SkipReason;
    use std::path::PathBuf;

    #[test]
    fn summary_counts_each_class() {
        let mut s = RunSummary::default();
        s.record(&Ok(FetchOutcome::Saved {
            filename: "x.png".into(),
            path: PathBuf::from("x.png"),
        }));
        s.record(&Ok(FetchOutcome::Skipped(SkipReason::Duplicate)));
        s.record(&Ok(FetchOutcome::Skipped(SkipReason::NotImage)));
        s.record(&Err(FetchError::InvalidContentLength("x".into())));
        assert_eq!(
            s,
            RunSummary {
                saved: 1,
                skipped: 2,
                failed: 1
            }
        );
        assert_eq!(s.total(), 4);
    }

    #[test]
    fn prepare_output_dir_reports_create_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("Fetched_Images");
        std::fs::write(&blocker, b"not a dir").unwrap();
        let err = prepare_output_dir(&blocker.join("inner")).unwrap_err();
        assert!(matches!(err, FetchError::CreateDir { .. }));
        assert!(!err.is_connection());
    }

    #[test]
    fn empty_batch_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = crate::config::FetcherConfig {
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut seen = 0;
        let summary = run_batch(&Fetcher::new(&cfg), Vec::<String>::new(), |_| seen += 1);
        assert_eq!(summary.total(), 0);
        assert_eq!(seen, 0);
    }
}
