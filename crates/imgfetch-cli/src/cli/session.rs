//! One interactive run: banner, prompt, fetch loop, closing line.

use super::prompt;
use imgfetch_core::fetch::Fetcher;
use imgfetch_core::run::{self, RunSummary};
use std::io::{self, BufRead, Write};

const BANNER: &str = "Welcome to the Ubuntu Image Fetcher\n\
                      A tool for mindfully collecting images from the web\n";
const FAREWELL: &str = "Connection strengthened. Community enriched.";

/// Runs a whole session against `input`/`output`.
///
/// Only failures to write the banner, prompt or closing line are returned;
/// a report line that cannot be printed is logged and the batch goes on.
/// Unreadable input counts as no URLs; a missing output directory that
/// cannot be created is reported and no URL is fetched.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    fetcher: &Fetcher,
) -> io::Result<RunSummary> {
    writeln!(output, "{}", BANNER)?;

    let urls = match prompt::read_urls(input, &mut output) {
        Ok(urls) => urls,
        Err(e) => {
            tracing::warn!(error = %e, "could not read URLs");
            writeln!(output)?;
            Vec::new()
        }
    };
    tracing::info!(count = urls.len(), "urls read");

    let summary = match run::prepare_output_dir(fetcher.output_dir()) {
        Ok(()) => run::run_batch(fetcher, &urls, |report| {
            if let Err(e) = writeln!(output, "{}", report) {
                tracing::warn!(url = %report.url, error = %e, "could not print report");
            }
        }),
        Err(e) => {
            tracing::error!(error = %e, "output directory unavailable");
            writeln!(output, "✗ Error: {}", e)?;
            RunSummary::default()
        }
    };

    writeln!(output, "\n{}", FAREWELL)?;
    output.flush()?;
    Ok(summary)
}
