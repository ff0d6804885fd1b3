mod cli;

use crate::cli::Cli;

fn main() {
    // Per-URL failures never reach here; only console I/O errors do.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("imgfetch error: {:#}", err);
    }
}
