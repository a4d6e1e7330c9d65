//! Tracing subscriber setup.
//!
//! Log records go to stderr so they never mix with JSON on stdout.

use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `-v` and `-q` pin the level; otherwise `RUST_LOG` applies, falling back to
/// warnings only.
pub fn init(verbose: bool, quiet: bool) {
    let filter = match (verbose, quiet) {
        (true, _) => EnvFilter::new("debug"),
        (_, true) => EnvFilter::new("error"),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // a subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
