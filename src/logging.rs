//! Logging init for the command-line tool: stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,urlcodec=info";
const VERBOSE_FILTER: &str = "debug";

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between the quiet
/// default and debug output (which includes every rejected input).
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
