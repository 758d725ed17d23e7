//! Tracing subscriber setup shared by both binaries

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used by `--verbose`: the library and both binaries log at DEBUG
const VERBOSE_DIRECTIVES: &str = "fitness_webapp=debug,update_readme_info=debug,fitness_api=debug,info";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` flag sets this crate and its binaries to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs are written to stderr so reports on stdout stay machine-readable.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // A second initialisation (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
