use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. User-facing lines already go to
/// stdout and stderr, so diagnostics stay silent until asked for.
pub const DEFAULT_FILTER: &str = "off";

/// Installs the fmt subscriber used by both binaries.
///
/// Logs go to stderr so stdout only carries the per-file outcome lines.
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
