use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Sends engine diagnostics to stderr so stdout stays clean for the game and
/// for `--json` snapshots. `RUST_LOG` overrides the level.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
