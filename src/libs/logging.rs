use super::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber when debug routing is enabled.
///
/// Reads `RUST_LOG` for filtering and falls back to `debug`. Log lines go to
/// stderr so they never mix with the tables printed on stdout.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // A subscriber may already be set by an embedding test harness.
    let _ = fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
