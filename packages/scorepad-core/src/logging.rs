//! Process-wide tracing setup for binaries embedding the engine.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize structured logging.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. With `json` set,
/// events are emitted as one JSON object per line. Safe to call more than
/// once; later calls are ignored.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init().ok();
    } else {
        builder.try_init().ok();
    }
}
