//! Tracing setup for scorepad test binaries.
//!
//! Unit tests install it from a `ctor` in `scorepad-core`'s `lib.rs`;
//! integration tests install it from `tests/support`. Whichever runs first wins.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process.
///
/// Engine no-ops (rejected cell text, unknown players) log at `debug` and
/// deferred reorder checks at `trace`, so a failing session test is usually
/// rerun with:
///
/// ```bash
/// TEST_LOG=scorepad_core=trace cargo test -p scorepad-core session::
/// ```
pub fn init() {
    INSTALLED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
