//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment variable
pub fn init() {
    env_logger::init();
}

/// Initialize logging, ignoring a second initialization.
///
/// Tests and embedding hosts may both try to install a logger; the loser
/// of that race should not panic.
pub fn try_init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
