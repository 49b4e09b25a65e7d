//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit default level
///
/// `RUST_LOG` still overrides the given level when set. Safe to call
/// from tests; a second initialization is silently ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}
