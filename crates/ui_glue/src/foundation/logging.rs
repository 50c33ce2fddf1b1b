//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter, falling back to `RUST_LOG`
pub fn init_with_filter(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    // A second initialisation (e.g. from tests) is harmless
    let _ = builder.try_init();
}
