//! Diagnostic logging setup for the binary

use log::LevelFilter;
use std::env;

/// Install the global `env_logger`
///
/// `verbose` selects Debug, otherwise Info. A `RUST_LOG` value takes precedence over both.
/// Calling this twice is harmless; the second call leaves the first logger in place.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
