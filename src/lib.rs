// wmstatus library - public API

// Re-export error types
pub mod error;
pub use error::{Result, StatusError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use core::config::Config;

/// Initialize logging. `RUST_LOG` is honoured; otherwise warnings only,
/// raised to info and debug by each `-v`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level_for(verbosity));
    }
    builder.init();
}

fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
