// Command handlers module
pub mod completions;
pub mod config;
pub mod run;
pub mod version;

// Re-exports for cleaner imports
pub use completions::execute as completions;
pub use config::execute as config;
pub use run::execute as run;
pub use version::execute as version;
