// Formatting module

pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_free_space, format_hours_minutes, format_rate, kib_to_gib, RateUnits};
