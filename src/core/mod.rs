// Core status-line logic

pub mod composer;
pub mod config;
pub mod delta;
pub mod driver;
pub mod probes;
pub mod reader;
pub mod schedule;

// Re-export commonly used items
pub use composer::StatusComposer;
pub use config::{Config, ProbeKind};
pub use delta::CounterState;
pub use driver::Driver;
pub use probes::{Probe, ProbeResult};
pub use schedule::ProbeSchedule;
