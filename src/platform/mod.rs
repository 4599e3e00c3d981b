// Platform-specific capabilities module

pub mod display;
pub mod fs;
pub mod host;
pub mod mixer;
pub mod wireless;

// Re-exports for cleaner imports
pub use display::{Sink, StdoutSink, XRootSink};
pub use fs::{free_space, FsSpace};
pub use host::{HostStats, SysinfoHost};
pub use mixer::{AmixerMixer, AudioMixerProvider, MixerReading};
pub use wireless::{LinuxWireless, WirelessInfoProvider};
