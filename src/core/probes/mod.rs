//! Metric probes.
//!
//! Each probe samples one metric and renders it as a short fragment of the
//! status line. Probes own whatever history they need (previous counters,
//! previous CPU ticks); nothing is shared between them.

mod arp;
mod battery;
mod clock;
mod cpu;
mod disk;
mod memory;
mod network;
mod temperature;
mod volume;

pub use arp::{detect_spoofing, ArpProbe};
pub use battery::{battery_text, BatteryProbe};
pub use clock::{format_time, ClockProbe};
pub use cpu::{CpuProbe, CpuTicks, TickFrame};
pub use disk::DiskProbe;
pub use memory::{MemInfo, MemoryProbe};
pub use network::{sum_counters, NetworkProbe};
pub use temperature::{TemperatureProbe, TemperatureReading};
pub use volume::{volume_text, VolumeProbe};

use crate::core::config::{Config, ProbeKind};
use crate::error::Result;
use crate::platform::{AmixerMixer, LinuxWireless, SysinfoHost};

/// A self-contained metric sampler.
pub trait Probe {
    /// Name used in logs and in [`ProbeResult::label`].
    fn label(&self) -> &str;

    /// Take a fresh sample and render it. An empty string blanks the slot.
    fn sample(&mut self) -> Result<String>;
}

/// The fragment one probe currently contributes to the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub label: String,
    pub text: String,
}

impl ProbeResult {
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: String::new(),
        }
    }
}

/// Build the probe for `kind` with the platform's default capabilities.
pub fn build(kind: ProbeKind, config: &Config) -> Box<dyn Probe> {
    let glyphs = &config.glyphs;

    match kind {
        ProbeKind::Network => Box::new(NetworkProbe::new(
            config.network.clone(),
            glyphs.clone(),
            LinuxWireless::new(config.network.wireless_path.clone()),
        )),
        ProbeKind::Cpu => Box::new(CpuProbe::new(
            config.cpu.clone(),
            glyphs.cpu.clone(),
            SysinfoHost,
        )),
        ProbeKind::Memory => Box::new(MemoryProbe::new(
            config.memory.clone(),
            glyphs.memory.clone(),
        )),
        ProbeKind::Disk => Box::new(DiskProbe::new(config.disk.clone(), glyphs.disk.clone())),
        ProbeKind::Temperature => Box::new(TemperatureProbe::new(
            config.temperature.clone(),
            glyphs.temperature.clone(),
        )),
        ProbeKind::Battery => Box::new(BatteryProbe::new(config.battery.clone(), glyphs.clone())),
        ProbeKind::Volume => Box::new(VolumeProbe::new(
            config.volume.control.clone(),
            glyphs.clone(),
            AmixerMixer::new(config.volume.card.clone()),
        )),
        ProbeKind::Clock => Box::new(ClockProbe::new(config.clock.format.clone())),
        ProbeKind::Arp => Box::new(ArpProbe::new(config.arp.clone(), glyphs.clone())),
    }
}
