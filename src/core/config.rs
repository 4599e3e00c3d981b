use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::schedule::ProbeSchedule;
use crate::error::{Result, StatusError};
use crate::utils::icons::Glyphs;

/// Every probe the composer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    Network,
    Cpu,
    Memory,
    Disk,
    Temperature,
    Battery,
    Volume,
    Clock,
    Arp,
}

impl ProbeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProbeKind::Network => "network",
            ProbeKind::Cpu => "cpu",
            ProbeKind::Memory => "memory",
            ProbeKind::Disk => "disk",
            ProbeKind::Temperature => "temperature",
            ProbeKind::Battery => "battery",
            ProbeKind::Volume => "volume",
            ProbeKind::Clock => "clock",
            ProbeKind::Arp => "arp",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Driver period in milliseconds
    pub tick_ms: u64,
    pub separator: String,
    /// Probes shown in the status line, left to right
    pub order: Vec<ProbeKind>,
    pub glyphs: Glyphs,
    pub network: NetworkConfig,
    pub cpu: CpuConfig,
    pub memory: MemoryConfig,
    pub disk: DiskConfig,
    pub temperature: TemperatureConfig,
    pub battery: BatteryConfig,
    pub volume: VolumeConfig,
    pub clock: ClockConfig,
    pub arp: ArpConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub wired_interface: Option<String>,
    pub wireless_interface: Option<String>,
    pub netdev_path: PathBuf,
    pub wireless_path: PathBuf,
    pub sysfs_net_dir: PathBuf,
    pub small_unit: String,
    pub large_unit: String,
    pub unit_threshold: f64,
    pub large_precision: usize,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    pub stat_path: PathBuf,
    /// Decimal places of the busy percentage
    pub precision: usize,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub meminfo_path: PathBuf,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    pub mount_points: Vec<PathBuf>,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureConfig {
    pub input_path: PathBuf,
    pub crit_path: Option<PathBuf>,
    pub interval: ProbeSchedule,
}

/// Which family of power-supply files the battery probe reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryUnits {
    /// `charge_*` when `charge_now` exists, otherwise `energy_*`
    #[default]
    Auto,
    Charge,
    Energy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    pub supply_dir: PathBuf,
    pub units: BatteryUnits,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub control: String,
    pub card: Option<String>,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// strftime-style pattern
    pub format: String,
    pub interval: ProbeSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArpConfig {
    pub arp_path: PathBuf,
    pub interval: ProbeSchedule,
}

fn every(ticks: u64) -> ProbeSchedule {
    ProbeSchedule::every(ticks).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            separator: " ".to_string(),
            order: vec![
                ProbeKind::Network,
                ProbeKind::Cpu,
                ProbeKind::Memory,
                ProbeKind::Disk,
                ProbeKind::Temperature,
                ProbeKind::Battery,
                ProbeKind::Volume,
                ProbeKind::Clock,
            ],
            glyphs: Glyphs::default(),
            network: NetworkConfig::default(),
            cpu: CpuConfig::default(),
            memory: MemoryConfig::default(),
            disk: DiskConfig::default(),
            temperature: TemperatureConfig::default(),
            battery: BatteryConfig::default(),
            volume: VolumeConfig::default(),
            clock: ClockConfig::default(),
            arp: ArpConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            wired_interface: Some("enp9s0".to_string()),
            wireless_interface: Some("wlp7s0".to_string()),
            netdev_path: PathBuf::from("/proc/net/dev"),
            wireless_path: PathBuf::from("/proc/net/wireless"),
            sysfs_net_dir: PathBuf::from("/sys/class/net"),
            small_unit: "KiB/s".to_string(),
            large_unit: "MiB/s".to_string(),
            unit_threshold: 1024.0,
            large_precision: 1,
            interval: every(1),
        }
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            stat_path: PathBuf::from("/proc/stat"),
            precision: 0,
            interval: every(2),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            meminfo_path: PathBuf::from("/proc/meminfo"),
            interval: every(2),
        }
    }
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            mount_points: vec![PathBuf::from("/"), PathBuf::from("/home")],
            interval: every(30),
        }
    }
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("/sys/class/hwmon/hwmon0/temp1_input"),
            crit_path: Some(PathBuf::from("/sys/class/hwmon/hwmon0/temp1_crit")),
            interval: every(30),
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            supply_dir: PathBuf::from("/sys/class/power_supply/BAT0"),
            units: BatteryUnits::Auto,
            interval: every(30),
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            control: "Master".to_string(),
            card: None,
            interval: every(1),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: "📆 %a,%d/%m/%Y  ⌛ %H:%M".to_string(),
            interval: every(1),
        }
    }
}

impl Default for ArpConfig {
    fn default() -> Self {
        Self {
            arp_path: PathBuf::from("/proc/net/arp"),
            interval: every(30),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// Load a config file. A missing or empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let data = fs::read(path).map_err(|e| {
            StatusError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Config::default());
        }

        let config: Config = serde_json::from_slice(&data).map_err(|e| {
            StatusError::config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;

        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StatusError::config("could not determine config directory"))?;

        Ok(config_dir.join("wmstatus").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(StatusError::config("tick_ms must be at least 1"));
        }

        let mut seen = HashSet::new();
        for kind in &self.order {
            if !seen.insert(kind) {
                return Err(StatusError::config(format!(
                    "probe '{}' appears more than once in order",
                    kind
                )));
            }
        }

        if self.network.unit_threshold <= 0.0 {
            return Err(StatusError::config(
                "network.unit_threshold must be positive",
            ));
        }

        self.glyphs.validate()
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Refresh cadence configured for `kind`.
    pub fn schedule_for(&self, kind: ProbeKind) -> ProbeSchedule {
        match kind {
            ProbeKind::Network => self.network.interval,
            ProbeKind::Cpu => self.cpu.interval,
            ProbeKind::Memory => self.memory.interval,
            ProbeKind::Disk => self.disk.interval,
            ProbeKind::Temperature => self.temperature.interval,
            ProbeKind::Battery => self.battery.interval,
            ProbeKind::Volume => self.volume.interval,
            ProbeKind::Clock => self.clock.interval,
            ProbeKind::Arp => self.arp.interval,
        }
    }
}
