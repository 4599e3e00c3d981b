use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use wmstatus::core::config::{
    BatteryConfig, BatteryUnits, CpuConfig, NetworkConfig, TemperatureConfig,
};
use wmstatus::core::probes::{
    BatteryProbe, CpuProbe, NetworkProbe, Probe, TemperatureProbe, VolumeProbe,
};
use wmstatus::platform::{
    AudioMixerProvider, HostStats, LinuxWireless, MixerReading, WirelessInfoProvider,
};
use wmstatus::utils::icons::Glyphs;
use wmstatus::{Result, StatusError};

const NETDEV_HEADER: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
";

fn netdev(rx: u64, tx: u64) -> String {
    format!(
        "{}    lo: 5000 10 0 0 0 0 0 0 5000 10 0 0 0 0 0 0\n wlan0: {} 10 0 0 0 0 0 0 {} 10 0 0 0 0 0 0\n",
        NETDEV_HEADER, rx, tx
    )
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Wireless provider with the ioctl swapped out but the quality table kept.
struct TableOnly(LinuxWireless);

impl WirelessInfoProvider for TableOnly {
    fn ssid(&self, _interface: &str) -> Result<String> {
        Ok("cafe".to_string())
    }

    fn strength(&self, interface: &str) -> Result<u8> {
        self.0.strength(interface)
    }
}

#[test]
fn test_network_probe_against_sysfs_fixture() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(&root.join("net/eth0/operstate"), "down\n");
    write(&root.join("net/wlan0/operstate"), "up\n");
    write(&root.join("dev"), &netdev(1_000_000, 2_000_000));
    write(
        &root.join("wireless"),
        "Inter-| sta-|   Quality        |   Discarded packets\n face | tus | link level noise |  nwid  crypt\n wlan0: 0000   64.  -46.  -256        0      0\n",
    );

    let config = NetworkConfig {
        wired_interface: Some("eth0".to_string()),
        wireless_interface: Some("wlan0".to_string()),
        netdev_path: root.join("dev"),
        wireless_path: root.join("wireless"),
        sysfs_net_dir: root.join("net"),
        ..Default::default()
    };
    let wireless = TableOnly(LinuxWireless::new(root.join("wireless")));
    let mut probe = NetworkProbe::new(config, Glyphs::default(), wireless);

    let start = Instant::now();
    assert_eq!(
        probe.sample_at(start).unwrap(),
        "📶cafe 64% ▼0KiB/s ▲0KiB/s"
    );

    // 512 KiB down, 2 MiB up over two seconds
    write(&root.join("dev"), &netdev(1_000_000 + 1_048_576, 2_000_000 + 4_194_304));
    assert_eq!(
        probe.sample_at(start + Duration::from_secs(2)).unwrap(),
        "📶cafe 64% ▼512KiB/s ▲2.0MiB/s"
    );
}

#[test]
fn test_network_without_interfaces_is_offline() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("dev"), &netdev(0, 0));

    let config = NetworkConfig {
        wired_interface: None,
        wireless_interface: None,
        netdev_path: dir.path().join("dev"),
        ..Default::default()
    };
    let mut probe = NetworkProbe::new(config, Glyphs::default(), LinuxWireless::default());

    assert_eq!(probe.sample().unwrap(), "offline ▼0KiB/s ▲0KiB/s");
}

struct Idle;

impl HostStats for Idle {
    fn load_average(&self) -> [f64; 3] {
        [0.0, 0.0, 0.0]
    }

    fn online_cpus(&self) -> u64 {
        4
    }
}

#[test]
fn test_cpu_probe_precision() {
    let dir = TempDir::new().unwrap();
    let stat = dir.path().join("stat");
    write(&stat, "cpu  1 0 0 2 0 0 0 0\n");

    let config = CpuConfig {
        stat_path: stat,
        precision: 1,
        ..Default::default()
    };
    let mut probe = CpuProbe::new(config, "🏽".to_string(), Idle);

    assert_eq!(probe.sample().unwrap(), "🏽33.3%(0.00|0.00|0.00)");
}

#[test]
fn test_temperature_probe() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("temp1_input"), "52000\n");

    let config = TemperatureConfig {
        input_path: dir.path().join("temp1_input"),
        crit_path: None,
        ..Default::default()
    };
    let mut probe = TemperatureProbe::new(config, "🌡".to_string());

    assert_eq!(probe.sample().unwrap(), "🌡52°C");
}

#[test]
fn test_battery_probe_energy_discharging() {
    let dir = TempDir::new().unwrap();
    let supply = dir.path().join("BAT0");
    write(&supply.join("energy_now"), "15000000\n");
    write(&supply.join("energy_full"), "60000000\n");
    write(&supply.join("power_now"), "10000000\n");
    write(&supply.join("status"), "Discharging\n");

    let config = BatteryConfig {
        supply_dir: supply,
        units: BatteryUnits::Auto,
        ..Default::default()
    };
    let mut probe = BatteryProbe::new(config, Glyphs::default());

    assert_eq!(probe.sample().unwrap(), "🔋25% 1:30");
}

#[test]
fn test_battery_probe_missing_supply() {
    let dir = TempDir::new().unwrap();
    let config = BatteryConfig {
        supply_dir: dir.path().join("BAT9"),
        ..Default::default()
    };
    let mut probe = BatteryProbe::new(config, Glyphs::default());

    assert!(matches!(probe.sample(), Err(StatusError::Unavailable(_))));
}

struct Mixer(MixerReading);

impl AudioMixerProvider for Mixer {
    fn playback(&self, control: &str) -> Result<Option<MixerReading>> {
        Ok((control == "Master").then_some(self.0))
    }
}

#[test]
fn test_volume_probe_controls() {
    let reading = MixerReading {
        min: 0,
        max: 87,
        volume: 87,
        muted: false,
    };

    let mut master = VolumeProbe::new("Master".to_string(), Glyphs::default(), Mixer(reading));
    assert_eq!(master.sample().unwrap(), "🔊100%");

    let mut pcm = VolumeProbe::new("PCM".to_string(), Glyphs::default(), Mixer(reading));
    assert_eq!(pcm.sample().unwrap(), "");
}
