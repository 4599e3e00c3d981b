use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use wmstatus::core::config::{BatteryUnits, Config, ProbeKind};
use wmstatus::StatusError;

#[test]
fn test_config_default_order() {
    let config = Config::default();
    assert_eq!(
        config.order,
        vec![
            ProbeKind::Network,
            ProbeKind::Cpu,
            ProbeKind::Memory,
            ProbeKind::Disk,
            ProbeKind::Temperature,
            ProbeKind::Battery,
            ProbeKind::Volume,
            ProbeKind::Clock,
        ]
    );
    assert_eq!(config.separator, " ");
    assert_eq!(config.tick_ms, 1000);
}

#[test]
fn test_config_default_intervals() {
    let config = Config::default();
    let expected = [
        (ProbeKind::Network, 1),
        (ProbeKind::Cpu, 2),
        (ProbeKind::Memory, 2),
        (ProbeKind::Disk, 30),
        (ProbeKind::Temperature, 30),
        (ProbeKind::Battery, 30),
        (ProbeKind::Volume, 1),
        (ProbeKind::Clock, 1),
        (ProbeKind::Arp, 30),
    ];

    for (kind, ticks) in expected {
        assert_eq!(config.schedule_for(kind).interval_ticks(), ticks, "{}", kind);
    }
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wmstatus").join("config.json");

    let mut config = Config::default();
    config.separator = " | ".to_string();
    config.order = vec![ProbeKind::Battery, ProbeKind::Clock];
    config.network.wired_interface = None;
    config.battery.units = BatteryUnits::Charge;
    config.disk.mount_points = vec![PathBuf::from("/data")];
    config.glyphs.offline = "--".to_string();

    config.save_to(&path).unwrap();
    let loaded = Config::load(Some(&path)).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_uses_lowercase_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "order": ["clock", "arp", "volume"],
            "battery": { "units": "energy" },
            "volume": { "card": "1" }
        }"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.order,
        vec![ProbeKind::Clock, ProbeKind::Arp, ProbeKind::Volume]
    );
    assert_eq!(config.battery.units, BatteryUnits::Energy);
    assert_eq!(config.volume.card.as_deref(), Some("1"));
    assert_eq!(config.volume.control, "Master");
}

#[test]
fn test_config_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(StatusError::Config(_))
    ));
}

#[test]
fn test_config_zero_tick_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "tick_ms": 0 }"#).unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(StatusError::Config(_))
    ));
}

#[test]
fn test_config_wrong_tier_count_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "glyphs": { "battery_tiers": ["a", "b"] } }"#).unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(StatusError::Config(_))
    ));
}

#[test]
fn test_config_default_path_location() {
    if let Ok(path) = Config::default_path() {
        assert!(path.ends_with("wmstatus/config.json"));
    }
}
