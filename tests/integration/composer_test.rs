use std::fs;

use tempfile::TempDir;
use wmstatus::core::config::{Config, ProbeKind};
use wmstatus::core::probes::Probe;
use wmstatus::core::{ProbeSchedule, StatusComposer};
use wmstatus::{Result, StatusError};

/// Emits "<label><n>" where n counts its samples.
struct Ticker {
    label: &'static str,
    samples: u32,
}

impl Ticker {
    fn boxed(label: &'static str) -> Box<dyn Probe> {
        Box::new(Ticker { label, samples: 0 })
    }
}

impl Probe for Ticker {
    fn label(&self) -> &str {
        self.label
    }

    fn sample(&mut self) -> Result<String> {
        self.samples += 1;
        Ok(format!("{}{}", self.label, self.samples))
    }
}

struct Broken;

impl Probe for Broken {
    fn label(&self) -> &str {
        "broken"
    }

    fn sample(&mut self) -> Result<String> {
        Err(StatusError::malformed("bad data"))
    }
}

#[test]
fn test_mixed_intervals_over_time() {
    let mut composer = StatusComposer::new(" ");
    composer.push(Ticker::boxed("n"), ProbeSchedule::every(1).unwrap());
    composer.push(Ticker::boxed("d"), ProbeSchedule::every(30).unwrap());
    composer.push(Ticker::boxed("c"), ProbeSchedule::every(2).unwrap());

    let mut lines = Vec::new();
    for tick in 0..31 {
        composer.refresh_due(tick);
        lines.push(composer.compose().unwrap());
    }

    assert_eq!(lines[0], "n1 d1 c1");
    assert_eq!(lines[1], "n2 d1 c1");
    assert_eq!(lines[2], "n3 d1 c2");
    assert_eq!(lines[29], "n30 d1 c15");
    assert_eq!(lines[30], "n31 d2 c16");
}

#[test]
fn test_broken_probe_does_not_affect_neighbours() {
    let mut composer = StatusComposer::new(" :: ");
    composer.push(Ticker::boxed("a"), ProbeSchedule::default());
    composer.push(Box::new(Broken), ProbeSchedule::default());
    composer.push(Ticker::boxed("b"), ProbeSchedule::default());

    composer.refresh_due(0);
    assert_eq!(composer.compose().unwrap(), "a1 :: b1");
}

#[test]
fn test_empty_composer() {
    let mut composer = StatusComposer::new(" ");
    assert!(composer.is_empty());
    assert_eq!(composer.refresh_due(0), 0);
    assert_eq!(composer.compose().unwrap(), "");
}

#[test]
fn test_composer_from_config_with_fixtures() {
    let dir = TempDir::new().unwrap();
    let meminfo = dir.path().join("meminfo");
    fs::write(
        &meminfo,
        "MemTotal: 2097152 kB\nMemFree: 1048576 kB\nSwapTotal: 0 kB\nSwapFree: 0 kB\n",
    )
    .unwrap();
    let arp = dir.path().join("arp");
    fs::write(
        &arp,
        "IP address HW type Flags HW address Mask Device\n10.0.0.1 0x1 0x2 aa:aa:aa:aa:aa:aa * eth0\n",
    )
    .unwrap();

    let mut config = Config::default();
    config.order = vec![ProbeKind::Memory, ProbeKind::Arp];
    config.separator = "|".to_string();
    config.memory.meminfo_path = meminfo;
    config.arp.arp_path = arp;
    config.glyphs.memory = "M".to_string();
    config.glyphs.arp_ok = "ok".to_string();

    let mut composer = StatusComposer::from_config(&config);
    composer.refresh_due(0);

    assert_eq!(composer.compose().unwrap(), "M1.0/0.0GiB|ok");
}
