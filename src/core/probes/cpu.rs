//! CPU utilisation and load averages.

use std::path::PathBuf;

use super::Probe;
use crate::core::config::CpuConfig;
use crate::core::reader;
use crate::error::{Result, StatusError};
use crate::platform::HostStats;

/// Frames smaller than `per-cpu ticks / (100 / TICS_EDGE)` count as idle.
const TICS_EDGE: u64 = 20;

/// Number of tick fields read from the aggregate `cpu` line.
const TICK_FIELDS: usize = 8;

/// Cumulative tick counters from the aggregate `cpu` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
}

impl CpuTicks {
    /// Parse the first `cpu ` line of a `/proc/stat` dump.
    pub fn parse(stat: &str) -> Result<Self> {
        let line = stat
            .lines()
            .find(|line| line.starts_with("cpu "))
            .ok_or_else(|| StatusError::malformed("no aggregate cpu line"))?;

        let values = line
            .split_whitespace()
            .skip(1)
            .take(TICK_FIELDS)
            .map(reader::parse_token::<u64>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(StatusError::malformed)?;

        if values.len() < TICK_FIELDS {
            return Err(StatusError::malformed(format!(
                "cpu line has {} tick fields, expected {}",
                values.len(),
                TICK_FIELDS
            )));
        }

        Ok(Self {
            user: values[0],
            nice: values[1],
            system: values[2],
            idle: values[3],
            iowait: values[4],
            irq: values[5],
            softirq: values[6],
            steal: values[7],
        })
    }

    pub fn total(&self) -> u64 {
        [
            self.user,
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
            self.steal,
        ]
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    fn since(&self, previous: &CpuTicks) -> CpuTicks {
        CpuTicks {
            user: self.user.saturating_sub(previous.user),
            nice: self.nice.saturating_sub(previous.nice),
            system: self.system.saturating_sub(previous.system),
            idle: self.idle.saturating_sub(previous.idle),
            iowait: self.iowait.saturating_sub(previous.iowait),
            irq: self.irq.saturating_sub(previous.irq),
            softirq: self.softirq.saturating_sub(previous.softirq),
            steal: self.steal.saturating_sub(previous.steal),
        }
    }
}

/// Ticks spent between two samples, with the noise threshold they are judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFrame {
    pub delta: CpuTicks,
    pub total: u64,
    pub edge: u64,
}

impl TickFrame {
    pub fn new(previous: &CpuTicks, current: &CpuTicks, online_cpus: u64) -> Self {
        let cpus = online_cpus.max(1);
        let elapsed = current.total().saturating_sub(previous.total());
        let delta = current.since(previous);

        Self {
            delta,
            total: delta.total(),
            edge: (elapsed / cpus) / (100 / TICS_EDGE),
        }
    }

    /// Share of the frame spent in user, nice and system time.
    pub fn busy_percent(&self) -> f64 {
        let mut delta = self.delta;
        let mut total = self.total;

        if total < self.edge {
            delta = CpuTicks::default();
        }
        if total < 1 {
            delta.idle = 1;
            total = 1;
        }

        let busy = delta.user + delta.nice + delta.system;
        100.0 * busy as f64 / total as f64
    }
}

pub struct CpuProbe<H> {
    stat_path: PathBuf,
    precision: usize,
    glyph: String,
    host: H,
    online_cpus: u64,
    previous: CpuTicks,
}

impl<H: HostStats> CpuProbe<H> {
    pub fn new(config: CpuConfig, glyph: String, host: H) -> Self {
        let online_cpus = host.online_cpus();
        log::debug!("cpu probe: {} online processors", online_cpus);

        Self {
            stat_path: config.stat_path,
            precision: config.precision,
            glyph,
            host,
            online_cpus,
            previous: CpuTicks::default(),
        }
    }
}

impl<H: HostStats> Probe for CpuProbe<H> {
    fn label(&self) -> &str {
        "cpu"
    }

    fn sample(&mut self) -> Result<String> {
        let [one, five, fifteen] = self.host.load_average();
        let current = CpuTicks::parse(&reader::read_text(&self.stat_path)?)?;

        let frame = TickFrame::new(&self.previous, &current, self.online_cpus);
        self.previous = current;

        Ok(format!(
            "{}{:.*}%({:.2}|{:.2}|{:.2})",
            self.glyph,
            self.precision,
            frame.busy_percent(),
            one,
            five,
            fifteen
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const STAT: &str = "\
cpu  100 0 50 800 30 0 20 0 0 0
cpu0 50 0 25 400 15 0 10 0 0 0
cpu1 50 0 25 400 15 0 10 0 0 0
intr 12345
";

    struct FixedHost;

    impl HostStats for FixedHost {
        fn load_average(&self) -> [f64; 3] {
            [0.5, 0.25, 1.0]
        }

        fn online_cpus(&self) -> u64 {
            2
        }
    }

    fn ticks(user: u64, system: u64, idle: u64) -> CpuTicks {
        CpuTicks {
            user,
            system,
            idle,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_aggregate_line() {
        let parsed = CpuTicks::parse(STAT).unwrap();
        assert_eq!(parsed.user, 100);
        assert_eq!(parsed.system, 50);
        assert_eq!(parsed.idle, 800);
        assert_eq!(parsed.softirq, 20);
        assert_eq!(parsed.total(), 1000);
    }

    #[test]
    fn test_parse_short_line() {
        assert!(CpuTicks::parse("cpu 1 2 3\n").is_err());
        assert!(CpuTicks::parse("intr 1\n").is_err());
        assert!(CpuTicks::parse("cpu 1 2 x 4 5 6 7 8\n").is_err());
    }

    #[test]
    fn test_busy_percent() {
        let frame = TickFrame::new(&ticks(0, 0, 0), &ticks(20, 10, 70), 1);
        assert_eq!(frame.total, 100);
        assert_eq!(frame.busy_percent(), 30.0);
    }

    #[test]
    fn test_below_edge_is_idle() {
        let frame = TickFrame {
            delta: ticks(3, 1, 0),
            total: 4,
            edge: 10,
        };
        assert_eq!(frame.busy_percent(), 0.0);
    }

    #[test]
    fn test_empty_frame_is_idle() {
        let frame = TickFrame::new(&ticks(5, 5, 5), &ticks(5, 5, 5), 4);
        assert_eq!(frame.total, 0);
        assert_eq!(frame.busy_percent(), 0.0);
    }

    #[test]
    fn test_sample_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stat");
        fs::write(&path, STAT).unwrap();

        let config = CpuConfig {
            stat_path: path.clone(),
            ..Default::default()
        };
        let mut probe = CpuProbe::new(config, "C".to_string(), FixedHost);

        // first sample is measured from zero, i.e. since boot
        assert_eq!(probe.sample().unwrap(), "C15%(0.50|0.25|1.00)");

        fs::write(&path, "cpu  150 0 100 900 30 0 20 0 0 0\n").unwrap();
        assert_eq!(probe.sample().unwrap(), "C50%(0.50|0.25|1.00)");
    }

    #[test]
    fn test_missing_stat_file() {
        let config = CpuConfig {
            stat_path: PathBuf::from("/nonexistent/stat"),
            ..Default::default()
        };
        let mut probe = CpuProbe::new(config, "C".to_string(), FixedHost);
        assert!(matches!(probe.sample(), Err(StatusError::Unavailable(_))));
    }
}
