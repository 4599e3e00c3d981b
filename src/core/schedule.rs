use serde::{Deserialize, Serialize};

use crate::error::{Result, StatusError};

/// Refresh cadence of one probe, in driver ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ProbeSchedule {
    interval_ticks: u64,
}

impl ProbeSchedule {
    pub fn every(interval_ticks: u64) -> Result<Self> {
        if interval_ticks == 0 {
            return Err(StatusError::config("probe interval must be at least 1 tick"));
        }
        Ok(Self { interval_ticks })
    }

    pub fn interval_ticks(&self) -> u64 {
        self.interval_ticks
    }

    /// Whether the probe refreshes on `tick`. Tick 0 is due for every schedule.
    pub fn is_due(&self, tick: u64) -> bool {
        tick % self.interval_ticks == 0
    }
}

impl Default for ProbeSchedule {
    fn default() -> Self {
        Self { interval_ticks: 1 }
    }
}

impl TryFrom<u64> for ProbeSchedule {
    type Error = StatusError;

    fn try_from(value: u64) -> Result<Self> {
        Self::every(value)
    }
}

impl From<ProbeSchedule> for u64 {
    fn from(schedule: ProbeSchedule) -> u64 {
        schedule.interval_ticks
    }
}
