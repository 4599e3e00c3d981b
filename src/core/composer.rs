//! Status line composition.
//!
//! The composer owns one slot per probe. Each slot keeps the probe, its
//! refresh schedule and the last fragment it produced. On every tick the due
//! probes are re-sampled and the line is rebuilt from all slots, so probes
//! that are not due keep showing their previous fragment.

use super::config::Config;
use super::probes::{self, Probe, ProbeResult};
use super::schedule::ProbeSchedule;
use crate::error::{Result, StatusError};

struct Slot {
    probe: Box<dyn Probe>,
    schedule: ProbeSchedule,
    result: ProbeResult,
}

pub struct StatusComposer {
    slots: Vec<Slot>,
    separator: String,
}

impl StatusComposer {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            slots: Vec::new(),
            separator: separator.into(),
        }
    }

    /// One slot per entry of `config.order`, left to right.
    pub fn from_config(config: &Config) -> Self {
        let mut composer = Self::new(config.separator.clone());
        for kind in &config.order {
            composer.push(probes::build(*kind, config), config.schedule_for(*kind));
        }
        composer
    }

    /// Append a probe to the right end of the line. Its slot starts empty.
    pub fn push(&mut self, probe: Box<dyn Probe>, schedule: ProbeSchedule) {
        log::debug!(
            "Registered probe {} every {} tick(s)",
            probe.label(),
            schedule.interval_ticks()
        );
        let result = ProbeResult::empty(probe.label());
        self.slots.push(Slot {
            probe,
            schedule,
            result,
        });
    }

    /// Re-sample every probe due on `tick`. A failing probe blanks its slot.
    ///
    /// Returns the number of probes sampled.
    pub fn refresh_due(&mut self, tick: u64) -> usize {
        let mut refreshed = 0;

        for slot in self.slots.iter_mut().filter(|s| s.schedule.is_due(tick)) {
            slot.result.text = match slot.probe.sample() {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("{} probe failed: {}", slot.result.label, e);
                    String::new()
                }
            };
            refreshed += 1;
        }

        refreshed
    }

    /// Join the non-empty fragments with the separator.
    ///
    /// Reads only the stored results, so calling it twice without a refresh
    /// in between yields the same line.
    pub fn compose(&self) -> Result<String> {
        let fragments: Vec<&str> = self
            .slots
            .iter()
            .map(|s| s.result.text.as_str())
            .filter(|t| !t.is_empty())
            .collect();

        let needed = fragments.iter().map(|f| f.len()).sum::<usize>()
            + self.separator.len() * fragments.len().saturating_sub(1);

        let mut line = String::new();
        line.try_reserve(needed).map_err(|e| {
            StatusError::resource_exhausted(format!(
                "cannot allocate {} bytes for the status line: {}",
                needed, e
            ))
        })?;

        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.separator);
            }
            line.push_str(fragment);
        }

        Ok(line)
    }

    pub fn results(&self) -> impl Iterator<Item = &ProbeResult> {
        self.slots.iter().map(|s| &s.result)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
