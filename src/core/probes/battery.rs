//! Battery charge and time remaining.
//!
//! Reads a power-supply directory such as `/sys/class/power_supply/BAT0`.
//! Batteries report either `charge_*` (µAh, µA) or `energy_*` (µWh, µW);
//! the arithmetic is identical, only the file names differ.

use std::path::{Path, PathBuf};

use super::Probe;
use crate::core::config::{BatteryConfig, BatteryUnits};
use crate::core::reader;
use crate::error::{Result, StatusError};
use crate::ui::formatters::format_hours_minutes;
use crate::utils::icons::{ChargeStatus, Glyphs};

const MINUTES_PER_HOUR: i64 = 60;

/// File names for one unit family: (now, full, rate)
fn unit_files(units: BatteryUnits, dir: &Path) -> (&'static str, &'static str, &'static str) {
    let charge = ("charge_now", "charge_full", "current_now");
    let energy = ("energy_now", "energy_full", "power_now");

    match units {
        BatteryUnits::Charge => charge,
        BatteryUnits::Energy => energy,
        BatteryUnits::Auto if dir.join("charge_now").exists() => charge,
        BatteryUnits::Auto => energy,
    }
}

pub struct BatteryProbe {
    supply_dir: PathBuf,
    units: BatteryUnits,
    glyphs: Glyphs,
}

impl BatteryProbe {
    pub fn new(config: BatteryConfig, glyphs: Glyphs) -> Self {
        Self {
            supply_dir: config.supply_dir,
            units: config.units,
            glyphs,
        }
    }
}

impl Probe for BatteryProbe {
    fn label(&self) -> &str {
        "battery"
    }

    fn sample(&mut self) -> Result<String> {
        let (now_file, full_file, rate_file) = unit_files(self.units, &self.supply_dir);

        let now = reader::read_scalar::<i64>(&self.supply_dir.join(now_file))?;
        let full = reader::read_scalar::<i64>(&self.supply_dir.join(full_file))?;
        let status = ChargeStatus::parse(&reader::read_word(&self.supply_dir.join("status"))?);
        let rate = reader::read_scalar::<i64>(&self.supply_dir.join(rate_file))?;

        battery_text(now, full, status, rate, &self.glyphs)
    }
}

/// Render a battery reading: glyph, percentage and, while charging or
/// discharging at a known rate, the time until full or empty as `H:MM`.
pub fn battery_text(
    now: i64,
    full: i64,
    status: ChargeStatus,
    rate: i64,
    glyphs: &Glyphs,
) -> Result<String> {
    if full <= 0 {
        return Err(StatusError::malformed(format!(
            "battery full capacity is {}",
            full
        )));
    }

    let percent = now.saturating_mul(100) / full;
    let glyph = glyphs.battery_glyph(status, percent);

    let remaining = match status {
        ChargeStatus::Charging => Some(full - now),
        ChargeStatus::Discharging => Some(now),
        ChargeStatus::Full | ChargeStatus::Unknown => None,
    };

    match remaining {
        Some(energy) if energy >= 0 && rate > 0 => {
            let hours = energy / rate;
            let minutes = (energy % rate) * MINUTES_PER_HOUR / rate;
            Ok(format!(
                "{}{}% {}",
                glyph,
                percent,
                format_hours_minutes(hours, minutes)
            ))
        }
        _ => Ok(format!("{}{}%", glyph, percent)),
    }
}
