//! Status glyphs
//!
//! This module holds the glyph table used by the probes and the rules
//! that pick a glyph from a probe's state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatusError};

/// Number of discharge tiers selected by [`Glyphs::battery_glyph`].
pub const BATTERY_TIERS: usize = 5;

/// Upper bounds (exclusive) of the first four discharge tiers, in percent.
const TIER_BOUNDS: [i64; BATTERY_TIERS - 1] = [20, 40, 60, 85];

/// Volume at or above this percentage uses the "high" glyph.
pub const VOLUME_HIGH_THRESHOLD: i64 = 50;

/// Battery charging state as reported by the power-supply status file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    Charging,
    Discharging,
    Full,
    Unknown,
}

impl ChargeStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "Charging" => ChargeStatus::Charging,
            "Discharging" => ChargeStatus::Discharging,
            "Full" => ChargeStatus::Full,
            _ => ChargeStatus::Unknown,
        }
    }
}

/// Glyph table, configurable through the `glyphs` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub wired: String,
    pub wireless: String,
    pub offline: String,
    pub down: String,
    pub up: String,
    pub cpu: String,
    pub memory: String,
    pub disk: String,
    pub temperature: String,
    pub battery_unknown: String,
    pub battery_full: String,
    pub battery_charging: String,
    /// Discharge glyphs from emptiest to fullest.
    pub battery_tiers: Vec<String>,
    pub volume_muted: String,
    pub volume_low: String,
    pub volume_high: String,
    pub arp_ok: String,
    pub arp_alert: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wired: "⚼".to_string(),
            wireless: "📶".to_string(),
            offline: "offline".to_string(),
            down: "▼".to_string(),
            up: "▲".to_string(),
            cpu: "🏽".to_string(),
            memory: "🧠".to_string(),
            disk: "💾".to_string(),
            temperature: "🌡".to_string(),
            battery_unknown: "?".to_string(),
            battery_full: "🔌".to_string(),
            battery_charging: "🗲".to_string(),
            battery_tiers: vec!["🔋".to_string(); BATTERY_TIERS],
            volume_muted: "🔇".to_string(),
            volume_low: "🔈".to_string(),
            volume_high: "🔊".to_string(),
            arp_ok: String::new(),
            arp_alert: "MITM detected!".to_string(),
        }
    }
}

impl Glyphs {
    pub fn validate(&self) -> Result<()> {
        if self.battery_tiers.len() != BATTERY_TIERS {
            return Err(StatusError::config(format!(
                "glyphs.battery_tiers needs exactly {} entries, found {}",
                BATTERY_TIERS,
                self.battery_tiers.len()
            )));
        }
        Ok(())
    }

    /// Pick the battery glyph for a status and charge percentage.
    pub fn battery_glyph(&self, status: ChargeStatus, percent: i64) -> &str {
        match status {
            ChargeStatus::Charging => &self.battery_charging,
            ChargeStatus::Full => &self.battery_full,
            ChargeStatus::Unknown => &self.battery_unknown,
            ChargeStatus::Discharging => {
                let tier = TIER_BOUNDS
                    .iter()
                    .position(|&bound| percent < bound)
                    .unwrap_or(BATTERY_TIERS - 1);
                self.battery_tiers
                    .get(tier)
                    .map(String::as_str)
                    .unwrap_or(&self.battery_unknown)
            }
        }
    }

    /// Low/high speaker glyph; exactly 50% counts as high.
    pub fn volume_glyph(&self, percent: i64) -> &str {
        if percent < VOLUME_HIGH_THRESHOLD {
            &self.volume_low
        } else {
            &self.volume_high
        }
    }
}
