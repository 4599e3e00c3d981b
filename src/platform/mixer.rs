//! Playback volume queries.

use once_cell::sync::Lazy;
use regex::Regex;
use std::process::Command;

use crate::error::{Result, StatusError};

static LIMITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Limits:\s*Playback\s+(-?\d+)\s*-\s*(-?\d+)").expect("valid regex"));

static CHANNEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":\s*Playback\s+(-?\d+)\s+\[\d+%\](?:\s+\[[^\]]*\])*?\s+\[(on|off)\]")
        .expect("valid regex")
});

static CHANNEL_NO_SWITCH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*Playback\s+(-?\d+)\s+\[\d+%\]").expect("valid regex"));

/// Playback state of one mixer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerReading {
    pub min: i64,
    pub max: i64,
    pub volume: i64,
    pub muted: bool,
}

/// Audio mixer capability.
pub trait AudioMixerProvider {
    /// Current playback state of `control`, or `None` when no such control exists.
    fn playback(&self, control: &str) -> Result<Option<MixerReading>>;
}

/// ALSA mixer queried through `amixer sget`.
#[derive(Debug, Clone, Default)]
pub struct AmixerMixer {
    card: Option<String>,
}

impl AmixerMixer {
    pub fn new(card: Option<String>) -> Self {
        Self { card }
    }
}

impl AudioMixerProvider for AmixerMixer {
    fn playback(&self, control: &str) -> Result<Option<MixerReading>> {
        let mut cmd = Command::new("amixer");
        if let Some(card) = &self.card {
            cmd.arg("-c").arg(card);
        }
        cmd.arg("sget").arg(control);

        let output = cmd
            .output()
            .map_err(|e| StatusError::unavailable(format!("amixer: {}", e)))?;

        if !output.status.success() {
            return sget_failure(control, &String::from_utf8_lossy(&output.stderr));
        }

        parse_sget(&String::from_utf8_lossy(&output.stdout)).map(Some)
    }
}

/// Classify a failed `amixer sget` by its stderr.
///
/// Only an unknown control maps to `None`. A bad card number, a missing sound
/// card or an unreachable sound server is `Unavailable`.
pub fn sget_failure(control: &str, stderr: &str) -> Result<Option<MixerReading>> {
    let stderr = stderr.trim();

    if stderr.contains("Unable to find simple control") {
        return Ok(None);
    }

    if stderr.is_empty() {
        return Err(StatusError::unavailable(format!(
            "amixer sget {} failed",
            control
        )));
    }

    Err(StatusError::unavailable(format!(
        "amixer sget {}: {}",
        control, stderr
    )))
}

/// Parse `amixer sget` output.
///
/// ```text
/// Simple mixer control 'Master',0
///   Capabilities: pvolume pvolume-joined pswitch pswitch-joined
///   Playback channels: Mono
///   Limits: Playback 0 - 87
///   Mono: Playback 43 [49%] [-33.00dB] [on]
/// ```
///
/// Only the first channel line is used. Controls without a playback switch
/// are reported as unmuted.
pub fn parse_sget(output: &str) -> Result<MixerReading> {
    let limits = LIMITS
        .captures(output)
        .ok_or_else(|| StatusError::malformed("amixer: no playback limits"))?;
    let min = parse_number(&limits[1])?;
    let max = parse_number(&limits[2])?;

    let (volume, muted) = match CHANNEL.captures(output) {
        Some(channel) => (parse_number(&channel[1])?, &channel[2] == "off"),
        None => {
            let channel = CHANNEL_NO_SWITCH
                .captures(output)
                .ok_or_else(|| StatusError::malformed("amixer: no playback channel"))?;
            (parse_number(&channel[1])?, false)
        }
    };

    Ok(MixerReading {
        min,
        max,
        volume,
        muted,
    })
}

fn parse_number(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| StatusError::malformed(format!("amixer: invalid number '{}': {}", text, e)))
}
