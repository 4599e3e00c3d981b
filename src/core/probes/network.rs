//! Link state and throughput.

use std::path::PathBuf;
use std::time::Instant;

use super::Probe;
use crate::core::config::NetworkConfig;
use crate::core::delta::CounterState;
use crate::core::reader;
use crate::error::{Result, StatusError};
use crate::platform::WirelessInfoProvider;
use crate::ui::formatters::{format_rate, RateUnits};
use crate::utils::icons::Glyphs;

const BYTES_PER_KIB: f64 = 1024.0;

/// Shown in place of a rate when the counter table cannot be read.
const RATE_UNAVAILABLE: &str = "----";

/// Field index of transmitted bytes in a counter-table row (after the colon).
const TX_BYTES_FIELD: usize = 8;

pub struct NetworkProbe<W> {
    config: NetworkConfig,
    glyphs: Glyphs,
    wireless: W,
    received: CounterState,
    sent: CounterState,
}

impl<W: WirelessInfoProvider> NetworkProbe<W> {
    pub fn new(config: NetworkConfig, glyphs: Glyphs, wireless: W) -> Self {
        Self {
            config,
            glyphs,
            wireless,
            received: CounterState::new(),
            sent: CounterState::new(),
        }
    }

    /// Sample as of `now`; `sample` passes the current instant.
    pub fn sample_at(&mut self, now: Instant) -> Result<String> {
        let link = self.link_text()?;
        let (down, up) = self.rates(now);

        Ok(format!(
            "{} {}{} {}{}",
            link, self.glyphs.down, down, self.glyphs.up, up
        ))
    }

    fn link_text(&self) -> Result<String> {
        if let Some(wired) = &self.config.wired_interface {
            if self.is_up(wired)? {
                return Ok(self.glyphs.wired.clone());
            }
        }

        if let Some(wireless) = &self.config.wireless_interface {
            if self.is_up(wireless)? {
                return Ok(self.wireless_text(wireless));
            }
        }

        Ok(self.glyphs.offline.clone())
    }

    fn is_up(&self, interface: &str) -> Result<bool> {
        let path: PathBuf = self.config.sysfs_net_dir.join(interface).join("operstate");
        Ok(reader::read_word(&path)? == "up")
    }

    fn wireless_text(&self, interface: &str) -> String {
        let ssid = self.wireless.ssid(interface).unwrap_or_else(|e| {
            log::warn!("Failed to obtain WiFi ESSID: {}", e);
            String::new()
        });
        let strength = match self.wireless.strength(interface) {
            Ok(strength) => Some(strength),
            Err(e) => {
                log::warn!("Failed to obtain WiFi strength: {}", e);
                None
            }
        };

        let mut text = self.glyphs.wireless.clone();
        text.push_str(&ssid);
        if let Some(strength) = strength {
            if !ssid.is_empty() {
                text.push(' ');
            }
            text.push_str(&format!("{}%", strength));
        }
        text
    }

    fn rates(&mut self, now: Instant) -> (String, String) {
        let totals = reader::read_text(&self.config.netdev_path).and_then(|t| sum_counters(&t));

        match totals {
            Ok((rx, tx)) => {
                let down = self.received.advance(rx, now) / BYTES_PER_KIB;
                let up = self.sent.advance(tx, now) / BYTES_PER_KIB;
                log::debug!("network rates: down {:.1} KiB/s, up {:.1} KiB/s", down, up);

                let units = RateUnits {
                    small: &self.config.small_unit,
                    large: &self.config.large_unit,
                    threshold: self.config.unit_threshold,
                    large_precision: self.config.large_precision,
                };
                (format_rate(down, &units), format_rate(up, &units))
            }
            Err(e) => {
                log::warn!("Failed to obtain bandwidth: {}", e);
                let placeholder = format!("{}{}", RATE_UNAVAILABLE, self.config.small_unit);
                (placeholder.clone(), placeholder)
            }
        }
    }
}

impl<W: WirelessInfoProvider> Probe for NetworkProbe<W> {
    fn label(&self) -> &str {
        "network"
    }

    fn sample(&mut self) -> Result<String> {
        self.sample_at(Instant::now())
    }
}

/// Sum received and transmitted bytes over every interface except loopback.
///
/// ```text
/// Inter-|   Receive                                                |  Transmit
///  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets ...
///     lo:  123456    1000    0    0    0     0          0         0   123456    1000 ...
/// ```
pub fn sum_counters(table: &str) -> Result<(u64, u64)> {
    let mut received = 0u64;
    let mut sent = 0u64;

    for line in table.lines().skip(2) {
        let Some((name, fields)) = line.split_once(':') else {
            continue;
        };
        if name.trim() == "lo" {
            continue;
        }

        let fields: Vec<&str> = fields.split_whitespace().collect();
        if fields.len() <= TX_BYTES_FIELD {
            return Err(StatusError::malformed(format!(
                "interface {} has {} counter fields",
                name.trim(),
                fields.len()
            )));
        }

        let rx = reader::parse_token::<u64>(fields[0]).map_err(StatusError::malformed)?;
        let tx = reader::parse_token::<u64>(fields[TX_BYTES_FIELD]).map_err(StatusError::malformed)?;
        received = received.saturating_add(rx);
        sent = sent.saturating_add(tx);
    }

    Ok((received, sent))
}
