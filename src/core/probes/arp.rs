//! ARP spoofing check: the same hardware address answering for two IPs.

use std::collections::HashSet;
use std::path::PathBuf;

use super::Probe;
use crate::core::config::ArpConfig;
use crate::core::reader;
use crate::error::Result;
use crate::utils::icons::Glyphs;

/// Column of the hardware address in `/proc/net/arp`.
const HW_ADDRESS_COLUMN: usize = 3;

/// Placeholder the kernel uses for incomplete entries.
const EMPTY_HW_ADDRESS: &str = "00:00:00:00:00:00";

pub struct ArpProbe {
    arp_path: PathBuf,
    glyphs: Glyphs,
}

impl ArpProbe {
    pub fn new(config: ArpConfig, glyphs: Glyphs) -> Self {
        Self {
            arp_path: config.arp_path,
            glyphs,
        }
    }
}

impl Probe for ArpProbe {
    fn label(&self) -> &str {
        "arp"
    }

    fn sample(&mut self) -> Result<String> {
        let table = reader::read_text(&self.arp_path)?;

        match detect_spoofing(&table) {
            Some(mac) => {
                log::warn!("Hardware address {} appears for more than one IP", mac);
                Ok(self.glyphs.arp_alert.clone())
            }
            None => Ok(self.glyphs.arp_ok.clone()),
        }
    }
}

/// First hardware address listed for more than one IP, if any.
///
/// ```text
/// IP address       HW type     Flags       HW address            Mask     Device
/// 192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        wlan0
/// ```
pub fn detect_spoofing(table: &str) -> Option<&str> {
    let mut seen = HashSet::new();

    table
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().nth(HW_ADDRESS_COLUMN))
        .filter(|mac| *mac != EMPTY_HW_ADDRESS)
        .find(|mac| !seen.insert(*mac))
}
