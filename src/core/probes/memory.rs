use std::path::PathBuf;

use super::Probe;
use crate::core::config::MemoryConfig;
use crate::core::reader;
use crate::error::{Result, StatusError};
use crate::ui::formatters::kib_to_gib;

/// The `/proc/meminfo` figures the memory probe needs, in KiB.
/// Keys missing from the file stay at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
    pub reclaimable: u64,
    pub shared: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    pub swap_cached: u64,
}

impl MemInfo {
    pub fn parse(text: &str) -> Result<Self> {
        let mut info = MemInfo::default();

        for line in text.lines() {
            let Some((key, rest)) = line.split_once(':') else {
                continue;
            };

            let slot = match key {
                "MemTotal" => &mut info.total,
                "MemFree" => &mut info.free,
                "Buffers" => &mut info.buffers,
                "Cached" => &mut info.cached,
                "SReclaimable" => &mut info.reclaimable,
                "Shmem" => &mut info.shared,
                "SwapTotal" => &mut info.swap_total,
                "SwapFree" => &mut info.swap_free,
                "SwapCached" => &mut info.swap_cached,
                _ => continue,
            };

            let value = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| StatusError::malformed(format!("meminfo: {} has no value", key)))?;
            *slot = reader::parse_token(value)
                .map_err(|e| StatusError::malformed(format!("meminfo: {}: {}", key, e)))?;
        }

        Ok(info)
    }

    /// Main memory in use, not counting page cache or buffers.
    pub fn used_main_kib(&self) -> u64 {
        self.total
            .saturating_sub(self.free)
            .saturating_sub(self.cached.saturating_add(self.reclaimable))
            .saturating_sub(self.buffers)
    }

    pub fn used_swap_kib(&self) -> u64 {
        self.swap_total
            .saturating_sub(self.swap_free)
            .saturating_sub(self.swap_cached)
    }
}

pub struct MemoryProbe {
    meminfo_path: PathBuf,
    glyph: String,
}

impl MemoryProbe {
    pub fn new(config: MemoryConfig, glyph: String) -> Self {
        Self {
            meminfo_path: config.meminfo_path,
            glyph,
        }
    }
}

impl Probe for MemoryProbe {
    fn label(&self) -> &str {
        "memory"
    }

    fn sample(&mut self) -> Result<String> {
        let info = MemInfo::parse(&reader::read_text(&self.meminfo_path)?)?;

        Ok(format!(
            "{}{:.1}/{:.1}GiB",
            self.glyph,
            kib_to_gib(info.used_main_kib()),
            kib_to_gib(info.used_swap_kib())
        ))
    }
}
