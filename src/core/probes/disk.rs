use std::path::PathBuf;

use super::Probe;
use crate::core::config::DiskConfig;
use crate::error::{Result, StatusError};
use crate::platform::free_space;
use crate::ui::formatters::format_free_space;

/// Free space on each configured mount point.
pub struct DiskProbe {
    mount_points: Vec<PathBuf>,
    glyph: String,
}

impl DiskProbe {
    pub fn new(config: DiskConfig, glyph: String) -> Self {
        Self {
            mount_points: config.mount_points,
            glyph,
        }
    }
}

impl Probe for DiskProbe {
    fn label(&self) -> &str {
        "disk"
    }

    fn sample(&mut self) -> Result<String> {
        if self.mount_points.is_empty() {
            return Ok(String::new());
        }

        let mut parts = Vec::with_capacity(self.mount_points.len());
        for mount in &self.mount_points {
            match free_space(mount) {
                Ok(space) => parts.push(format_free_space(space.free_bytes())),
                Err(e) => log::warn!("Failed to stat {}: {}", mount.display(), e),
            }
        }

        if parts.is_empty() {
            return Err(StatusError::unavailable("no mount point could be queried"));
        }

        Ok(format!("{}{}", self.glyph, parts.join(" ")))
    }
}
