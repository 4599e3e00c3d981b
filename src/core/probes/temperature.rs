use std::path::PathBuf;

use super::Probe;
use crate::core::config::TemperatureConfig;
use crate::core::reader;
use crate::error::Result;

const MILLIDEGREES_PER_DEGREE: i64 = 1000;

/// One hwmon reading, in whole degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureReading {
    pub celsius: i64,
    pub critical: Option<i64>,
}

impl TemperatureReading {
    pub fn is_critical(&self) -> bool {
        self.critical.is_some_and(|crit| self.celsius >= crit)
    }
}

pub struct TemperatureProbe {
    input_path: PathBuf,
    crit_path: Option<PathBuf>,
    glyph: String,
}

impl TemperatureProbe {
    pub fn new(config: TemperatureConfig, glyph: String) -> Self {
        Self {
            input_path: config.input_path,
            crit_path: config.crit_path,
            glyph,
        }
    }

    pub fn read(&self) -> Result<TemperatureReading> {
        let celsius = reader::read_scalar::<i64>(&self.input_path)? / MILLIDEGREES_PER_DEGREE;
        let critical = match &self.crit_path {
            Some(path) => Some(reader::read_scalar::<i64>(path)? / MILLIDEGREES_PER_DEGREE),
            None => None,
        };

        Ok(TemperatureReading { celsius, critical })
    }
}

impl Probe for TemperatureProbe {
    fn label(&self) -> &str {
        "temperature"
    }

    fn sample(&mut self) -> Result<String> {
        let reading = self.read()?;
        if reading.is_critical() {
            log::info!(
                "Temperature {}°C reached critical threshold {:?}",
                reading.celsius,
                reading.critical
            );
        }

        Ok(format!("{}{}°C", self.glyph, reading.celsius))
    }
}
