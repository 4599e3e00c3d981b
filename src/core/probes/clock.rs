use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

use super::Probe;
use crate::error::{Result, StatusError};

/// Local wall-clock time.
pub struct ClockProbe {
    format: String,
}

impl ClockProbe {
    pub fn new(format: String) -> Self {
        Self { format }
    }
}

impl Probe for ClockProbe {
    fn label(&self) -> &str {
        "clock"
    }

    fn sample(&mut self) -> Result<String> {
        format_time(&Local::now(), &self.format)
    }
}

/// Render `time` with a strftime-style pattern.
///
/// An invalid pattern is reported as an error instead of panicking the way
/// `DelayedFormat::to_string` does.
pub fn format_time<Tz>(time: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", time.format(pattern))
        .map_err(|_| StatusError::malformed(format!("invalid time format '{}'", pattern)))?;
    Ok(out)
}
