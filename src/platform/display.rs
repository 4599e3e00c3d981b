//! Status sinks: where the composed line ends up.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

use crate::error::{Result, StatusError};

/// Destination of the status line.
pub trait Sink {
    /// Publish `text`. Errors are not retried by the driver.
    fn set_status(&mut self, text: &str) -> Result<()>;

    /// Release the display before the process exits.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn describe(&self) -> String;
}

/// Writes the status into the X root window name, which dwm shows as its bar text.
#[derive(Debug)]
pub struct XRootSink {
    xsetroot: PathBuf,
    display: String,
}

impl XRootSink {
    /// Acquire the display. Fails when no X display is configured or
    /// `xsetroot` cannot be found on `PATH`.
    pub fn connect() -> Result<Self> {
        let display = std::env::var("DISPLAY")
            .ok()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| StatusError::display("cannot open display: DISPLAY is not set"))?;

        let xsetroot = which::which("xsetroot")
            .map_err(|e| StatusError::display(format!("cannot find xsetroot: {}", e)))?;

        log::info!("Using {} on display {}", xsetroot.display(), display);

        Ok(Self { xsetroot, display })
    }

    fn store_name(&self, text: &str) -> Result<()> {
        let output = Command::new(&self.xsetroot)
            .arg("-name")
            .arg(text)
            .output()
            .map_err(|e| StatusError::display(format!("failed to run xsetroot: {}", e)))?;

        if !output.status.success() {
            return Err(StatusError::display(format!(
                "xsetroot exited with {} on {}: {}",
                output.status,
                self.display,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}

impl Sink for XRootSink {
    fn set_status(&mut self, text: &str) -> Result<()> {
        self.store_name(text)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.store_name("")
    }

    fn describe(&self) -> String {
        format!("X root window on {}", self.display)
    }
}

/// Prints one status line per tick, for bars that read stdin or for debugging.
pub struct StdoutSink<W: Write = io::Stdout> {
    out: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for StdoutSink<W> {
    fn set_status(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .map_err(|e| StatusError::display(format!("failed to write status: {}", e)))
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}
