//! Single-shot readers for sysfs/procfs pseudo-files.
//!
//! Every call opens the file, reads it once and closes it. Nothing is cached
//! here; probes keep whatever state they need themselves.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, StatusError};

/// Read the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| StatusError::unavailable(format!("{}: {}", path.display(), e)))
}

/// Read the first whitespace-separated token of the file.
pub fn read_word(path: &Path) -> Result<String> {
    let text = read_text(path)?;
    text.split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| StatusError::malformed(format!("{}: file is empty", path.display())))
}

/// Read the first token of the file and parse it as `T`.
pub fn read_scalar<T>(path: &Path) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let word = read_word(path)?;
    parse_token(&word)
        .map_err(|e| StatusError::malformed(format!("{}: {}", path.display(), e)))
}

/// Parse a single token, naming the offending value on failure.
pub fn parse_token<T>(token: &str) -> std::result::Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    token
        .parse::<T>()
        .map_err(|e| format!("invalid value '{}': {}", token, e))
}
