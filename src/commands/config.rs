use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::Config;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<PathBuf>("config").cloned();

    match matches.subcommand() {
        Some(("path", _)) => handle_path(config_path),
        Some(("show", _)) => handle_show(config_path),
        Some(("init", sub_matches)) => handle_init(config_path, sub_matches.get_flag("force")),
        _ => {
            println!("Use 'wmstatus config --help' for more information.");
            Ok(())
        }
    }
}

fn resolve(config_path: Option<PathBuf>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path),
        None => Config::default_path().context("Failed to locate the config directory"),
    }
}

fn handle_path(config_path: Option<PathBuf>) -> Result<()> {
    let path = resolve(config_path)?;
    println!("{}", path.display());

    if !path.exists() {
        println!(
            "{}",
            "(file does not exist yet; built-in defaults are in effect)".dimmed()
        );
    }

    Ok(())
}

/// Print the effective configuration: the file merged over the defaults.
fn handle_show(config_path: Option<PathBuf>) -> Result<()> {
    let path = resolve(config_path)?;
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn handle_init(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = resolve(config_path)?;

    if path.exists() && !force {
        println!(
            "{}",
            format!("⚠️  Config already exists at {}", path.display()).yellow()
        );
        println!("{}", "Use --force to overwrite it with the defaults.".dimmed());
        return Ok(());
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} {}",
        "✓ Default configuration written to:".green(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wmstatus").join("config.json");

        handle_init(Some(path.clone()), false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "separator": "|" }"#).unwrap();

        handle_init(Some(path.clone()), false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().separator, "|");

        handle_init(Some(path.clone()), true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().separator, " ");
    }
}
