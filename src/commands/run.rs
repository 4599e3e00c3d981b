//! `wmstatus run`: the status loop.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{Config, Driver, StatusComposer};
use crate::platform::{Sink, StdoutSink, XRootSink};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<PathBuf>("config");
    let use_stdout = matches.get_flag("stdout");
    let once = matches.get_flag("once");

    let config = Config::load(config_path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    log::info!(
        "Probes: [{}], tick {} ms",
        config
            .order
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", "),
        config.tick_ms
    );

    if use_stdout {
        drive(&config, StdoutSink::new(), once, false)
    } else {
        let sink = XRootSink::connect().context("Failed to acquire the X display")?;
        drive(&config, sink, once, true)
    }
}

fn drive<S: Sink>(config: &Config, sink: S, once: bool, echo: bool) -> Result<()> {
    let composer = StatusComposer::from_config(config);
    let mut driver = Driver::new(composer, sink, config.tick());

    if once {
        let line = driver.run_once().context("Failed to publish status")?;
        if echo {
            println!("{}", line);
        }
        return Ok(());
    }

    let running = driver.running_flag();
    ctrlc::set_handler(move || {
        running.store(false, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set signal handler: {}", e))?;

    driver.run().context("Status loop stopped")?;

    // stdout carries the status lines themselves
    if echo {
        println!("{}", "Status cleared, exiting.".dimmed());
    }
    Ok(())
}
