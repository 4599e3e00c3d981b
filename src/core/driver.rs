//! The tick loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::composer::StatusComposer;
use crate::error::Result;
use crate::platform::Sink;

/// Longest single sleep, so a shutdown request is noticed promptly.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

pub struct Driver<S: Sink> {
    composer: StatusComposer,
    sink: S,
    tick: Duration,
    running: Arc<AtomicBool>,
    ticks: u64,
}

impl<S: Sink> Driver<S> {
    pub fn new(composer: StatusComposer, sink: S, tick: Duration) -> Self {
        Self {
            composer,
            sink,
            tick,
            running: Arc::new(AtomicBool::new(true)),
            ticks: 0,
        }
    }

    /// Flag that stops the loop once cleared. Hand it to a signal handler.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Refresh the due probes, publish the line and advance the tick counter.
    pub fn step(&mut self) -> Result<String> {
        let refreshed = self.composer.refresh_due(self.ticks);
        let line = self.composer.compose()?;
        log::debug!("tick {}: {} probe(s) refreshed", self.ticks, refreshed);

        self.sink.set_status(&line)?;
        self.ticks = self.ticks.wrapping_add(1);

        Ok(line)
    }

    /// Run until the running flag is cleared or a fatal error occurs, then
    /// release the sink. A fatal error is returned after the sink is released.
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "Publishing to {} every {:?}",
            self.sink.describe(),
            self.tick
        );

        let outcome = self.run_loop();

        if let Err(e) = self.sink.shutdown() {
            log::warn!("Failed to clear status on {}: {}", self.sink.describe(), e);
        }
        log::info!("Stopped after {} tick(s)", self.ticks);

        outcome
    }

    /// Publish a single line. The sink is left holding it.
    pub fn run_once(&mut self) -> Result<String> {
        self.step()
    }

    fn run_loop(&mut self) -> Result<()> {
        while self.running.load(Ordering::Relaxed) {
            if let Err(e) = self.step() {
                if e.is_fatal() {
                    log::error!("{}", e);
                    return Err(e);
                }
                log::warn!("Tick {} failed: {}", self.ticks, e);
                self.ticks = self.ticks.wrapping_add(1);
            }
            self.sleep();
        }
        Ok(())
    }

    fn sleep(&self) {
        let mut remaining = self.tick;
        while !remaining.is_zero() && self.running.load(Ordering::Relaxed) {
            let slice = remaining.min(SLEEP_SLICE);
            thread::sleep(slice);
            remaining -= slice;
        }
    }
}
