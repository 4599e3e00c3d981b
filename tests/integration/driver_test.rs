use std::io::Write;
use std::time::Duration;

use wmstatus::core::probes::Probe;
use wmstatus::core::{Driver, ProbeSchedule, StatusComposer};
use wmstatus::platform::{Sink, StdoutSink};
use wmstatus::{Result, StatusError};

struct Fixed(&'static str);

impl Probe for Fixed {
    fn label(&self) -> &str {
        "fixed"
    }

    fn sample(&mut self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct Unwritable;

impl Write for Unwritable {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn composer(text: &'static str) -> StatusComposer {
    let mut composer = StatusComposer::new(" ");
    composer.push(Box::new(Fixed(text)), ProbeSchedule::default());
    composer
}

#[test]
fn test_once_writes_single_line() {
    let sink = StdoutSink::with_writer(Vec::new());
    let mut driver = Driver::new(composer("hello"), sink, Duration::ZERO);

    assert_eq!(driver.run_once().unwrap(), "hello");
    assert_eq!(driver.ticks(), 1);
}

#[test]
fn test_broken_writer_stops_driver() {
    let sink = StdoutSink::with_writer(Unwritable);
    assert_eq!(sink.describe(), "stdout");

    let mut driver = Driver::new(composer("x"), sink, Duration::ZERO);
    let err = driver.run().unwrap_err();

    assert!(matches!(err, StatusError::Display(_)));
    assert!(err.is_fatal());
}
