#![cfg(unix)]

use std::fs;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

fn stop_with(signal: libc::c_int) -> (Option<i32>, String) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "order": ["clock"], "tick_ms": 100 }"#).unwrap();

    let child = Command::new(env!("CARGO_BIN_EXE_wmstatus"))
        .args(["run", "--stdout", "-v", "-c"])
        .arg(&config)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    thread::sleep(Duration::from_millis(700));
    let rc = unsafe { libc::kill(child.id() as libc::pid_t, signal) };
    assert_eq!(rc, 0);

    let output = child.wait_with_output().unwrap();
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_sigterm_runs_shutdown() {
    let (code, stderr) = stop_with(libc::SIGTERM);
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert!(stderr.contains("Stopped after"), "stderr: {}", stderr);
}

#[test]
fn test_sigint_runs_shutdown() {
    let (code, stderr) = stop_with(libc::SIGINT);
    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert!(stderr.contains("Stopped after"), "stderr: {}", stderr);
}
