//! Host-wide figures that come from library calls rather than files.

use sysinfo::System;

/// Load averages and processor count.
pub trait HostStats {
    /// 1, 5 and 15 minute load averages
    fn load_average(&self) -> [f64; 3];

    /// Online processors, never less than 1
    fn online_cpus(&self) -> u64;
}

/// [`HostStats`] backed by `sysinfo` and `sysconf(3)`.
#[derive(Debug, Default)]
pub struct SysinfoHost;

impl HostStats for SysinfoHost {
    fn load_average(&self) -> [f64; 3] {
        let load = System::load_average();
        [load.one, load.five, load.fifteen]
    }

    fn online_cpus(&self) -> u64 {
        online_cpus()
    }
}

#[cfg(unix)]
fn online_cpus() -> u64 {
    let count = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    // some libcs report 0 or -1 here
    if count < 1 {
        1
    } else {
        count as u64
    }
}

#[cfg(not(unix))]
fn online_cpus() -> u64 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u64)
        .unwrap_or(1)
}
