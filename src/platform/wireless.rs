//! Wireless link details: network name and signal quality.

use std::path::PathBuf;

use crate::core::reader;
use crate::error::{Result, StatusError};

/// Longest SSID the wireless extensions return.
const ESSID_MAX_SIZE: usize = 32;

/// Queries about an associated wireless interface.
pub trait WirelessInfoProvider {
    /// Network name; may be empty when the card does not report one.
    fn ssid(&self, interface: &str) -> Result<String>;

    /// Link quality in percent (0..=100).
    fn strength(&self, interface: &str) -> Result<u8>;
}

/// Linux wireless extensions: SSID through `SIOCGIWESSID`, quality from
/// the kernel's wireless table.
#[derive(Debug, Clone)]
pub struct LinuxWireless {
    quality_path: PathBuf,
}

impl LinuxWireless {
    pub fn new(quality_path: impl Into<PathBuf>) -> Self {
        Self {
            quality_path: quality_path.into(),
        }
    }
}

impl Default for LinuxWireless {
    fn default() -> Self {
        Self::new("/proc/net/wireless")
    }
}

impl WirelessInfoProvider for LinuxWireless {
    fn ssid(&self, interface: &str) -> Result<String> {
        query_essid(interface)
    }

    fn strength(&self, interface: &str) -> Result<u8> {
        let table = reader::read_text(&self.quality_path)?;
        parse_link_quality(&table, interface).ok_or_else(|| {
            StatusError::malformed(format!(
                "{}: no quality entry for {}",
                self.quality_path.display(),
                interface
            ))
        })
    }
}

/// Find `interface` in the wireless table and return its link quality.
///
/// ```text
/// Inter-| sta-|   Quality        |   Discarded packets               | Missed | WE
///  face | tus | link level noise |  nwid  crypt   frag  retry   misc | beacon | 22
/// wlp7s0: 0000   58.  -52.  -256        0      0      0      0     12        0
/// ```
pub fn parse_link_quality(table: &str, interface: &str) -> Option<u8> {
    table.lines().skip(2).find_map(|line| {
        let (name, rest) = line.trim_start().split_once(':')?;
        if name != interface {
            return None;
        }
        let link = rest.split_whitespace().nth(1)?;
        let quality = link.trim_end_matches('.').parse::<i64>().ok()?;
        Some(quality.clamp(0, 100) as u8)
    })
}

#[cfg(target_os = "linux")]
fn query_essid(interface: &str) -> Result<String> {
    use std::os::raw::{c_char, c_void};

    const SIOCGIWESSID: libc::c_ulong = 0x8B1B;

    #[repr(C)]
    #[derive(Clone, Copy)]
    struct IwPoint {
        pointer: *mut c_void,
        length: u16,
        flags: u16,
    }

    #[repr(C)]
    union IwReqData {
        essid: IwPoint,
        _pad: [u8; 16],
    }

    #[repr(C)]
    struct IwReq {
        ifr_name: [c_char; libc::IFNAMSIZ],
        u: IwReqData,
    }

    if interface.is_empty() || interface.len() >= libc::IFNAMSIZ {
        return Err(StatusError::malformed(format!(
            "invalid interface name '{}'",
            interface
        )));
    }

    let mut essid = [0u8; ESSID_MAX_SIZE + 1];
    let mut request = IwReq {
        ifr_name: [0; libc::IFNAMSIZ],
        u: IwReqData {
            essid: IwPoint {
                pointer: essid.as_mut_ptr().cast(),
                length: essid.len() as u16,
                flags: 0,
            },
        },
    };
    for (dst, src) in request.ifr_name.iter_mut().zip(interface.bytes()) {
        *dst = src as c_char;
    }

    let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM, 0) };
    if fd < 0 {
        return Err(StatusError::unavailable(format!(
            "socket for {}: {}",
            interface,
            std::io::Error::last_os_error()
        )));
    }

    let rc = unsafe { libc::ioctl(fd, SIOCGIWESSID as _, &mut request as *mut IwReq) };
    let ioctl_error = std::io::Error::last_os_error();
    unsafe { libc::close(fd) };

    if rc < 0 {
        return Err(StatusError::unavailable(format!(
            "ESSID query for {}: {}",
            interface, ioctl_error
        )));
    }

    let reported = unsafe { request.u.essid.length } as usize;
    let len = essid[..reported.min(ESSID_MAX_SIZE)]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(reported.min(ESSID_MAX_SIZE));

    Ok(String::from_utf8_lossy(&essid[..len]).into_owned())
}

#[cfg(not(target_os = "linux"))]
fn query_essid(interface: &str) -> Result<String> {
    Err(StatusError::unavailable(format!(
        "ESSID query for {}: wireless extensions not supported on this platform",
        interface
    )))
}
