// Filesystem statistics

use std::path::Path;

use crate::error::{Result, StatusError};

/// Free-space figures of one mounted filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsSpace {
    pub block_size: u64,
    pub free_blocks: u64,
}

impl FsSpace {
    pub fn free_bytes(&self) -> u64 {
        self.block_size.saturating_mul(self.free_blocks)
    }
}

#[cfg(unix)]
pub fn free_space(mount_point: &Path) -> Result<FsSpace> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(mount_point.as_os_str().as_bytes()).map_err(|_| {
        StatusError::malformed(format!("{}: path contains NUL", mount_point.display()))
    })?;

    let mut stats = std::mem::MaybeUninit::<libc::statvfs>::uninit();
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stats.as_mut_ptr()) };
    if rc != 0 {
        return Err(StatusError::unavailable(format!(
            "{}: {}",
            mount_point.display(),
            std::io::Error::last_os_error()
        )));
    }
    let stats = unsafe { stats.assume_init() };

    Ok(FsSpace {
        block_size: stats.f_bsize as u64,
        free_blocks: stats.f_bfree as u64,
    })
}

#[cfg(not(unix))]
pub fn free_space(mount_point: &Path) -> Result<FsSpace> {
    Err(StatusError::unavailable(format!(
        "{}: filesystem statistics not supported on this platform",
        mount_point.display()
    )))
}
