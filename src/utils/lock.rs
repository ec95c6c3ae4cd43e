//! Advisory file locking around read-modify-write of shared output files.
//!
//! Uses `flock(2)` directly on unix and keeps only the `File`, so the guard owns
//! the fd and `Drop` releases it. Elsewhere the guard only holds the file open.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Exclusive lock held until dropped.
pub struct FileLock {
    file: File,
    path: PathBuf,
}

impl std::fmt::Debug for FileLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLock").field("path", &self.path).finish()
    }
}

impl FileLock {
    /// Open (creating if needed) `path` and block until an exclusive lock is held.
    pub fn acquire(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;

            // SAFETY: the fd belongs to `file`, which is open for the duration of the call.
            let ret = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX) };
            if ret != 0 {
                return Err(std::io::Error::last_os_error())
                    .with_context(|| format!("Failed to lock {}", path.display()));
            }
        }

        Ok(Self { file, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;

            // SAFETY: the fd is owned by `self.file`. Closing the fd right after
            // releases the lock even if this call fails.
            unsafe {
                libc::flock(self.file.as_raw_fd(), libc::LOCK_UN);
            }
        }
        #[cfg(not(unix))]
        let _ = &self.file;
    }
}
