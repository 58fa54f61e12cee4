use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::model::config::LockConfig;

/// Advisory file lock serializing writes to a moodboard data directory.
///
/// Uses platform-native flock (Unix) so that concurrent `mb` processes
/// never interleave a load-mutate-save cycle; the last one to finish wins.
pub struct FileLock {
    _file: File,
    path: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not acquire lock on {path}: another mb process may be writing")]
    Timeout { path: PathBuf },
    #[error("lock error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FileLock {
    /// Acquire an advisory lock on the data directory.
    /// Blocks up to `timeout` waiting for the lock.
    pub fn acquire(data_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let lock_path = data_dir.join(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::CreateError {
                path: lock_path.clone(),
                source: e,
            })?;

        let start = Instant::now();
        loop {
            match try_lock(&file) {
                Ok(()) => {
                    return Ok(FileLock {
                        _file: file,
                        path: lock_path,
                    });
                }
                Err(_) if start.elapsed() < timeout => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(_) => {
                    return Err(LockError::Timeout { path: lock_path });
                }
            }
        }
    }

    /// Acquire with the timeout from `[lock]` in moodboard.toml
    pub fn acquire_configured(data_dir: &Path, config: &LockConfig) -> Result<Self, LockError> {
        Self::acquire(data_dir, Duration::from_millis(config.timeout_ms))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// The lock file is left in place on drop: unlinking it would let a waiter
// and a newcomer lock two different inodes at once.

/// Try to acquire an exclusive flock on the file (non-blocking)
#[cfg(unix)]
pub(crate) fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let fd = file.as_raw_fd();
    let result = unsafe { libc::flock(fd, libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
pub(crate) fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    // On non-Unix platforms, just succeed (advisory locking)
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_and_release_lock() {
        let tmp = TempDir::new().unwrap();

        let lock = FileLock::acquire_configured(tmp.path(), &LockConfig::default()).unwrap();
        assert_eq!(lock.path(), tmp.path().join(".lock"));
        drop(lock);

        let lock2 = FileLock::acquire_configured(tmp.path(), &LockConfig::default());
        assert!(lock2.is_ok());
    }

    #[test]
    fn test_lock_contention() {
        let tmp = TempDir::new().unwrap();

        let _lock1 = FileLock::acquire(tmp.path(), Duration::from_secs(1)).unwrap();

        let short = LockConfig { timeout_ms: 50 };
        let lock2 = FileLock::acquire_configured(tmp.path(), &short);
        assert!(matches!(lock2, Err(LockError::Timeout { .. })));
    }

    #[test]
    fn test_missing_directory_is_create_error() {
        let tmp = TempDir::new().unwrap();
        let res = FileLock::acquire(&tmp.path().join("nope"), Duration::from_millis(10));
        assert!(matches!(res, Err(LockError::CreateError { .. })));
    }
}
