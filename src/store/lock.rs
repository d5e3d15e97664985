//! Opt-in advisory lock for callers that want the single-owner-per-
//! directory assumption enforced.
//!
//! The stores themselves never take this lock; the synchronous, lock-free
//! contract is unchanged. A shell that wants protection acquires the guard
//! around its store's lifetime.

use crate::error::{Result, StoreError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the lock file inside the storage directory.
pub const LOCK_FILE_NAME: &str = ".jotfile.lock";

/// RAII guard over an exclusively created lock file. The file records the
/// owning pid and is removed on drop.
#[derive(Debug)]
pub struct DirLock {
    path: PathBuf,
}

impl DirLock {
    /// Acquire the lock for `dir`, creating the directory if needed.
    ///
    /// Fails with a construction-class error when another holder already
    /// has it. A stale lock left by a crashed process must be removed by
    /// hand; the guard does not steal.
    pub fn acquire(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOCK_FILE_NAME);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let _ = write!(file, "{}", std::process::id());
                Ok(Self { path })
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(StoreError::Construction {
                    path,
                    reason: "directory is locked by another owner".to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DirLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
