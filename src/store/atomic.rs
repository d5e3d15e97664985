//! Crash-safer full-file replacement with backup-then-restore semantics.
//!
//! Every file-backed strategy funnels its writes through [`replace_file`].
//! The contract: at every observable instant the target holds either the
//! old content or the new content, never a truncated in-between state.
//!
//! The sequence for a pre-existing target:
//! 1. remove any stale `.bak` sibling (best effort; failure is a warning,
//!    the rename below overwrites it anyway on most platforms);
//! 2. move the target aside to `.bak`; if the target cannot be cleared,
//!    abort without attempting the write;
//! 3. write the new content to a fresh file at the target path;
//! 4. on success, delete the backup (best effort);
//! 5. on failure, move the backup back into place and report the write
//!    error.
//!
//! A failure return means the target is unchanged, or in the
//! restore-failed sub-case degraded with a logged warning.

use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix of the transient backup sibling. Present only mid-replace or
/// after a failed cleanup; absent in steady state.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Sibling path carrying [`BACKUP_SUFFIX`].
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Replace the entire contents of `path` with `data`, atomically with
/// respect to crashes.
pub fn replace_file(path: &Path, data: &str) -> io::Result<()> {
    replace_file_with(path, data, |p, d| fs::write(p, d))
}

// The write step is injectable so tests can engineer failures and assert
// the restore property.
fn replace_file_with<F>(path: &Path, data: &str, write: F) -> io::Result<()>
where
    F: FnOnce(&Path, &str) -> io::Result<()>,
{
    let backup = backup_path(path);
    let had_previous = path.exists();

    if had_previous {
        if backup.exists() {
            if let Err(err) = fs::remove_file(&backup) {
                warn!(
                    "cannot remove stale backup {}: {err} - continuing with degraded safety",
                    backup.display()
                );
            }
        }
        // The target must be cleared before the fresh write. If it cannot
        // be moved aside, stop here rather than risk a partial overwrite.
        fs::rename(path, &backup)?;
    }

    match write(path, data) {
        Ok(()) => {
            if had_previous && backup.exists() {
                if let Err(err) = fs::remove_file(&backup) {
                    warn!("cannot delete backup {}: {err}", backup.display());
                }
            }
            Ok(())
        }
        Err(err) => {
            if had_previous && !path.exists() && backup.exists() {
                if let Err(restore_err) = fs::rename(&backup, path) {
                    warn!(
                        "cannot restore {} from backup: {restore_err}",
                        path.display()
                    );
                }
            }
            Err(err)
        }
    }
}
