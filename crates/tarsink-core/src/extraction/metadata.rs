//! Best-effort restore of permission bits and modification times.
//!
//! Failures here are reported as a [`RestoreOutcome`] and nothing else. They
//! never abort extraction and are not logged.

use std::path::Path;

use filetime::FileTime;

use crate::report::RestoreOutcome;

/// Permission bits honored on restore: rwx for all classes plus setuid,
/// setgid and sticky.
pub const MODE_MASK: u32 = 0o7777;

/// Applies `mode & MODE_MASK` to `path`.
#[cfg(unix)]
pub(crate) fn restore_permissions(path: &Path, mode: u32) -> RestoreOutcome {
    use std::os::unix::fs::PermissionsExt;

    let permissions = std::fs::Permissions::from_mode(mode & MODE_MASK);
    outcome(std::fs::set_permissions(path, permissions))
}

/// Maps the owner write bit onto the read-only flag.
#[cfg(not(unix))]
pub(crate) fn restore_permissions(path: &Path, mode: u32) -> RestoreOutcome {
    let Ok(metadata) = std::fs::metadata(path) else {
        return RestoreOutcome::Failed;
    };
    let mut permissions = metadata.permissions();
    permissions.set_readonly(mode & 0o200 == 0);
    outcome(std::fs::set_permissions(path, permissions))
}

/// Sets the modification time of `path` to `mtime` seconds since the epoch.
///
/// The access time is set to the current time.
pub(crate) fn restore_mtime(path: &Path, mtime: u64) -> RestoreOutcome {
    let Ok(seconds) = i64::try_from(mtime) else {
        return RestoreOutcome::Failed;
    };
    let modified = FileTime::from_unix_time(seconds, 0);
    outcome(filetime::set_file_times(path, FileTime::now(), modified))
}

fn outcome(result: std::io::Result<()>) -> RestoreOutcome {
    match result {
        Ok(()) => RestoreOutcome::Applied,
        Err(_) => RestoreOutcome::Failed,
    }
}
