//! Output directory housekeeping.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::info;

use crate::error::{CodegenError, CodegenResult};

/// Retry policy for clearing the output directory.
///
/// Editors, file indexers and the watch loop itself can hold entries open while a wipe runs, so
/// transient `DirectoryNotEmpty` and `PermissionDenied` failures are retried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WipePolicy {
    /// Total number of attempts, including the first.
    pub attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

/// Remove everything inside `dir` while keeping `dir` itself.
///
/// A missing directory counts as already wiped.
pub fn wipe_dir(dir: &Path, policy: WipePolicy) -> CodegenResult<()> {
    retry_cleanup(dir, policy, || remove_dir_contents(dir)).map_err(|err| {
        CodegenError::io(format!("failed to wipe output directory: {err}"))
            .with_operation("wipe-output")
            .with_path(dir)
    })
}

fn remove_dir_contents(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

fn is_transient(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DirectoryNotEmpty | ErrorKind::PermissionDenied)
}

pub(crate) fn retry_cleanup<F>(dir: &Path, policy: WipePolicy, mut op: F) -> io::Result<()>
where
    F: FnMut() -> io::Result<()>,
{
    let mut remaining = policy.attempts.max(1);
    loop {
        match op() {
            Ok(()) => return Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(()),
            Err(err) if !is_transient(err.kind()) || remaining == 1 => return Err(err),
            Err(err) => {
                info!("{:?}, retrying... {}", err.kind(), dir.display());
                remaining -= 1;
                thread::sleep(policy.delay);
            }
        }
    }
}

/// Write `contents` to `path`, creating parent directories first.
pub fn write_file(path: &Path, contents: &str) -> CodegenResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            CodegenError::io(format!("failed to create directory: {err}")).with_path(parent)
        })?;
    }
    fs::write(path, contents).map_err(|err| {
        CodegenError::io(format!("failed to write file: {err}"))
            .with_operation("write-output")
            .with_path(path)
    })
}
