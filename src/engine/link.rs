//! Link creation: the filesystem seam used by workers and the create-if-absent step.

use std::fs;
use std::io;
use std::path::Path;

use crate::LinkOutcome;

/// Filesystem operations a link worker needs. [`FsBackend`] is the real one.
pub trait LinkBackend: Send + Sync {
    /// Create every missing parent directory of `target`. Existing directories are fine.
    fn ensure_parent(&self, target: &Path) -> io::Result<()>;

    /// Create a symbolic link at `target` pointing to `source`.
    /// Must fail with [`io::ErrorKind::AlreadyExists`] if anything is already at `target`.
    fn symlink(&self, source: &Path, target: &Path) -> io::Result<()>;
}

/// Talks to the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsBackend;

impl LinkBackend for FsBackend {
    fn ensure_parent(&self, target: &Path) -> io::Result<()> {
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn symlink(&self, source: &Path, target: &Path) -> io::Result<()> {
        platform_symlink(source, target)
    }
}

#[cfg(unix)]
fn platform_symlink(source: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(windows)]
fn platform_symlink(source: &Path, target: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(source, target)
}

/// Ensure parents, then create the link in one step and classify the result.
///
/// There is no separate existence check: `AlreadyExists` from the create call is the "existing" case,
/// so two racing creators can never both report `Created`.
pub fn create_link(backend: &dyn LinkBackend, source: &Path, target: &Path) -> LinkOutcome {
    if let Err(err) = backend.ensure_parent(target) {
        return LinkOutcome::Failed(err);
    }
    match backend.symlink(source, target) {
        Ok(()) => LinkOutcome::Created,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => LinkOutcome::Existing,
        Err(err) => LinkOutcome::Failed(err),
    }
}
