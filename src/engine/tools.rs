//! Path and filter utilities

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::utils::config::ALLOWED_EXTENSIONS;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Target-root path mirroring `source`'s position under `source_root`.
pub fn mirrored_target(source: &Path, source_root: &Path, target_root: &Path) -> Option<PathBuf> {
    path_relative_to(source, source_root).map(|rel| target_root.join(rel))
}

/// True if the path's final segment ends with an allowed media extension (case-sensitive).
pub fn is_eligible(path: &Path) -> bool {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        }
        None => false,
    }
}

/// Canonicalize the source root. It must exist and be a directory.
pub fn resolve_source_root(path: &Path) -> Result<PathBuf> {
    let root = path
        .canonicalize()
        .with_context(|| format!("canonicalize source root {}", path.display()))?;
    if !root.is_dir() {
        bail!("source root is not a directory: {}", root.display());
    }
    Ok(root)
}

/// Make the target root absolute. It may not exist yet; if it does, it must be a directory.
pub fn resolve_target_root(path: &Path) -> Result<PathBuf> {
    match path.canonicalize() {
        Ok(root) if root.is_dir() => Ok(root),
        Ok(root) => bail!("target root is not a directory: {}", root.display()),
        Err(_) => std::path::absolute(path)
            .with_context(|| format!("make target root absolute {}", path.display())),
    }
}
