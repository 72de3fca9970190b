//! Medialink: mirror a media library as a tree of symbolic links

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::{debug, info};
use std::path::Path;
use std::sync::Arc;

use crate::engine::link::{FsBackend, LinkBackend};
use crate::engine::report::Reporter;
use crate::engine::tools::{resolve_source_root, resolve_target_root};

/// Result alias used by public medialink API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: link every eligible file under `source_root` into `target_root` at the same
/// relative path, and return the run [`Summary`].
///
/// `source_root` must be an existing directory; `target_root` is created on demand. Each processed
/// file and the final summary are passed to `reporter`. Per-file failures are counted, not returned.
///
/// ```ignore
/// let reporter = Arc::new(medialink::engine::report::NullReporter);
/// let summary = medialink::link_tree(src, dst, &LinkOpts::default(), reporter)?;
/// println!("created {} links", summary.created);
/// ```
pub fn link_tree(
    source_root: &Path,
    target_root: &Path,
    opts: &LinkOpts,
    reporter: Arc<dyn Reporter>,
) -> Result<Summary> {
    link_tree_with_backend(source_root, target_root, opts, reporter, Arc::new(FsBackend))
}

/// [`link_tree`] with an explicit filesystem backend for the link step.
pub fn link_tree_with_backend(
    source_root: &Path,
    target_root: &Path,
    opts: &LinkOpts,
    reporter: Arc<dyn Reporter>,
    backend: Arc<dyn LinkBackend>,
) -> Result<Summary> {
    let source = resolve_source_root(source_root)?;
    let target = resolve_target_root(target_root)?;
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );
    info!(
        "Updating symlinks: {} -> {}",
        source.display(),
        target.display()
    );
    pipeline::run_pipeline(&source, &target, opts, reporter, backend)
}
