//! Public and internal types for the medialink API and pipeline.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::engine::tools::mirrored_target;
use crate::utils::config::{QueueConsts, WorkerConsts};

/// One unit of work: a single eligible file under the source root.
///
/// Only the source is stored; the destination is derived from the roots with [`LinkTask::target_path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTask {
    pub source: PathBuf,
}

impl LinkTask {
    pub fn new(source: PathBuf) -> Self {
        Self { source }
    }

    /// Mirrored destination under `target_root`, or `None` if the source is not under `source_root`.
    pub fn target_path(&self, source_root: &Path, target_root: &Path) -> Option<PathBuf> {
        mirrored_target(&self.source, source_root, target_root)
    }
}

/// Item carried by the work queue. Each worker exits after receiving one `Stop`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkItem {
    Task(LinkTask),
    Stop,
}

/// Result of one create-link attempt.
#[derive(Debug)]
pub enum LinkOutcome {
    Created,
    /// Something (link, file or directory) already sits at the target path.
    Existing,
    Failed(io::Error),
}

impl LinkOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            LinkOutcome::Created => OutcomeKind::Created,
            LinkOutcome::Existing => OutcomeKind::Existing,
            LinkOutcome::Failed(_) => OutcomeKind::Failed,
        }
    }
}

/// Counter bucket for a [`LinkOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Created,
    Existing,
    Failed,
}

/// What a worker hands to the [`Reporter`](crate::engine::report::Reporter) after each task.
pub struct LinkReport<'a> {
    /// Worker identifier, e.g. `worker-3`.
    pub worker: &'a str,
    pub source: &'a Path,
    pub target: &'a Path,
    pub outcome: &'a LinkOutcome,
}

impl LinkReport<'_> {
    /// Plain (uncolored) progress line for this report.
    pub fn line(&self) -> String {
        match self.outcome {
            LinkOutcome::Created => format!(
                "{}: {} => {}",
                self.worker,
                self.source.display(),
                self.target.display()
            ),
            LinkOutcome::Existing => format!(
                "{}: link exists, skipped: {} (source {})",
                self.worker,
                self.target.display(),
                self.source.display()
            ),
            LinkOutcome::Failed(err) => format!(
                "{}: failed to link {} => {}: {}",
                self.worker,
                self.source.display(),
                self.target.display(),
                err
            ),
        }
    }
}

/// Final counter values, read once after all workers have stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResultCounters {
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
}

/// Summary of one run. `total_processed` is `created + existing`; failures are counted separately.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub elapsed_secs: f64,
    pub total_processed: usize,
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
    /// Directories or entries the walk could not read.
    pub skipped_dirs: usize,
    pub cancelled: bool,
}

impl Summary {
    pub fn counters(&self) -> ResultCounters {
        ResultCounters {
            created: self.created,
            existing: self.existing,
            failed: self.failed,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elapsed: {:.2} s, links processed: {}, created: {}, existing (skipped): {}",
            self.elapsed_secs, self.total_processed, self.created, self.existing
        )?;
        if self.failed > 0 {
            write!(f, ", failed: {}", self.failed)?;
        }
        if self.skipped_dirs > 0 {
            write!(f, ", unreadable paths: {}", self.skipped_dirs)?;
        }
        if self.cancelled {
            write!(f, " (cancelled)")?;
        }
        Ok(())
    }
}

/// Options for [`link_tree`](crate::link_tree).
#[derive(Clone, Debug)]
pub struct LinkOpts {
    /// Number of link worker threads. `0` is treated as `1`.
    pub num_workers: usize,
    /// Work queue capacity. `0` means unbounded.
    pub queue_cap: usize,
    /// Walk with jwalk (parallel directory reads) instead of walkdir.
    pub parallel_walk: bool,
    /// Follow symbolic links while walking the source tree.
    pub follow_links: bool,
    /// Stop the walk and fail the run on the first unreadable path instead of skipping it.
    pub strict: bool,
    /// When set to true, the walk stops enqueuing and workers drain the queue without linking.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for LinkOpts {
    fn default() -> Self {
        Self {
            num_workers: WorkerConsts::DEFAULT_WORKERS,
            queue_cap: QueueConsts::DEFAULT_CAP,
            parallel_walk: false,
            follow_links: false,
            strict: false,
            cancel: None,
        }
    }
}

/// Full options (CLI). Use [`LinkOpts`] for lib.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    pub link: LinkOpts,
    /// Debug-level logging for this crate.
    pub verbose: bool,
    /// Print the final summary as JSON on stdout.
    pub json: bool,
    /// Durable log file. When None, log records go to stderr.
    pub log_file: Option<PathBuf>,
}

impl From<&Opts> for LinkOpts {
    fn from(o: &Opts) -> Self {
        o.link.clone()
    }
}
