//! Pipeline context and channels: shared read-only run state and the work queue.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::engine::link::LinkBackend;
use crate::engine::report::Reporter;
use crate::pipeline::aggregator::ResultAggregator;
use crate::utils::config::QueueConsts;
use crate::{LinkOpts, WorkItem};

/// Shared context for the walk and the link workers. Roots are absolute and fixed for the run.
pub struct PipelineContext {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub strict: bool,
    pub follow_links: bool,
    pub cancel: Option<Arc<AtomicBool>>,
    pub first_error: Arc<Mutex<Option<String>>>,
    pub skipped_paths: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl PipelineContext {
    pub fn new(source_root: &Path, target_root: &Path, opts: &LinkOpts) -> Self {
        Self {
            source_root: source_root.to_path_buf(),
            target_root: target_root.to_path_buf(),
            strict: opts.strict,
            follow_links: opts.follow_links,
            cancel: opts.cancel.clone(),
            first_error: Arc::new(Mutex::new(None)),
            skipped_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|c| c.load(Ordering::Relaxed))
    }
}

/// Everything a link worker thread holds for the whole run.
pub struct WorkerShared {
    pub ctx: Arc<PipelineContext>,
    pub aggregator: Arc<ResultAggregator>,
    pub reporter: Arc<dyn Reporter>,
    pub backend: Arc<dyn LinkBackend>,
}

/// Work queue plus context. Walk side keeps `work_tx`; each worker gets a clone of `work_rx`.
pub struct PipelineChannels {
    pub work_tx: Sender<WorkItem>,
    pub work_rx: Receiver<WorkItem>,
    pub ctx: Arc<PipelineContext>,
}

pub fn create_pipeline_channels(
    source_root: &Path,
    target_root: &Path,
    opts: &LinkOpts,
) -> PipelineChannels {
    let (work_tx, work_rx) = if opts.queue_cap == QueueConsts::UNBOUNDED {
        unbounded::<WorkItem>()
    } else {
        bounded::<WorkItem>(opts.queue_cap)
    };

    PipelineChannels {
        work_tx,
        work_rx,
        ctx: Arc::new(PipelineContext::new(source_root, target_root, opts)),
    }
}
