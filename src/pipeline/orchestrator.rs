use anyhow::Result;
use crossbeam_channel::Sender;
use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use crate::engine::link::LinkBackend;
use crate::engine::report::Reporter;
use crate::pipeline::{self, ResultAggregator, WorkerShared};
use crate::utils::config::WorkerConsts;
use crate::{LinkOpts, Summary, WorkItem};

/// Clamp the requested worker count to `1..=MAX_WORKERS`.
pub fn effective_workers(requested: usize) -> usize {
    if requested > WorkerConsts::MAX_WORKERS {
        warn!(
            "{} workers requested, capping at {}",
            requested,
            WorkerConsts::MAX_WORKERS
        );
    }
    requested.clamp(1, WorkerConsts::MAX_WORKERS)
}

/// Queue one `Stop` per worker. Returns how many were sent (fewer only if every worker is gone).
pub fn enqueue_stops(work_tx: &Sender<WorkItem>, num_workers: usize) -> usize {
    (0..num_workers)
        .take_while(|_| work_tx.send(WorkItem::Stop).is_ok())
        .count()
}

/// Join every worker. A panicked worker is an error (its tasks may be unaccounted for).
pub fn shutdown_workers(worker_handles: Vec<JoinHandle<()>>) -> Result<()> {
    let mut panicked = 0_usize;
    for h in worker_handles {
        if h.join().is_err() {
            panicked += 1;
        }
    }
    if panicked > 0 {
        return Err(anyhow::anyhow!("{} link worker(s) panicked", panicked));
    }
    Ok(())
}

/// Main orchestrator: walk `source_root` on this thread, link on a pool of workers, return the summary.
/// Walk → work queue → workers (link + count + report) → Stop ×N → join → summary.
///
/// Roots must already be absolute (see [`link_tree`](crate::link_tree)).
pub fn run_pipeline(
    source_root: &Path,
    target_root: &Path,
    opts: &LinkOpts,
    reporter: Arc<dyn Reporter>,
    backend: Arc<dyn LinkBackend>,
) -> Result<Summary> {
    let start = Instant::now();
    let num_workers = effective_workers(opts.num_workers);

    let pipeline::PipelineChannels {
        work_tx,
        work_rx,
        ctx,
    } = pipeline::create_pipeline_channels(source_root, target_root, opts);

    let aggregator = Arc::new(ResultAggregator::new());
    let shared = Arc::new(WorkerShared {
        ctx: Arc::clone(&ctx),
        aggregator: Arc::clone(&aggregator),
        reporter: Arc::clone(&reporter),
        backend,
    });
    let worker_handles = pipeline::spawn_link_workers(work_rx, &shared, num_workers)?;
    drop(shared);

    let iter = pipeline::walk_iter(&ctx, opts.parallel_walk);
    let enqueued = pipeline::run_walk_loop(&work_tx, &ctx, iter, !opts.parallel_walk);
    let stops = enqueue_stops(&work_tx, num_workers);
    debug!("main: walk done, {enqueued} tasks and {stops} stop items queued for {num_workers} workers");
    drop(work_tx);

    shutdown_workers(worker_handles)?;
    let skipped = pipeline::check_for_initial_error_or_skipped_paths(&ctx)?;

    let summary = aggregator.finish(start.elapsed(), skipped, ctx.is_cancelled());
    reporter.on_summary(&summary);
    Ok(summary)
}
