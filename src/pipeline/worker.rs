use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use log::debug;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::engine::link::create_link;
use crate::{LinkOutcome, LinkReport, LinkTask, OutcomeKind, WorkItem};

use super::context::WorkerShared;

/// Identifier used in progress lines and thread names. 1-based.
pub fn worker_name(index: usize) -> String {
    format!("worker-{}", index + 1)
}

/// Single link worker: take items until `Stop` (or the queue closes). After cancellation,
/// remaining tasks are drained without touching the filesystem.
fn link_worker_loop(name: String, work_rx: Receiver<WorkItem>, shared: Arc<WorkerShared>) {
    let mut handled = 0_usize;
    while let Ok(item) = work_rx.recv() {
        let task = match item {
            WorkItem::Task(task) => task,
            WorkItem::Stop => break,
        };
        if shared.ctx.is_cancelled() {
            continue;
        }
        process_task(&name, &task, &shared);
        handled += 1;
    }
    debug!("{name}: stopped after {handled} tasks");
}

/// Link one task, count it, report it. Never fails: errors become [`LinkOutcome::Failed`].
pub fn process_task(name: &str, task: &LinkTask, shared: &WorkerShared) -> OutcomeKind {
    let ctx = &shared.ctx;
    let (target, outcome) = match task.target_path(&ctx.source_root, &ctx.target_root) {
        Some(target) => {
            let outcome = create_link(shared.backend.as_ref(), &task.source, &target);
            (target, outcome)
        }
        None => (
            ctx.target_root.clone(),
            LinkOutcome::Failed(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{} is not under {}",
                    task.source.display(),
                    ctx.source_root.display()
                ),
            )),
        ),
    };

    shared.aggregator.record(&outcome);
    shared.reporter.on_outcome(&LinkReport {
        worker: name,
        source: &task.source,
        target: &target,
        outcome: &outcome,
    });
    outcome.kind()
}

/// Spawn `num_workers` link workers on `work_rx`. Each exits on its own `Stop` item.
pub fn spawn_link_workers(
    work_rx: Receiver<WorkItem>,
    shared: &Arc<WorkerShared>,
    num_workers: usize,
) -> Result<Vec<JoinHandle<()>>> {
    (0..num_workers)
        .map(|i| {
            let name = worker_name(i);
            let work_rx = work_rx.clone();
            let shared = Arc::clone(shared);
            thread::Builder::new()
                .name(name.clone())
                .spawn(move || link_worker_loop(name, work_rx, shared))
                .with_context(|| format!("spawn link worker {}", i + 1))
        })
        .collect()
}
