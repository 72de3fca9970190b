//! Common walk loop: consumes an iterator of walk outcomes and enqueues a [`LinkTask`] per eligible file.

use crossbeam_channel::Sender;
use log::debug;
use std::path::PathBuf;

use crate::engine::tools::is_eligible;
use crate::utils::config::JWALK_BUSY_TIMEOUT_SECS;
use crate::{LinkTask, WorkItem};

use super::context::PipelineContext;

/// One result from a directory walk: an entry (file or not) or an error with optional path.
pub enum WalkOutcome {
    Ok { path: PathBuf, is_file: bool },
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a jwalk result into [`WalkOutcome`].
pub fn to_outcome_jwalk(r: Result<jwalk::DirEntry<((), ())>, jwalk::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => WalkOutcome::Ok {
            is_file: entry.file_type().is_file(),
            path: entry.path(),
        },
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

/// Convert a walkdir result into [`WalkOutcome`].
pub fn to_outcome_walkdir(r: Result<walkdir::DirEntry, walkdir::Error>) -> WalkOutcome {
    match r {
        Ok(entry) => WalkOutcome::Ok {
            is_file: entry.file_type().is_file(),
            path: entry.into_path(),
        },
        Err(err) => WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        },
    }
}

fn jwalk_iter(ctx: &PipelineContext) -> Box<dyn Iterator<Item = WalkOutcome>> {
    use jwalk::Parallelism;
    use std::time::Duration;
    Box::new(
        jwalk::WalkDir::new(&ctx.source_root)
            .follow_links(ctx.follow_links)
            .parallelism(Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_secs(JWALK_BUSY_TIMEOUT_SECS),
            })
            .into_iter()
            .map(to_outcome_jwalk),
    )
}

fn walkdir_iter(ctx: &PipelineContext) -> Box<dyn Iterator<Item = WalkOutcome>> {
    use walkdir::WalkDir;
    Box::new(
        WalkDir::new(&ctx.source_root)
            .follow_links(ctx.follow_links)
            .into_iter()
            .map(to_outcome_walkdir),
    )
}

/// Lazy walk over the source root: jwalk when `parallel_walk`, walkdir otherwise.
pub fn walk_iter(ctx: &PipelineContext, parallel_walk: bool) -> Box<dyn Iterator<Item = WalkOutcome>> {
    if parallel_walk {
        debug!("Walking in parallel");
        jwalk_iter(ctx)
    } else {
        debug!("Walking serially");
        walkdir_iter(ctx)
    }
}

/// Run the walk loop: consume `iter`, keep regular files that pass [`is_eligible`], send each as a
/// [`WorkItem::Task`]. Errors: strict → set first_error and break; else push to skipped_paths and go on.
/// Stops early when cancellation is requested or every receiver is gone. Returns the count of tasks sent.
/// When `track_last_path` is true (walkdir/serial), the last path seen labels errors that carry no path.
pub fn run_walk_loop<I>(
    work_tx: &Sender<WorkItem>,
    ctx: &PipelineContext,
    iter: I,
    track_last_path: bool,
) -> usize
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut count = 0_usize;
    let mut last_path: Option<PathBuf> = None;
    for outcome in iter {
        if ctx.is_cancelled() {
            debug!("walk: cancelled after {count} tasks");
            break;
        }
        match outcome {
            WalkOutcome::Ok { path, is_file } => {
                if track_last_path {
                    last_path = Some(path.clone());
                }
                if !is_file || !is_eligible(&path) {
                    continue;
                }
                if work_tx.send(WorkItem::Task(LinkTask::new(path))).is_err() {
                    break;
                }
                count += 1;
            }
            WalkOutcome::Err { msg, path } => {
                if ctx.strict {
                    let _ = ctx.first_error.lock().unwrap().get_or_insert_with(|| msg);
                    break;
                }
                let to_push = path.unwrap_or_else(|| {
                    PathBuf::from(format!(
                        "<no-path, last was {}>",
                        last_path
                            .as_ref()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "<none>".to_string())
                    ))
                });
                ctx.skipped_paths.lock().unwrap().push((to_push, msg));
            }
        }
    }
    count
}
