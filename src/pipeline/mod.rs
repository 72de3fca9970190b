//! Pipeline components: context, walk loop, link workers, counters, orchestration.

pub mod aggregator;
pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;
pub mod worker;

pub use aggregator::ResultAggregator;
pub use context::{PipelineChannels, PipelineContext, WorkerShared, create_pipeline_channels};
pub use error_handler::check_for_initial_error_or_skipped_paths;
pub use orchestrator::{effective_workers, enqueue_stops, run_pipeline, shutdown_workers};
pub use walk::{WalkOutcome, run_walk_loop, to_outcome_jwalk, to_outcome_walkdir, walk_iter};
pub use worker::{process_task, spawn_link_workers, worker_name};
