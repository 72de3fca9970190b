use anyhow::Result;
use log::{debug, warn};

use super::context::PipelineContext;

/// Check walk result: if strict and a first error was recorded, return it; otherwise log skipped paths.
/// Call after joining the workers. Returns the number of skipped paths.
pub fn check_for_initial_error_or_skipped_paths(ctx: &PipelineContext) -> Result<usize> {
    if ctx.strict
        && let Some(msg) = ctx.first_error.lock().unwrap().take()
    {
        return Err(anyhow::anyhow!("walk aborted: {}", msg));
    }
    let skipped = ctx.skipped_paths.lock().unwrap();
    if !skipped.is_empty() {
        warn!(
            "Skipped {} paths due to permission errors or access issues",
            skipped.len()
        );
        for (path, msg) in skipped.iter() {
            debug!("  skipped: {} ({})", path.display(), msg);
        }
    }
    Ok(skipped.len())
}
