//! Medialink CLI: mirror a media directory as symbolic links.

use anyhow::Result;
use clap::Parser;
use medialink::engine::arg_parser::Cli;
use medialink::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
