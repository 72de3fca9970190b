//! CLI command handler: resolve roots, set up the log, run the link pipeline.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::arg_parser::Cli;
use crate::engine::report::{ConsoleReporter, Reporter};
use crate::link_tree;
use crate::utils::config::{MISSING_ROOTS_MSG, PackagePaths, WorkerConsts};
use crate::utils::{ConfigFile, load_config_file, non_empty_path, setup_logging};
use crate::{LinkOpts, Opts};

/// Read the config file when a root is missing from the command line.
/// With both roots given the file is not opened at all, so a stale or malformed file cannot block the run.
pub fn load_file_settings(cli: &Cli) -> Result<Option<ConfigFile>> {
    if cli.source.is_some() && cli.target.is_some() {
        return Ok(None);
    }
    if cli.config.is_file() {
        return load_config_file(&cli.config).map(Some);
    }
    bail!(
        "{} (no roots on the command line and config file {} not found)",
        MISSING_ROOTS_MSG,
        cli.config.display()
    )
}

/// Source and target roots: command line first, then `media_dir` / `symlink_dir` from the file.
/// Either one missing or blank is a configuration error.
pub fn resolve_roots(cli: &Cli, file: Option<&ConfigFile>) -> Result<(PathBuf, PathBuf)> {
    let source = cli
        .source
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| non_empty_path(file.and_then(|f| f.media_dir.as_deref())));
    let target = cli
        .target
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| non_empty_path(file.and_then(|f| f.symlink_dir.as_deref())));

    match (source, target) {
        (Some(source), Some(target)) => Ok((source, target)),
        _ => bail!("{}", MISSING_ROOTS_MSG),
    }
}

/// Build full options: command-line flags override the file, the file overrides defaults.
pub fn setup_opts(cli: &Cli, file: Option<&ConfigFile>) -> Opts {
    let num_workers = cli
        .workers
        .or_else(|| file.and_then(|f| f.workers))
        .unwrap_or(WorkerConsts::DEFAULT_WORKERS);
    let log_file = if cli.no_log_file {
        None
    } else {
        Some(
            cli.log_file
                .clone()
                .or_else(|| file.and_then(|f| f.log_file.clone()))
                .unwrap_or_else(|| PathBuf::from(PackagePaths::get().log_filename())),
        )
    };
    Opts {
        link: LinkOpts {
            num_workers,
            queue_cap: cli.queue_cap,
            parallel_walk: cli.parallel_walk,
            follow_links: cli.follow_links,
            strict: cli.strict,
            cancel: None,
        },
        verbose: cli.verbose,
        json: cli.json,
        log_file,
    }
}

/// Run one link pass. Nothing is written (not even the log) until both roots are known.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let file = load_file_settings(cli)?;
    let (source, target) = resolve_roots(cli, file.as_ref())?;
    let mut opts = setup_opts(cli, file.as_ref());

    setup_logging(opts.verbose, opts.log_file.as_deref())?;
    info!("Run started");
    debug!("config file: {}", cli.config.display());

    let cancel_requested = Arc::new(AtomicBool::new(false));
    let cancel_requested_handler = Arc::clone(&cancel_requested);
    ctrlc::set_handler(move || {
        cancel_requested_handler.store(true, Ordering::Relaxed);
    })
    .context("set Ctrl+C handler")?;
    opts.link.cancel = Some(Arc::clone(&cancel_requested));

    let reporter: Arc<dyn Reporter> =
        Arc::new(ConsoleReporter::new(opts.log_file.is_some(), opts.json));
    let summary = link_tree(&source, &target, &LinkOpts::from(&opts), reporter)?;

    if opts.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize summary")?
        );
    }
    if summary.cancelled {
        bail!(
            "Linking cancelled by user; {} links were created before stopping",
            summary.created
        );
    }
    Ok(())
}
