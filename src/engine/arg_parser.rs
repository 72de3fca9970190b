use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::{CONFIG_FILENAME, QueueConsts};

/// Mirror a media library as symbolic links.
#[derive(Clone, Debug, Parser)]
#[command(name = "medialink", version)]
#[command(
    about = "Link every media file under SOURCE into TARGET at the same relative path. Roots fall back to media_dir / symlink_dir in the config file."
)]
pub struct Cli {
    /// Source media directory. Falls back to `media_dir` in the config file.
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Directory to create links in. Falls back to `symlink_dir` in the config file.
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// `key=value` config file (media_dir, symlink_dir, workers, log_file).
    #[arg(long, short = 'c', value_name = "FILE", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Number of link worker threads. Default: `workers` from the config file, else 8.
    #[arg(long, short = 'w', value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Work queue capacity; 0 means unbounded.
    #[arg(long, short = 'q', default_value_t = QueueConsts::DEFAULT_CAP)]
    pub queue_cap: usize,

    /// Durable log file. Default: `log_file` from the config file, else medialink.log.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log to stderr instead of a log file.
    #[arg(long, conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Walk the source tree with parallel directory reads.
    #[arg(long, short = 'p')]
    pub parallel_walk: bool,

    /// Follow symbolic links while walking the source tree.
    #[arg(long, short = 'f')]
    pub follow_links: bool,

    /// Strict mode: abort on the first unreadable path instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Print the final summary as JSON on stdout (progress lines move to stderr).
    #[arg(long)]
    pub json: bool,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
