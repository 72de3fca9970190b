//! Application configuration constants.
//! Tuning, file names and the extension allow-list in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived file names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    log_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                log_filename: format!("{pkg}.log"),
            }
        })
    }

    /// Default durable log file, relative to the working directory.
    pub fn log_filename(&self) -> &str {
        &self.log_filename
    }
}

/// Default `key=value` file holding the two roots.
pub const CONFIG_FILENAME: &str = "config.txt";

// ---- Config file keys ----

pub const MEDIA_DIR_KEY: &str = "media_dir";
pub const SYMLINK_DIR_KEY: &str = "symlink_dir";
pub const WORKERS_KEY: &str = "workers";
pub const LOG_FILE_KEY: &str = "log_file";

/// Reported when either root cannot be resolved to a non-empty path.
pub const MISSING_ROOTS_MSG: &str = "Please provide source folder and target folder paths.";

// ---- Eligibility ----

/// File-name suffixes that are linked. Matched case-sensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".mkv", ".iso", ".ts", ".mp4", ".avi", ".rmvb", ".wmv", ".m2ts", ".mpg", ".flv", ".rm", ".mov",
];

// ---- Worker threads ----

/// Link worker pool sizing.
pub struct WorkerConsts;

impl WorkerConsts {
    pub const DEFAULT_WORKERS: usize = 8;
    /// Requests above this are clamped (each worker is an OS thread).
    pub const MAX_WORKERS: usize = 256;
}

// ---- Work queue ----

pub struct QueueConsts;

impl QueueConsts {
    /// Bounded so a huge tree cannot buffer every path in memory ahead of the workers.
    pub const DEFAULT_CAP: usize = 10_000;
    pub const UNBOUNDED: usize = 0;
}

// ---- Walk ----

/// Busy timeout handed to jwalk's rayon pool when walking in parallel.
pub const JWALK_BUSY_TIMEOUT_SECS: u64 = 60;
