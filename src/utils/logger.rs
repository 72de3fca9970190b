//! Logger setup (console or durable log file) and console colors.

use anyhow::{Context, Result};
use colored::{Color, Colorize};
use env_logger::{Builder, Target, WriteStyle};
use log::Level;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Console colors for per-link lines.
pub struct Colors;

impl Colors {
    pub const CREATED: Color = Color::Green;
    pub const EXISTING: Color = Color::Yellow;
    pub const FAILED: Color = Color::Red;
    pub const SUMMARY: Color = Color::Cyan;

    pub fn colorize(color: Color, text: &str) -> String {
        text.color(color).to_string()
    }
}

/// Install the global logger.
///
/// With `log_file`, records are appended to that file with a timestamp and no colors (the durable log).
/// Without it, records go to stderr in the colored `[medialink] ...` format.
pub fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use log::LevelFilter;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::from_default_env();
    builder
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level); // Our crate: use requested level

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "{} [{}]: {}",
                        buf.timestamp_seconds(),
                        record.level(),
                        record.args()
                    )
                });
        }
        None => {
            builder.format(|buf, record| {
                let name = env!("CARGO_PKG_NAME");
                let line = match record.level() {
                    Level::Error | Level::Warn => {
                        let level_str = match record.level() {
                            Level::Warn => "WARN".yellow(),
                            Level::Error => "ERROR".red(),
                            _ => unreachable!(),
                        };
                        let path = record.target().to_string().white();
                        format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                    }
                    _ => format!("[{}] {}", name.cyan(), record.args()),
                };
                writeln!(buf, "{}", line)
            });
        }
    }

    builder.try_init().context("initialize logger")?;
    Ok(())
}
