//! Progress and result sinks.

use log::{info, warn};

use crate::utils::Colors;
use crate::{LinkOutcome, LinkReport, Summary};

/// Receives one report per processed task (from worker threads) and the final summary.
pub trait Reporter: Send + Sync {
    fn on_outcome(&self, report: &LinkReport<'_>);
    fn on_summary(&self, summary: &Summary);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_outcome(&self, _report: &LinkReport<'_>) {}
    fn on_summary(&self, _summary: &Summary) {}
}

/// CLI sink: a colored line per outcome on the console, plus the same line in the durable log.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleReporter {
    /// Also write each line through `log` (the logger is pointed at the log file).
    durable: bool,
    /// Print console lines on stderr so stdout stays clean (used with `--json`).
    to_stderr: bool,
}

impl ConsoleReporter {
    pub fn new(durable: bool, to_stderr: bool) -> Self {
        Self { durable, to_stderr }
    }

    fn print(&self, line: &str) {
        if self.to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

impl Reporter for ConsoleReporter {
    fn on_outcome(&self, report: &LinkReport<'_>) {
        let line = report.line();
        let color = match report.outcome {
            LinkOutcome::Created => Colors::CREATED,
            LinkOutcome::Existing => Colors::EXISTING,
            LinkOutcome::Failed(_) => Colors::FAILED,
        };
        self.print(&Colors::colorize(color, &line));
        if self.durable {
            match report.outcome {
                LinkOutcome::Failed(_) => warn!("{line}"),
                _ => info!("{line}"),
            }
        }
    }

    fn on_summary(&self, summary: &Summary) {
        let line = summary.to_string();
        self.print(&Colors::colorize(Colors::SUMMARY, &line));
        if self.durable {
            info!("{line}");
        }
    }
}
