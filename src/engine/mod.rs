//! Engine module: CLI, path tools, link creation and reporting

pub mod arg_parser;
pub mod cli;
pub mod link;
pub mod report;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{handle_run, load_file_settings, resolve_roots, setup_opts};
pub use link::{FsBackend, LinkBackend, create_link};
pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use tools::{is_eligible, mirrored_target, path_relative_to};
