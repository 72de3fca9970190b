pub mod config;
pub mod config_file;
pub mod logger;

pub use config::*;
pub use config_file::{ConfigFile, load_config_file, non_empty_path, parse_config};
pub use logger::{Colors, setup_logging};
