//! Configuration module for websift
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then CLI flag overrides applied by the caller. Everything is validated
//! before a run starts.

mod parser;
mod types;
mod validation;

pub use parser::{compute_file_hash, hash_content, load_config, load_config_with_hash};
pub use types::{Config, OutputConfig, ScanConfig, DEFAULT_KEYWORDS};
pub use validation::validate;
