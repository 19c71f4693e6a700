//! Configuration file loading for sensemaker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./sensemaker.toml` or `./.sensemaker.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/sensemaker/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileAnalysisConfig, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
