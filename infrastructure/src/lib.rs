//! Infrastructure layer for sensemaker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod comments;
pub mod config;

// Re-export commonly used types
pub use comments::JsonCommentSource;
pub use config::{ConfigLoader, FileAnalysisConfig, FileConfig, FileOutputConfig};
