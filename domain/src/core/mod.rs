//! Core domain concepts shared across all subdomains.
//!
//! - [`error::StatsError`]: precondition violations raised by the engine
//! - [`format`]: percentage and truncation helpers used in messages

pub mod error;
pub mod format;
