//! Comment source port.
//!
//! Defines where the comments under analysis come from. Infrastructure
//! adapters implement this to read comment exports (e.g. a JSON file).

use sensemaker_domain::Comment;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading comments
#[derive(Error, Debug)]
pub enum CommentSourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate comment id: {0}")]
    DuplicateId(String),
}

/// Port for loading the comments to analyze.
///
/// Order matters: selections break score ties by input order.
pub trait CommentSource {
    fn load(&self) -> Result<Vec<Comment>, CommentSourceError>;
}

/// A fixed, in-memory set of comments
impl CommentSource for Vec<Comment> {
    fn load(&self) -> Result<Vec<Comment>, CommentSourceError> {
        Ok(self.clone())
    }
}
