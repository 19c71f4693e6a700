//! JSON comment file adapter
//!
//! Reads a UTF-8 JSON array of comments in the upstream export shape:
//!
//! ```json
//! [
//!   {
//!     "id": "c1",
//!     "text": "Keep the library open late",
//!     "voteInfo": {"agreeCount": 12, "disagreeCount": 3, "passCount": 1},
//!     "topics": [{"name": "Services", "subtopics": [{"name": "Library"}]}]
//!   },
//!   {
//!     "id": "c2",
//!     "text": "Build a new bus depot",
//!     "voteInfo": {"group-0": {"agreeCount": 4, "disagreeCount": 9}, "group-1": {"agreeCount": 8, "disagreeCount": 1}}
//!   }
//! ]
//! ```

use sensemaker_application::{CommentSource, CommentSourceError};
use sensemaker_domain::Comment;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Comment source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonCommentSource {
    path: PathBuf,
}

impl JsonCommentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse comments from already-read file contents
    ///
    /// `path` is only used in error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Vec<Comment>, CommentSourceError> {
        let comments: Vec<Comment> =
            serde_json::from_str(content).map_err(|source| CommentSourceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(id) = first_duplicate_id(&comments) {
            return Err(CommentSourceError::DuplicateId(id.to_string()));
        }

        Ok(comments)
    }
}

fn first_duplicate_id(comments: &[Comment]) -> Option<&str> {
    let mut seen = HashSet::new();
    comments
        .iter()
        .map(|c| c.id.as_str())
        .find(|id| !seen.insert(*id))
}

impl CommentSource for JsonCommentSource {
    fn load(&self) -> Result<Vec<Comment>, CommentSourceError> {
        debug!("Reading comments from {}", self.path.display());
        let content = fs::read_to_string(&self.path).map_err(|source| CommentSourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let comments = Self::parse(&self.path, &content)?;
        let with_votes = comments.iter().filter(|c| c.vote_info.is_some()).count();
        info!(
            "Read {} comments ({} with votes) from {}",
            comments.len(),
            with_votes,
            self.path.display()
        );
        Ok(comments)
    }
}
