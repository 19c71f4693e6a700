//! Vote tally value object

use serde::{Deserialize, Serialize};

/// Aggregated agree/disagree/pass votes for one comment (or one opinion group)
///
/// A missing pass count is treated as zero.
///
/// # Example
///
/// ```
/// use sensemaker_domain::VoteTally;
///
/// let tally = VoteTally::new(7, 2).with_passes(1);
/// assert_eq!(tally.total_count(false), 9);
/// assert_eq!(tally.total_count(true), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub agree_count: u64,
    pub disagree_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<u64>,
}

impl VoteTally {
    /// Create a tally without pass votes
    pub fn new(agree_count: u64, disagree_count: u64) -> Self {
        Self {
            agree_count,
            disagree_count,
            pass_count: None,
        }
    }

    /// Set the pass count
    pub fn with_passes(mut self, pass_count: u64) -> Self {
        self.pass_count = Some(pass_count);
        self
    }

    /// Pass votes, zero when not recorded
    pub fn passes(&self) -> u64 {
        self.pass_count.unwrap_or(0)
    }

    /// Agree plus disagree votes, plus passes when `include_passes` is set
    ///
    /// Saturates at `u64::MAX`.
    pub fn total_count(&self, include_passes: bool) -> u64 {
        let base = self.agree_count.saturating_add(self.disagree_count);
        if include_passes {
            base.saturating_add(self.passes())
        } else {
            base
        }
    }

    /// Add another tally's counts to this one.
    ///
    /// The pass count stays absent only if both sides lack it. Counts
    /// saturate at `u64::MAX`.
    pub fn merge(&self, other: &VoteTally) -> VoteTally {
        let pass_count = match (self.pass_count, other.pass_count) {
            (None, None) => None,
            _ => Some(self.passes().saturating_add(other.passes())),
        };
        VoteTally {
            agree_count: self.agree_count.saturating_add(other.agree_count),
            disagree_count: self.disagree_count.saturating_add(other.disagree_count),
            pass_count,
        }
    }
}
