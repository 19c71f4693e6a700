//! Vote info: a single tally or one tally per opinion group

use super::tally::VoteTally;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tallies keyed by opinion-group name
pub type GroupVoteTallies = BTreeMap<String, VoteTally>;

/// Votes attached to a comment
///
/// The variant decides which policy may score the comment: the grouped
/// policy needs [`VoteInfo::Groups`], the majority policy accepts either and
/// works on the pooled totals.
///
/// On the wire both shapes are plain JSON objects. An object whose first key
/// is a tally field (`agreeCount`, `disagreeCount`, `passCount`) is a single
/// tally; anything else is a map of group name to tally, and a malformed
/// group tally is reported with the group's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VoteInfo {
    /// Ungrouped totals
    Tally(VoteTally),
    /// Per opinion-group tallies
    Groups(GroupVoteTallies),
}

impl VoteInfo {
    /// Build grouped vote info from `(name, tally)` pairs
    pub fn groups<I, N>(groups: I) -> Self
    where
        I: IntoIterator<Item = (N, VoteTally)>,
        N: Into<String>,
    {
        VoteInfo::Groups(
            groups
                .into_iter()
                .map(|(name, tally)| (name.into(), tally))
                .collect(),
        )
    }

    /// Whether per-group tallies are present
    pub fn is_grouped(&self) -> bool {
        matches!(self, VoteInfo::Groups(_))
    }

    /// Whether at least one group tally is present
    pub fn has_groups(&self) -> bool {
        self.as_groups().is_some_and(|groups| !groups.is_empty())
    }

    /// The per-group tallies, if any
    pub fn as_groups(&self) -> Option<&GroupVoteTallies> {
        match self {
            VoteInfo::Groups(groups) => Some(groups),
            VoteInfo::Tally(_) => None,
        }
    }

    /// Raw counts summed across every group
    pub fn pooled(&self) -> VoteTally {
        match self {
            VoteInfo::Tally(tally) => *tally,
            VoteInfo::Groups(groups) => groups
                .values()
                .fold(VoteTally::default(), |acc, tally| acc.merge(tally)),
        }
    }

    /// Total votes across all groups, saturating at `u64::MAX`
    pub fn total_count(&self, include_passes: bool) -> u64 {
        match self {
            VoteInfo::Tally(tally) => tally.total_count(include_passes),
            VoteInfo::Groups(groups) => groups.values().fold(0u64, |acc, tally| {
                acc.saturating_add(tally.total_count(include_passes))
            }),
        }
    }
}

const TALLY_FIELDS: &[&str] = &["agreeCount", "disagreeCount", "passCount"];

impl<'de> Deserialize<'de> for VoteInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VoteInfoVisitor)
    }
}

struct VoteInfoVisitor;

impl<'de> Visitor<'de> for VoteInfoVisitor {
    type Value = VoteInfo;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a vote tally or a map of group name to vote tally")
    }

    fn visit_map<A>(self, mut map: A) -> Result<VoteInfo, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(first) = map.next_key::<String>()? else {
            return Ok(VoteInfo::Groups(GroupVoteTallies::new()));
        };
        if TALLY_FIELDS.contains(&first.as_str()) {
            read_tally(first, &mut map).map(VoteInfo::Tally)
        } else {
            read_groups(first, &mut map).map(VoteInfo::Groups)
        }
    }
}

fn read_tally<'de, A>(first: String, map: &mut A) -> Result<VoteTally, A::Error>
where
    A: MapAccess<'de>,
{
    let mut agree_count = None;
    let mut disagree_count = None;
    let mut pass_count = None;

    let mut key = Some(first);
    while let Some(field) = key {
        match field.as_str() {
            "agreeCount" => agree_count = Some(map.next_value::<u64>()?),
            "disagreeCount" => disagree_count = Some(map.next_value::<u64>()?),
            "passCount" => pass_count = map.next_value::<Option<u64>>()?,
            _ => {
                map.next_value::<IgnoredAny>()?;
            }
        }
        key = map.next_key()?;
    }

    Ok(VoteTally {
        agree_count: agree_count
            .ok_or_else(|| <A::Error as de::Error>::missing_field("agreeCount"))?,
        disagree_count: disagree_count
            .ok_or_else(|| <A::Error as de::Error>::missing_field("disagreeCount"))?,
        pass_count,
    })
}

fn read_groups<'de, A>(first: String, map: &mut A) -> Result<GroupVoteTallies, A::Error>
where
    A: MapAccess<'de>,
{
    let mut groups = GroupVoteTallies::new();
    let mut key = Some(first);
    while let Some(name) = key {
        let tally = map
            .next_value::<VoteTally>()
            .map_err(|e| <A::Error as de::Error>::custom(format!("group '{name}': {e}")))?;
        groups.insert(name, tally);
        key = map.next_key()?;
    }
    Ok(groups)
}

impl From<VoteTally> for VoteInfo {
    fn from(tally: VoteTally) -> Self {
        VoteInfo::Tally(tally)
    }
}

impl From<GroupVoteTallies> for VoteInfo {
    fn from(groups: GroupVoteTallies) -> Self {
        VoteInfo::Groups(groups)
    }
}
