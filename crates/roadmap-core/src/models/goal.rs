//! Goal model definition and related functionality.

use std::str::FromStr;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Plan;

/// A persisted goal: the user's original request plus its generated plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Opaque identifier assigned by the store
    #[serde(rename = "_id")]
    pub id: String,

    /// Opaque owner id supplied by the identity provider
    pub user_id: String,

    /// The free-text goal the plan was generated from
    pub query: String,

    /// The plan attached to this goal
    pub result: Plan,

    /// Creation time exactly as the store reported it
    #[serde(default)]
    pub timestamp: String,

    /// Fields the client does not interpret, kept so a full replace sends
    /// them back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Goal {
    /// Parsed creation time.
    ///
    /// Accepts RFC 3339 instants and offset-less ISO date-times, the latter
    /// read as UTC. Returns `None` for anything else.
    pub fn created_at(&self) -> Option<Timestamp> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse a store timestamp, falling back to a civil date-time in UTC.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts);
    }
    raw.parse::<DateTime>()
        .ok()
        .and_then(|dt| dt.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

/// Ordering a front end may apply to the goal history.
///
/// The client itself returns goals in store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently created first
    #[default]
    Newest,
    /// Oldest first
    Oldest,
}

impl SortOrder {
    /// Sort `goals` in place by creation time. The sort is stable; goals
    /// whose timestamp cannot be parsed sort as the oldest.
    pub fn apply(self, goals: &mut [Goal]) {
        match self {
            SortOrder::Oldest => goals.sort_by_key(Goal::created_at),
            SortOrder::Newest => {
                goals.sort_by_key(|goal| std::cmp::Reverse(goal.created_at()));
            }
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}
