use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Why a user cares about an `Event`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestKind {
    /// The user hosts the event
    Host,
    /// The user applied to or was approved for the event
    Participant,
    /// The user follows the event or the school hosting it
    Follower,
}

impl InterestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Participant => "participant",
            Self::Follower => "follower",
        }
    }
}

impl Display for InterestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Interest kind: {0} is not one of host, participant or follower")]
pub struct InvalidInterestKindError(pub String);

impl FromStr for InterestKind {
    type Err = InvalidInterestKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(Self::Host),
            "participant" => Ok(Self::Participant),
            "follower" => Ok(Self::Follower),
            _ => Err(InvalidInterestKindError(s.to_string())),
        }
    }
}

/// Records that a user should be reminded about an `Event`.
///
/// There is at most one edge per (`user_id`, `event_id`, `kind`). A user can
/// have several edges to the same event, e.g. both host and follower, but is
/// still only one interested user for that event.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestEdge {
    pub user_id: ID,
    pub event_id: ID,
    pub kind: InterestKind,
    pub created: i64,
}

impl InterestEdge {
    pub fn is_same_edge(&self, other: &InterestEdge) -> bool {
        self.user_id == other.user_id && self.event_id == other.event_id && self.kind == other.kind
    }
}
