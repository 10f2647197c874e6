use crate::date::days_until;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The kinds of gatherings clubs can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Contest,
    Forum,
    CoResearch,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contest => "contest",
            Self::Forum => "forum",
            Self::CoResearch => "co-research",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Event kind: {0} is not one of contest, forum or co-research")]
pub struct InvalidEventKindError(pub String);

impl FromStr for EventKind {
    type Err = InvalidEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contest" => Ok(Self::Contest),
            "forum" => Ok(Self::Forum),
            "co-research" => Ok(Self::CoResearch),
            _ => Err(InvalidEventKindError(s.to_string())),
        }
    }
}

/// A contest, forum or co-research gathering hosted by a club member.
///
/// An `Event` only has a calendar `date`, there is no time of day attached to
/// it. Once the date has passed the `Event` is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    /// The user that created the `Event` and is allowed to edit it
    pub host_id: ID,
    pub kind: EventKind,
    pub name: String,
    pub date: NaiveDate,
    pub place: String,
    pub created: i64,
    pub updated: i64,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidEventError {
    #[error("The event name cannot be empty")]
    EmptyName,
    #[error("The event place cannot be empty")]
    EmptyPlace,
    #[error("The event date: {0} has already passed")]
    InThePast(NaiveDate),
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Event {
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        days_until(today, self.date)
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// Checks that the `Event` is well formed and has not already happened
    /// as of `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), InvalidEventError> {
        if self.name.trim().is_empty() {
            return Err(InvalidEventError::EmptyName);
        }
        if self.place.trim().is_empty() {
            return Err(InvalidEventError::EmptyPlace);
        }
        if self.is_past(today) {
            return Err(InvalidEventError::InThePast(self.date));
        }
        Ok(())
    }
}
