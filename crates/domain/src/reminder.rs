use crate::event::Event;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use thiserror::Error;

/// How many whole days before an `Event` a `Reminder` is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ReminderBucket {
    OneDay,
    ThreeDays,
    SevenDays,
}

impl ReminderBucket {
    pub const ALL: [ReminderBucket; 3] = [Self::SevenDays, Self::ThreeDays, Self::OneDay];

    pub fn days(&self) -> i64 {
        match self {
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::SevenDays => 7,
        }
    }

    /// The bucket that fires when an event is exactly `days_until` days away.
    ///
    /// Every other distance yields `None`, a bucket whose day was missed is
    /// never caught up on a later day.
    pub fn from_days_until(days_until: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.days() == days_until)
    }

    /// The bucket due for `event` as of `today`, if any
    pub fn due_for(event: &Event, today: NaiveDate) -> Option<Self> {
        Self::from_days_until(event.days_until(today))
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Reminder bucket: {0} is not one of 7, 3 or 1 days")]
pub struct InvalidReminderBucketError(pub i64);

impl TryFrom<i64> for ReminderBucket {
    type Error = InvalidReminderBucketError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::from_days_until(days).ok_or(InvalidReminderBucketError(days))
    }
}

impl From<ReminderBucket> for i64 {
    fn from(bucket: ReminderBucket) -> Self {
        bucket.days()
    }
}

/// A `Reminder` tells a user that an `Event` they care about is
/// `bucket` days away.
///
/// For a given (`user_id`, `event_id`, `bucket`) there is at most one
/// `Reminder`. The stores enforce this with a uniqueness constraint so that
/// concurrent scheduler runs cannot produce duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    pub bucket: ReminderBucket,
    pub created: i64,
    pub is_read: bool,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Reminder {
    pub fn new(user_id: ID, event_id: ID, bucket: ReminderBucket, created: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            event_id,
            bucket,
            created,
            is_read: false,
        }
    }

    /// Whether both `Reminder`s are for the same user, event and bucket
    pub fn is_same_triple(&self, other: &Reminder) -> bool {
        self.user_id == other.user_id
            && self.event_id == other.event_id
            && self.bucket == other.bucket
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::EventKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Valid date")
    }

    #[test]
    fn it_only_matches_exact_bucket_days() {
        assert_eq!(ReminderBucket::from_days_until(7), Some(ReminderBucket::SevenDays));
        assert_eq!(ReminderBucket::from_days_until(3), Some(ReminderBucket::ThreeDays));
        assert_eq!(ReminderBucket::from_days_until(1), Some(ReminderBucket::OneDay));
        for days in [-7, -1, 0, 2, 4, 5, 6, 8, 14, 30] {
            assert_eq!(ReminderBucket::from_days_until(days), None);
        }
    }

    #[test]
    fn it_finds_bucket_due_for_event() {
        let event = Event {
            id: Default::default(),
            host_id: Default::default(),
            kind: EventKind::Contest,
            name: "contest".into(),
            date: date(2026, 2, 20),
            place: "Seoul".into(),
            created: 0,
            updated: 0,
        };
        assert_eq!(
            ReminderBucket::due_for(&event, date(2026, 2, 13)),
            Some(ReminderBucket::SevenDays)
        );
        assert_eq!(
            ReminderBucket::due_for(&event, date(2026, 2, 17)),
            Some(ReminderBucket::ThreeDays)
        );
        assert_eq!(ReminderBucket::due_for(&event, date(2026, 2, 18)), None);
        assert_eq!(
            ReminderBucket::due_for(&event, date(2026, 2, 19)),
            Some(ReminderBucket::OneDay)
        );
        assert_eq!(ReminderBucket::due_for(&event, date(2026, 2, 20)), None);
    }

    #[test]
    fn it_converts_buckets_from_days() {
        assert_eq!(ReminderBucket::try_from(3), Ok(ReminderBucket::ThreeDays));
        assert_eq!(
            ReminderBucket::try_from(2),
            Err(InvalidReminderBucketError(2))
        );
        assert_eq!(i64::from(ReminderBucket::SevenDays), 7);
    }

    #[test]
    fn new_reminders_are_unread() {
        let user_id = ID::new();
        let event_id = ID::new();
        let r1 = Reminder::new(user_id, event_id, ReminderBucket::OneDay, 100);
        let r2 = Reminder::new(user_id, event_id, ReminderBucket::OneDay, 200);
        assert!(!r1.is_read);
        assert_ne!(r1.id, r2.id);
        assert!(r1.is_same_triple(&r2));

        let r3 = Reminder::new(user_id, event_id, ReminderBucket::ThreeDays, 100);
        assert!(!r1.is_same_triple(&r3));
    }
}
