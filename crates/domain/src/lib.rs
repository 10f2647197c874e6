mod date;
mod event;
mod interest;
mod reminder;
mod shared;

pub use chrono::NaiveDate;
pub use date::days_until;
pub use event::{Event, EventKind, InvalidEventError, InvalidEventKindError};
pub use interest::{InterestEdge, InterestKind, InvalidInterestKindError};
pub use reminder::{InvalidReminderBucketError, Reminder, ReminderBucket};
pub use shared::entity::{Entity, InvalidIDError, ID};
