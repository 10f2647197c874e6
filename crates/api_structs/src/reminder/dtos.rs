use moyeora_domain::{Reminder, ReminderBucket, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    /// Days before the event, one of 7, 3 or 1
    pub bucket: ReminderBucket,
    pub created: i64,
    pub is_read: bool,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            user_id: reminder.user_id,
            event_id: reminder.event_id,
            bucket: reminder.bucket,
            created: reminder.created,
            is_read: reminder.is_read,
        }
    }
}
