use crate::dtos::ReminderDTO;
use chrono::NaiveDate;
use moyeora_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

pub mod create_due_reminders {
    use super::*;

    #[derive(Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Run as if today was this date. Defaults to today in the
        /// configured timezone.
        #[serde(default)]
        pub as_of: Option<NaiveDate>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub as_of: NaiveDate,
        /// Only the reminders created by this run
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(as_of: NaiveDate, reminders: Vec<Reminder>) -> Self {
            Self {
                as_of,
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod get_user_reminders {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub unread_only: Option<bool>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
        pub unread_count: usize,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>, unread_count: usize) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
                unread_count,
            }
        }
    }
}

pub mod mark_reminder_read {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder) -> Self {
            Self {
                reminder: ReminderDTO::new(reminder),
            }
        }
    }
}
