mod base;
mod event;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use event::EventClient;
pub use event::{CreateEventInput, UpdateEventInput};
pub use moyeora_api_structs::dtos::*;
pub use moyeora_domain::{EventKind, InterestKind, NaiveDate, ReminderBucket, ID};
use reminder::ReminderClient;
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use moyeora_api_structs::dtos::EventDTO as Event;
pub use moyeora_api_structs::dtos::ReminderDTO as Reminder;

/// Moyeora Server SDK
///
/// The SDK contains methods for interacting with the Moyeora server API.
/// Requests are anonymous, sent on behalf of a user or sent with the admin
/// key, depending on how the SDK was created.
#[derive(Clone)]
pub struct MoyeoraSDK {
    pub event: EventClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl MoyeoraSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        Self::from_base(BaseClient::new(address.into()))
    }

    pub fn for_user<T: Into<String>>(address: T, user_id: ID) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_user_id(user_id);
        Self::from_base(base)
    }

    pub fn for_admin<T: Into<String>, K: Into<String>>(address: T, admin_key: K) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_admin_key(admin_key.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let event = EventClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            event,
            reminder,
            status,
        }
    }
}
