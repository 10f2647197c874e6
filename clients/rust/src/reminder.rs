use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use moyeora_api_structs::*;
use moyeora_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// The reminders of the current user, newest first
    pub async fn list(&self, unread_only: bool) -> APIResponse<get_user_reminders::APIResponse> {
        self.base
            .get(
                format!("me/reminders?unreadOnly={}", unread_only),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_read(
        &self,
        reminder_id: ID,
    ) -> APIResponse<mark_reminder_read::APIResponse> {
        self.base
            .put(
                (),
                format!("me/reminders/{}/read", reminder_id),
                StatusCode::OK,
            )
            .await
    }

    /// Runs a scheduler pass. Requires the admin key.
    pub async fn run(
        &self,
        as_of: Option<NaiveDate>,
    ) -> APIResponse<create_due_reminders::APIResponse> {
        let body = create_due_reminders::RequestBody { as_of };
        self.base
            .post(body, "reminders/run".into(), StatusCode::OK)
            .await
    }
}
