mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryReminderRepo;
use moyeora_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Stores the `Reminder` unless one for the same (user, event, bucket)
    /// already exists. Losing that race is not an error, it returns `false`.
    /// Stores that know about events also return `false` when the event is
    /// gone.
    async fn create_if_absent(&self, reminder: &Reminder) -> anyhow::Result<bool>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All `Reminder`s of the user, newest first
    async fn list_for_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    /// Returns the updated `Reminder`, `None` if it does not exist
    async fn mark_read(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult>;
}
