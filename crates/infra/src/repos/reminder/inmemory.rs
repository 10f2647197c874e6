use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use moyeora_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn create_if_absent(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        Ok(insert_if_absent(reminder, &self.reminders, |r| {
            r.is_same_triple(reminder)
        }))
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn list_for_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.user_id == *user_id);
        // Newest first, later inserts win ties
        reminders.reverse();
        reminders.sort_by(|r1, r2| r2.created.cmp(&r1.created));
        Ok(reminders)
    }

    async fn mark_read(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        Ok(update(reminder_id, &self.reminders, |r| r.is_read = true))
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.reminders, |r| r.event_id == *event_id))
    }
}
