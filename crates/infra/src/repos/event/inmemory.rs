use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use moyeora_domain::{Event, NaiveDate, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        save(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }

    async fn list_upcoming(&self, as_of: NaiveDate) -> anyhow::Result<Vec<Event>> {
        let mut events = find_by(&self.events, |e| e.date >= as_of);
        events.sort_by_key(|e| e.date);
        Ok(events)
    }
}
