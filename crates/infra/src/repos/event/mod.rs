mod inmemory;
mod postgres;

pub use inmemory::InMemoryEventRepo;
use moyeora_domain::{Event, NaiveDate, ID};
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    async fn save(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    async fn delete(&self, event_id: &ID) -> Option<Event>;
    /// Events taking place on or after `as_of`, earliest first
    async fn list_upcoming(&self, as_of: NaiveDate) -> anyhow::Result<Vec<Event>>;
}
