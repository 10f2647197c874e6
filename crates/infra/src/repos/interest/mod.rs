mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryInterestRepo;
use moyeora_domain::{InterestEdge, InterestKind, ID};
pub use postgres::PostgresInterestRepo;
use std::collections::HashSet;

#[async_trait::async_trait]
pub trait IInterestRepo: Send + Sync {
    /// Stores the edge unless the same (user, event, kind) edge exists.
    /// Returns whether a new edge was stored.
    async fn insert(&self, edge: &InterestEdge) -> anyhow::Result<bool>;
    /// Returns whether an edge was removed
    async fn delete(&self, user_id: &ID, event_id: &ID, kind: InterestKind)
        -> anyhow::Result<bool>;
    /// Every user with at least one edge to the event
    async fn interested_users(&self, event_id: &ID) -> anyhow::Result<HashSet<ID>>;
    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult>;
}
