use super::IInterestRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use moyeora_domain::{InterestEdge, InterestKind, ID};
use std::collections::HashSet;

pub struct InMemoryInterestRepo {
    edges: std::sync::Mutex<Vec<InterestEdge>>,
}

impl InMemoryInterestRepo {
    pub fn new() -> Self {
        Self {
            edges: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IInterestRepo for InMemoryInterestRepo {
    async fn insert(&self, edge: &InterestEdge) -> anyhow::Result<bool> {
        Ok(insert_if_absent(edge, &self.edges, |e| e.is_same_edge(edge)))
    }

    async fn delete(
        &self,
        user_id: &ID,
        event_id: &ID,
        kind: InterestKind,
    ) -> anyhow::Result<bool> {
        let res = delete_by(&self.edges, |e| {
            e.user_id == *user_id && e.event_id == *event_id && e.kind == kind
        });
        Ok(res.deleted_count > 0)
    }

    async fn interested_users(&self, event_id: &ID) -> anyhow::Result<HashSet<ID>> {
        Ok(find_by(&self.edges, |e| e.event_id == *event_id)
            .into_iter()
            .map(|e| e.user_id)
            .collect())
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.edges, |e| e.event_id == *event_id))
    }
}
