use super::IInterestRepo;
use crate::repos::shared::repo::DeleteResult;
use moyeora_domain::{InterestEdge, InterestKind, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::collections::HashSet;

pub struct PostgresInterestRepo {
    pool: PgPool,
}

impl PostgresInterestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InterestedUserRaw {
    user_uid: Uuid,
}

#[async_trait::async_trait]
impl IInterestRepo for PostgresInterestRepo {
    async fn insert(&self, edge: &InterestEdge) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO event_interests
            (user_uid, event_uid, kind, created)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (user_uid, event_uid, kind) DO NOTHING
            "#,
        )
        .bind(edge.user_id.inner_ref())
        .bind(edge.event_id.inner_ref())
        .bind(edge.kind.as_str())
        .bind(edge.created)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn delete(
        &self,
        user_id: &ID,
        event_id: &ID,
        kind: InterestKind,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            DELETE FROM event_interests AS i
            WHERE i.user_uid = $1 AND i.event_uid = $2 AND i.kind = $3
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(event_id.inner_ref())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn interested_users(&self, event_id: &ID) -> anyhow::Result<HashSet<ID>> {
        let rows = sqlx::query_as::<_, InterestedUserRaw>(
            r#"
            SELECT DISTINCT i.user_uid FROM event_interests AS i
            WHERE i.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.user_uid.into()).collect())
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM event_interests AS i
            WHERE i.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
