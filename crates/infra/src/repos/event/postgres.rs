use super::IEventRepo;
use moyeora_domain::{Event, EventKind, NaiveDate, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use tracing::warn;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    host_uid: Uuid,
    kind: String,
    name: String,
    event_date: NaiveDate,
    place: String,
    created: i64,
    updated: i64,
}

impl TryFrom<EventRaw> for Event {
    type Error = anyhow::Error;

    fn try_from(e: EventRaw) -> Result<Self, Self::Error> {
        Ok(Event {
            id: e.event_uid.into(),
            host_id: e.host_uid.into(),
            kind: e.kind.parse::<EventKind>()?,
            name: e.name,
            date: e.event_date,
            place: e.place,
            created: e.created,
            updated: e.updated,
        })
    }
}

/// Rows with a kind this version does not understand are logged and skipped
fn into_events(rows: Vec<EventRaw>) -> Vec<Event> {
    rows.into_iter()
        .filter_map(|raw| {
            let event_uid = raw.event_uid;
            match Event::try_from(raw) {
                Ok(e) => Some(e),
                Err(e) => {
                    warn!("Skipping malformed event {}. Err: {:?}", event_uid, e);
                    None
                }
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events
            (event_uid, host_uid, kind, name, event_date, place, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(e.host_id.inner_ref())
        .bind(e.kind.as_str())
        .bind(&e.name)
        .bind(e.date)
        .bind(&e.place)
        .bind(e.created)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events SET
                host_uid = $2,
                kind = $3,
                name = $4,
                event_date = $5,
                place = $6,
                created = $7,
                updated = $8
            WHERE event_uid = $1
            "#,
        )
        .bind(e.id.inner_ref())
        .bind(e.host_id.inner_ref())
        .bind(e.kind.as_str())
        .bind(&e.name)
        .bind(e.date)
        .bind(&e.place)
        .bind(e.created)
        .bind(e.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        let raw = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;

        into_events(vec![raw]).pop()
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        let raw = sqlx::query_as::<_, EventRaw>(
            r#"
            DELETE FROM events AS e
            WHERE e.event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;

        into_events(vec![raw]).pop()
    }

    async fn list_upcoming(&self, as_of: NaiveDate) -> anyhow::Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events AS e
            WHERE e.event_date >= $1
            ORDER BY e.event_date
            "#,
        )
        .bind(as_of)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_events(rows))
    }
}
