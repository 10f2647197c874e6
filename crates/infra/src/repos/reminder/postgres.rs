use super::IReminderRepo;
use crate::repos::shared::repo::DeleteResult;
use moyeora_domain::{Reminder, ReminderBucket, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    user_uid: Uuid,
    event_uid: Uuid,
    bucket: i16,
    created: i64,
    is_read: bool,
}

impl TryFrom<ReminderRaw> for Reminder {
    type Error = anyhow::Error;

    fn try_from(r: ReminderRaw) -> Result<Self, Self::Error> {
        Ok(Reminder {
            id: r.reminder_uid.into(),
            user_id: r.user_uid.into(),
            event_id: r.event_uid.into(),
            bucket: ReminderBucket::try_from(i64::from(r.bucket))?,
            created: r.created,
            is_read: r.is_read,
        })
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn create_if_absent(&self, reminder: &Reminder) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, user_uid, event_uid, bucket, created, is_read)
            VALUES($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_uid, event_uid, bucket) DO NOTHING
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.user_id.inner_ref())
        .bind(reminder.event_id.inner_ref())
        .bind(reminder.bucket.days() as i16)
        .bind(reminder.created)
        .bind(reminder.is_read)
        .execute(&self.pool)
        .await;

        match res {
            Ok(res) => Ok(res.rows_affected() > 0),
            // Any other unique index rejecting the row means it is already there
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            // The event was deleted after the pass listed it
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let raw = sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()??;

        Reminder::try_from(raw).ok()
    }

    async fn list_for_user(&self, user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.user_uid = $1
            ORDER BY r.created DESC, r.seq DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Reminder::try_from)
        .collect()
    }

    async fn mark_read(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            UPDATE reminders
                SET is_read = true
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?
        .map(Reminder::try_from)
        .transpose()
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminders AS r
            WHERE r.event_uid = $1
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
