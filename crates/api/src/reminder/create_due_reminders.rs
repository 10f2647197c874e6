use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_admin_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::create_due_reminders::*;
use moyeora_domain::{NaiveDate, Reminder, ReminderBucket};
use moyeora_infra::MoyeoraContext;
use tracing::{error, info, warn};

pub async fn create_due_reminders_admin_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    protect_admin_route(&http_req, &ctx)?;

    let as_of = body
        .as_of
        .unwrap_or_else(|| ctx.sys.today(&ctx.config.timezone));
    let usecase = CreateDueRemindersUseCase { as_of };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(as_of, reminders)))
        .map_err(MoyeoraError::from)
}

/// One pass of the reminder scheduler.
///
/// For every upcoming event it checks whether `as_of` is exactly 7, 3 or 1
/// days before the event and, if so, creates a `Reminder` for every
/// interested user that does not already have one for that bucket. A bucket
/// whose day was missed is never caught up on.
///
/// Passes may overlap freely. Running a pass twice for the same `as_of`
/// creates nothing the second time because the reminder store only keeps
/// one `Reminder` per (user, event, bucket).
#[derive(Debug)]
pub struct CreateDueRemindersUseCase {
    /// The calendar date the pass runs for
    pub as_of: NaiveDate,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for MoyeoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateDueRemindersUseCase {
    /// The `Reminder`s created by this pass
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateDueReminders";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        let events = ctx
            .repos
            .events
            .list_upcoming(self.as_of)
            .await
            .map_err(|e| {
                error!("Unable to list upcoming events: {:?}", e);
                UseCaseError::StorageError
            })?;

        let mut created_reminders = Vec::new();
        for event in events {
            if let Err(e) = event.validate(self.as_of) {
                warn!("Skipping malformed event: {}. Error: {}", event.id, e);
                continue;
            }
            let bucket = match ReminderBucket::due_for(&event, self.as_of) {
                Some(bucket) => bucket,
                None => continue,
            };

            let mut user_ids = ctx
                .repos
                .interests
                .interested_users(&event.id)
                .await
                .map_err(|e| {
                    error!("Unable to resolve users interested in: {}: {:?}", event.id, e);
                    UseCaseError::StorageError
                })?
                .into_iter()
                .collect::<Vec<_>>();
            user_ids.sort();

            for user_id in user_ids {
                let reminder =
                    Reminder::new(user_id, event.id, bucket, ctx.sys.get_timestamp_millis());
                let created = ctx
                    .repos
                    .reminders
                    .create_if_absent(&reminder)
                    .await
                    .map_err(|e| {
                        error!("Unable to store reminder: {:?}. Error: {:?}", reminder, e);
                        UseCaseError::StorageError
                    })?;
                if created {
                    created_reminders.push(reminder);
                }
            }
        }

        info!(
            "Created {} reminders as of {}",
            created_reminders.len(),
            self.as_of
        );
        Ok(created_reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::auth::ADMIN_KEY_HEADER;
    use actix_web::{
        http::{header::ContentType, StatusCode},
        test, App,
    };
    use moyeora_domain::{Event, EventKind, InterestEdge, InterestKind, ID};
    use moyeora_infra::{DeleteResult, IReminderRepo};
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct TestContext {
        ctx: MoyeoraContext,
        event: Event,
        user_id: ID,
    }

    /// A contest on 2026-02-20 with one interested user
    async fn setup() -> TestContext {
        let ctx = MoyeoraContext::create_inmemory();
        let event = insert_event(&ctx, date(2026, 2, 20)).await;
        let user_id = ID::new();
        follow(&ctx, user_id, &event).await;

        TestContext {
            ctx,
            event,
            user_id,
        }
    }

    async fn insert_event(ctx: &MoyeoraContext, date: NaiveDate) -> Event {
        let event = Event {
            id: Default::default(),
            host_id: Default::default(),
            kind: EventKind::Contest,
            name: "전국 고교 수학 경시대회".into(),
            date,
            place: "서울과학고등학교".into(),
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    async fn follow(ctx: &MoyeoraContext, user_id: ID, event: &Event) {
        ctx.repos
            .interests
            .insert(&InterestEdge {
                user_id,
                event_id: event.id,
                kind: InterestKind::Follower,
                created: 0,
            })
            .await
            .unwrap();
    }

    async fn run(ctx: &MoyeoraContext, as_of: NaiveDate) -> Vec<Reminder> {
        let mut usecase = CreateDueRemindersUseCase { as_of };
        usecase.execute(ctx).await.unwrap()
    }

    async fn buckets_of(ctx: &MoyeoraContext, user_id: &ID, event: &Event) -> Vec<ReminderBucket> {
        let mut buckets = ctx
            .repos
            .reminders
            .list_for_user(user_id)
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.event_id == event.id)
            .map(|r| r.bucket)
            .collect::<Vec<_>>();
        buckets.sort();
        buckets
    }

    #[actix_web::test]
    async fn creates_seven_day_reminder() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        let created = run(&ctx, date(2026, 2, 13)).await;

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].user_id, user_id);
        assert_eq!(created[0].event_id, event.id);
        assert_eq!(created[0].bucket, ReminderBucket::SevenDays);
        assert!(!created[0].is_read);
    }

    #[actix_web::test]
    async fn rerunning_the_same_day_creates_nothing() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        assert_eq!(run(&ctx, date(2026, 2, 13)).await.len(), 1);
        assert!(run(&ctx, date(2026, 2, 13)).await.is_empty());

        assert_eq!(
            buckets_of(&ctx, &user_id, &event).await,
            vec![ReminderBucket::SevenDays]
        );
    }

    #[actix_web::test]
    async fn creates_only_the_exact_bucket() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        let created = run(&ctx, date(2026, 2, 17)).await;

        assert_eq!(created.len(), 1);
        assert_eq!(
            buckets_of(&ctx, &user_id, &event).await,
            vec![ReminderBucket::ThreeDays]
        );
    }

    #[actix_web::test]
    async fn does_not_catch_up_on_missed_buckets() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        // No pass on 2026-02-17 when the event was 3 days away
        assert_eq!(run(&ctx, date(2026, 2, 13)).await.len(), 1);
        assert_eq!(run(&ctx, date(2026, 2, 19)).await.len(), 1);

        assert_eq!(
            buckets_of(&ctx, &user_id, &event).await,
            vec![ReminderBucket::OneDay, ReminderBucket::SevenDays]
        );
    }

    #[actix_web::test]
    async fn creates_nothing_on_days_between_buckets() {
        let TestContext { ctx, .. } = setup().await;

        for day in [10, 14, 15, 16, 18, 20, 21] {
            assert!(run(&ctx, date(2026, 2, day)).await.is_empty());
        }
    }

    #[actix_web::test]
    async fn reminds_every_interested_user_once() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;
        let other_user_id = ID::new();
        follow(&ctx, other_user_id, &event).await;
        // Also participating does not make `user_id` get two reminders
        ctx.repos
            .interests
            .insert(&InterestEdge {
                user_id,
                event_id: event.id,
                kind: InterestKind::Participant,
                created: 0,
            })
            .await
            .unwrap();

        let created = run(&ctx, date(2026, 2, 19)).await;

        assert_eq!(created.len(), 2);
        assert_eq!(buckets_of(&ctx, &user_id, &event).await.len(), 1);
        assert_eq!(buckets_of(&ctx, &other_user_id, &event).await.len(), 1);
    }

    #[actix_web::test]
    async fn overlapping_passes_create_each_reminder_once() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        let (first, second) = futures::join!(
            execute(CreateDueRemindersUseCase { as_of: date(2026, 2, 13) }, &ctx),
            execute(CreateDueRemindersUseCase { as_of: date(2026, 2, 13) }, &ctx),
        );

        let created = first.unwrap().len() + second.unwrap().len();
        assert_eq!(created, 1);
        assert_eq!(buckets_of(&ctx, &user_id, &event).await.len(), 1);
    }

    #[actix_web::test]
    async fn skips_malformed_events() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;
        let mut malformed = insert_event(&ctx, date(2026, 2, 20)).await;
        malformed.name = "".into();
        ctx.repos.events.save(&malformed).await.unwrap();
        follow(&ctx, user_id, &malformed).await;

        let created = run(&ctx, date(2026, 2, 13)).await;

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].event_id, event.id);
    }

    struct UnreachableReminderRepo;

    #[async_trait::async_trait]
    impl IReminderRepo for UnreachableReminderRepo {
        async fn create_if_absent(&self, _reminder: &Reminder) -> anyhow::Result<bool> {
            Err(anyhow::Error::msg("Connection refused"))
        }
        async fn find(&self, _reminder_id: &ID) -> Option<Reminder> {
            None
        }
        async fn list_for_user(&self, _user_id: &ID) -> anyhow::Result<Vec<Reminder>> {
            Err(anyhow::Error::msg("Connection refused"))
        }
        async fn mark_read(&self, _reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
            Err(anyhow::Error::msg("Connection refused"))
        }
        async fn delete_by_event(&self, _event_id: &ID) -> anyhow::Result<DeleteResult> {
            Err(anyhow::Error::msg("Connection refused"))
        }
    }

    #[actix_web::test]
    async fn aborts_pass_when_store_is_unreachable() {
        let TestContext { mut ctx, .. } = setup().await;
        ctx.repos.reminders = Arc::new(UnreachableReminderRepo);

        let mut usecase = CreateDueRemindersUseCase {
            as_of: date(2026, 2, 13),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::StorageError)
        );
    }

    async fn post_run(ctx: MoyeoraContext, body: &'static str) -> StatusCode {
        let admin_key = ctx.config.admin_secret_code.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(crate::reminder::configure_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/reminders/run")
            .insert_header((ADMIN_KEY_HEADER, admin_key))
            .insert_header(ContentType::json())
            .set_payload(body)
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn run_route_rejects_malformed_as_of() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        let status = post_run(ctx.clone(), r#"{"asOf":"2026-02-31"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(buckets_of(&ctx, &user_id, &event).await.is_empty());
    }

    #[actix_web::test]
    async fn run_route_accepts_given_or_missing_as_of() {
        let TestContext {
            ctx,
            event,
            user_id,
        } = setup().await;

        assert_eq!(post_run(ctx.clone(), "{}").await, StatusCode::OK);
        assert_eq!(
            post_run(ctx.clone(), r#"{"asOf":"2026-02-13"}"#).await,
            StatusCode::OK
        );
        assert_eq!(
            buckets_of(&ctx, &user_id, &event).await,
            vec![ReminderBucket::SevenDays]
        );
    }
}
