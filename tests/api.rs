mod helpers;

use helpers::setup::{spawn_app, TestApp};
use moyeora_sdk::{
    CreateEventInput, Event, EventKind, InterestKind, NaiveDate, ReminderBucket, StatusCode,
    UpdateEventInput, ID,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn contest_input(date: NaiveDate) -> CreateEventInput {
    CreateEventInput {
        kind: EventKind::Contest,
        name: "전국 고교 수학 경시대회".into(),
        date,
        place: "서울과학고등학교".into(),
    }
}

async fn create_contest(app: &TestApp, host_id: ID) -> Event {
    app.user_sdk(host_id)
        .event
        .create(contest_input(date(2026, 2, 20)))
        .await
        .expect("To create event")
        .event
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_create_and_get_event() {
    let (app, sdk) = spawn_app().await;
    let host_id = ID::new();

    let event = create_contest(&app, host_id).await;
    assert_eq!(event.host_id, host_id);
    assert_eq!(event.date, date(2026, 2, 20));

    let res = sdk.event.get(event.id).await.expect("To get event");
    assert_eq!(res.event, event);

    let res = sdk.event.get(ID::new()).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));
}

#[actix_web::test]
async fn test_create_event_requires_user() {
    let (_, sdk) = spawn_app().await;

    let res = sdk.event.create(contest_input(date(2026, 2, 20))).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));
}

#[actix_web::test]
async fn test_rejects_past_event() {
    let (app, _) = spawn_app().await;

    let res = app
        .user_sdk(ID::new())
        .event
        .create(contest_input(date(2026, 2, 9)))
        .await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));
}

#[actix_web::test]
async fn test_only_host_updates_event() {
    let (app, _) = spawn_app().await;
    let host_id = ID::new();
    let event = create_contest(&app, host_id).await;

    let res = app
        .user_sdk(ID::new())
        .event
        .update(UpdateEventInput {
            event_id: event.id,
            place: Some("부산".into()),
            ..Default::default()
        })
        .await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::FORBIDDEN));

    let res = app
        .user_sdk(host_id)
        .event
        .update(UpdateEventInput {
            event_id: event.id,
            place: Some("부산".into()),
            ..Default::default()
        })
        .await
        .expect("Host to update event");
    assert_eq!(res.event.place, "부산");
    assert_eq!(res.event.name, event.name);
}

#[actix_web::test]
async fn test_upcoming_events() {
    let (app, sdk) = spawn_app().await;
    let event = create_contest(&app, ID::new()).await;

    let res = sdk.event.upcoming(None).await.expect("To list events");
    assert_eq!(res.as_of, date(2026, 2, 10));
    assert!(res.events.contains(&event));

    let res = sdk
        .event
        .upcoming(Some(date(2026, 2, 21)))
        .await
        .expect("To list events");
    assert!(!res.events.contains(&event));
}

#[actix_web::test]
async fn test_delete_event_requires_admin() {
    let (app, sdk) = spawn_app().await;
    let host_id = ID::new();
    let event = create_contest(&app, host_id).await;

    let res = app.user_sdk(host_id).event.delete(event.id).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    let res = app
        .admin_sdk()
        .event
        .delete(event.id)
        .await
        .expect("Admin to delete event");
    assert_eq!(res.event.id, event.id);

    let res = sdk.event.get(event.id).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));
}

#[actix_web::test]
async fn test_interests() {
    let (app, _) = spawn_app().await;
    let event = create_contest(&app, ID::new()).await;
    let user = app.user_sdk(ID::new());

    let res = user
        .event
        .add_interest(event.id, InterestKind::Follower)
        .await
        .expect("To follow event");
    assert!(res.created);
    let res = user
        .event
        .add_interest(event.id, InterestKind::Follower)
        .await
        .expect("To follow event");
    assert!(!res.created);

    let res = user.event.add_interest(event.id, InterestKind::Host).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::FORBIDDEN));

    let res = user.event.add_interest(ID::new(), InterestKind::Follower).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));

    let res = user
        .event
        .remove_interest(event.id, InterestKind::Follower)
        .await
        .expect("To unfollow event");
    assert!(res.deleted);
    let res = user
        .event
        .remove_interest(event.id, InterestKind::Follower)
        .await
        .expect("To unfollow event");
    assert!(!res.deleted);
}

#[actix_web::test]
async fn test_reminders_flow() {
    let (app, _) = spawn_app().await;
    let host_id = ID::new();
    let follower_id = ID::new();
    let event = create_contest(&app, host_id).await;
    let follower = app.user_sdk(follower_id);
    follower
        .event
        .add_interest(event.id, InterestKind::Follower)
        .await
        .expect("To follow event");
    let admin = app.admin_sdk();

    // Seven days before, the host and the follower are reminded
    let res = admin
        .reminder
        .run(Some(date(2026, 2, 13)))
        .await
        .expect("To run scheduler");
    assert_eq!(res.as_of, date(2026, 2, 13));
    assert_eq!(res.reminders.len(), 2);
    assert!(res
        .reminders
        .iter()
        .all(|r| r.bucket == ReminderBucket::SevenDays && r.event_id == event.id));

    // Running again the same day creates nothing
    let res = admin
        .reminder
        .run(Some(date(2026, 2, 13)))
        .await
        .expect("To run scheduler");
    assert!(res.reminders.is_empty());

    let res = follower.reminder.list(false).await.expect("To list reminders");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.unread_count, 1);
    let reminder = res.reminders[0].clone();
    assert_eq!(reminder.user_id, follower_id);
    assert!(!reminder.is_read);

    let res = follower
        .reminder
        .mark_read(reminder.id)
        .await
        .expect("To mark reminder read");
    assert!(res.reminder.is_read);

    // The host cannot see or mark the reminders of the follower
    let res = app.user_sdk(host_id).reminder.mark_read(reminder.id).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));

    // 2026-02-17 is skipped, so there is no three day reminder
    admin
        .reminder
        .run(Some(date(2026, 2, 19)))
        .await
        .expect("To run scheduler");

    let res = follower.reminder.list(false).await.expect("To list reminders");
    let buckets = res.reminders.iter().map(|r| r.bucket).collect::<Vec<_>>();
    assert_eq!(buckets.len(), 2);
    assert!(buckets.contains(&ReminderBucket::OneDay));
    assert!(buckets.contains(&ReminderBucket::SevenDays));
    assert_eq!(res.unread_count, 1);

    let res = follower.reminder.list(true).await.expect("To list reminders");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.reminders[0].bucket, ReminderBucket::OneDay);
}

#[actix_web::test]
async fn test_run_reminders_requires_admin() {
    let (app, sdk) = spawn_app().await;

    let res = sdk.reminder.run(None).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    let res = app.user_sdk(ID::new()).reminder.run(None).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    // Defaults to today
    let res = app
        .admin_sdk()
        .reminder
        .run(None)
        .await
        .expect("To run scheduler");
    assert_eq!(res.as_of, date(2026, 2, 10));
}

#[actix_web::test]
async fn test_reminders_require_user() {
    let (_, sdk) = spawn_app().await;

    let res = sdk.reminder.list(false).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));
}
