use crate::{
    reminder::create_due_reminders::CreateDueRemindersUseCase, shared::usecase::execute,
};
use actix_web::rt::time::sleep;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use moyeora_infra::MoyeoraContext;
use std::time::Duration;
use tracing::info;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Time left until the next `run_hour` o'clock in the given timezone. A run
/// hour that is right now counts as tomorrow's run.
pub fn get_start_delay(now_millis: i64, tz: &Tz, run_hour: u32) -> Duration {
    let now = match Utc.timestamp_millis_opt(now_millis).single() {
        Some(now) => now.with_timezone(tz),
        None => return DAY,
    };
    let run_at = |date: NaiveDate| -> Option<DateTime<Tz>> {
        let local = date.and_hms_opt(run_hour, 0, 0)?;
        tz.from_local_datetime(&local).earliest()
    };

    let today = now.date_naive();
    let next_run = match run_at(today) {
        Some(run) if run > now => Some(run),
        _ => today.succ_opt().and_then(run_at),
    };

    next_run
        .and_then(|run| (run - now).to_std().ok())
        .unwrap_or(DAY)
}

/// Runs a reminder scheduler pass every day at the configured hour.
///
/// The delay is computed again before every run, so the run stays at the
/// same local hour when the timezone changes its UTC offset.
pub fn start_reminders_job(ctx: MoyeoraContext) {
    actix_web::rt::spawn(async move {
        loop {
            let delay = get_start_delay(
                ctx.sys.get_timestamp_millis(),
                &ctx.config.timezone,
                ctx.config.reminder_run_hour,
            );
            info!(
                "Next reminders pass is in {} seconds, at {}:00 {}",
                delay.as_secs(),
                ctx.config.reminder_run_hour,
                ctx.config.timezone
            );

            sleep(delay).await;
            let context = ctx.clone();
            actix_web::rt::spawn(create_due_reminders(context));
        }
    });
}

async fn create_due_reminders(ctx: MoyeoraContext) {
    let as_of = ctx.sys.today(&ctx.config.timezone);
    let usecase = CreateDueRemindersUseCase { as_of };

    // Errors are logged by `execute` and the next tick runs the whole pass again
    let _ = execute(usecase, &ctx).await;
}
