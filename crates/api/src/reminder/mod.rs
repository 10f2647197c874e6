pub mod create_due_reminders;
mod get_user_reminders;
mod mark_reminder_read;

use actix_web::web;
use create_due_reminders::create_due_reminders_admin_controller;
use get_user_reminders::get_user_reminders_controller;
use mark_reminder_read::mark_reminder_read_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/me/reminders",
        web::get().to(get_user_reminders_controller),
    );
    cfg.route(
        "/me/reminders/{reminder_id}/read",
        web::put().to(mark_reminder_read_controller),
    );
    cfg.route(
        "/reminders/run",
        web::post().to(create_due_reminders_admin_controller),
    );
}
