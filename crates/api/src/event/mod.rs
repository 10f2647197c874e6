mod add_event_interest;
mod create_event;
mod delete_event;
mod get_event;
mod get_upcoming_events;
mod remove_event_interest;
mod subscribers;
mod update_event;

use actix_web::web;
use add_event_interest::add_event_interest_controller;
use create_event::create_event_controller;
use delete_event::delete_event_admin_controller;
use get_event::get_event_controller;
use get_upcoming_events::get_upcoming_events_controller;
use remove_event_interest::remove_event_interest_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_controller));
    // Registered before `/events/{event_id}` so that it is not parsed as an id
    cfg.route(
        "/events/upcoming",
        web::get().to(get_upcoming_events_controller),
    );

    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route("/events/{event_id}", web::put().to(update_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_admin_controller),
    );

    cfg.route(
        "/events/{event_id}/interests",
        web::post().to(add_event_interest_controller),
    );
    cfg.route(
        "/events/{event_id}/interests/{kind}",
        web::delete().to(remove_event_interest_controller),
    );
}
