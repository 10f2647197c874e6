use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use moyeora_api_structs::*;
use moyeora_domain::{EventKind, InterestKind, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub kind: EventKind,
    pub name: String,
    pub date: NaiveDate,
    pub place: String,
}

#[derive(Default)]
pub struct UpdateEventInput {
    pub event_id: ID,
    pub kind: Option<EventKind>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            kind: input.kind,
            name: input.name,
            date: input.date,
            place: input.place,
        };
        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let body = update_event::RequestBody {
            kind: input.kind,
            name: input.name,
            date: input.date,
            place: input.place,
        };
        self.base
            .put(body, format!("events/{}", input.event_id), StatusCode::OK)
            .await
    }

    /// Requires the admin key
    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    /// Events on or after `as_of`, today when `None`
    pub async fn upcoming(
        &self,
        as_of: Option<NaiveDate>,
    ) -> APIResponse<get_upcoming_events::APIResponse> {
        let path = match as_of {
            Some(as_of) => format!("events/upcoming?asOf={}", as_of),
            None => "events/upcoming".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn add_interest(
        &self,
        event_id: ID,
        kind: InterestKind,
    ) -> APIResponse<add_event_interest::APIResponse> {
        let body = add_event_interest::RequestBody { kind };
        self.base
            .post(body, format!("events/{}/interests", event_id), StatusCode::OK)
            .await
    }

    pub async fn remove_interest(
        &self,
        event_id: ID,
        kind: InterestKind,
    ) -> APIResponse<remove_event_interest::APIResponse> {
        self.base
            .delete(
                format!("events/{}/interests/{}", event_id, kind),
                StatusCode::OK,
            )
            .await
    }
}
