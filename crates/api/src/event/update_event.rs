use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::update_event::*;
use moyeora_domain::{Event, EventKind, InvalidEventError, NaiveDate, ID};
use moyeora_infra::MoyeoraContext;

pub async fn update_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let user = protect_route(&http_req)?;

    let body = body.0;
    let usecase = UpdateEventUseCase {
        user_id: user.user_id,
        event_id: path_params.event_id,
        kind: body.kind,
        name: body.name,
        date: body.date,
        place: body.place,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
    pub kind: Option<EventKind>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotHost(ID),
    EventIsPast(NaiveDate),
    InvalidEvent(InvalidEventError),
    StorageError,
}

impl From<UseCaseError> for MoyeoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::NotHost(event_id) => Self::Forbidden(format!(
                "Only the host of the event with id: {}, can update it.",
                event_id
            )),
            UseCaseError::EventIsPast(date) => Self::Conflict(format!(
                "The event took place on {} and can no longer be changed.",
                date
            )),
            UseCaseError::InvalidEvent(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        let mut e = match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.host_id == self.user_id => event,
            Some(_) => return Err(UseCaseError::NotHost(self.event_id)),
            None => return Err(UseCaseError::NotFound(self.event_id)),
        };

        let today = ctx.sys.today(&ctx.config.timezone);
        if e.is_past(today) {
            return Err(UseCaseError::EventIsPast(e.date));
        }

        if let Some(kind) = self.kind {
            e.kind = kind;
        }
        if let Some(name) = &self.name {
            e.name = name.trim().to_string();
        }
        if let Some(date) = self.date {
            e.date = date;
        }
        if let Some(place) = &self.place {
            e.place = place.trim().to_string();
        }
        e.validate(today).map_err(UseCaseError::InvalidEvent)?;
        e.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }
}
