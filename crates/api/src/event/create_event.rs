use super::subscribers::AddHostInterestOnEventCreated;
use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::create_event::*;
use moyeora_domain::{Event, EventKind, InvalidEventError, NaiveDate, ID};
use moyeora_infra::MoyeoraContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let user = protect_route(&http_req)?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        host_id: user.user_id,
        kind: body.kind,
        name: body.name,
        date: body.date,
        place: body.place,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub host_id: ID,
    pub kind: EventKind,
    pub name: String,
    pub date: NaiveDate,
    pub place: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEvent(InvalidEventError),
    StorageError,
}

impl From<UseCaseError> for MoyeoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEvent(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let e = Event {
            id: Default::default(),
            host_id: self.host_id,
            kind: self.kind,
            name: self.name.trim().to_string(),
            date: self.date,
            place: self.place.trim().to_string(),
            created: now,
            updated: now,
        };

        let today = ctx.sys.today(&ctx.config.timezone);
        e.validate(today).map_err(UseCaseError::InvalidEvent)?;

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(AddHostInterestOnEventCreated)]
    }
}
