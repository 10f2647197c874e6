use crate::error::MoyeoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use moyeora_api_structs::get_upcoming_events::*;
use moyeora_domain::{Event, NaiveDate};
use moyeora_infra::MoyeoraContext;

pub async fn get_upcoming_events_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let as_of = query_params
        .as_of
        .unwrap_or_else(|| ctx.sys.today(&ctx.config.timezone));
    let usecase = GetUpcomingEventsUseCase { as_of };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(as_of, events)))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct GetUpcomingEventsUseCase {
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
impl UseCase for GetUpcomingEventsUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingEvents";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .list_upcoming(self.as_of)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
