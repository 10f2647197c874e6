use crate::error::MoyeoraError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use moyeora_api_structs::get_event::*;
use moyeora_domain::{Event, ID};
use moyeora_infra::MoyeoraContext;

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for MoyeoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find(&self.event_id)
            .await
            .ok_or(UseCaseError::NotFound(self.event_id))
    }
}
