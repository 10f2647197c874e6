use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::add_event_interest::*;
use moyeora_domain::{InterestEdge, InterestKind, ID};
use moyeora_infra::MoyeoraContext;

pub async fn add_event_interest_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let user = protect_route(&http_req)?;

    let usecase = AddEventInterestUseCase {
        user_id: user.user_id,
        event_id: path_params.event_id,
        kind: body.kind,
    };

    execute(usecase, &ctx)
        .await
        .map(|created| HttpResponse::Ok().json(APIResponse { created }))
        .map_err(MoyeoraError::from)
}

/// Makes the user interested in the event, so that they will get reminders
/// for it
#[derive(Debug)]
pub struct AddEventInterestUseCase {
    pub user_id: ID,
    pub event_id: ID,
    pub kind: InterestKind,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotHost(ID),
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
                "Only the host of the event with id: {}, can be registered as its host.",
                event_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddEventInterestUseCase {
    /// Whether a new interest was stored
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "AddEventInterest";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        let event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => return Err(UseCaseError::NotFound(self.event_id)),
        };
        if self.kind == InterestKind::Host && event.host_id != self.user_id {
            return Err(UseCaseError::NotHost(self.event_id));
        }

        let edge = InterestEdge {
            user_id: self.user_id,
            event_id: self.event_id,
            kind: self.kind,
            created: ctx.sys.get_timestamp_millis(),
        };
        ctx.repos
            .interests
            .insert(&edge)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
