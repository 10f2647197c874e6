use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::remove_event_interest::*;
use moyeora_domain::{InterestKind, ID};
use moyeora_infra::MoyeoraContext;

pub async fn remove_event_interest_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let user = protect_route(&http_req)?;

    let usecase = RemoveEventInterestUseCase {
        user_id: user.user_id,
        event_id: path_params.event_id,
        kind: path_params.kind,
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted| HttpResponse::Ok().json(APIResponse { deleted }))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct RemoveEventInterestUseCase {
    pub user_id: ID,
    pub event_id: ID,
    pub kind: InterestKind,
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
impl UseCase for RemoveEventInterestUseCase {
    /// Whether an interest was removed
    type Response = bool;

    type Error = UseCaseError;

    const NAME: &'static str = "RemoveEventInterest";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .interests
            .delete(&self.user_id, &self.event_id, self.kind)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
