use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::get_user_reminders::*;
use moyeora_domain::{Reminder, ID};
use moyeora_infra::MoyeoraContext;

pub async fn get_user_reminders_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let user = protect_route(&http_req)?;

    let usecase = GetUserRemindersUseCase {
        user_id: user.user_id,
        unread_only: query_params.unread_only.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.reminders, res.unread_count)))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct GetUserRemindersUseCase {
    pub user_id: ID,
    pub unread_only: bool,
}

#[derive(Debug, PartialEq)]
pub struct UseCaseResponse {
    /// Newest first
    pub reminders: Vec<Reminder>,
    pub unread_count: usize,
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
impl UseCase for GetUserRemindersUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUserReminders";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        let mut reminders = ctx
            .repos
            .reminders
            .list_for_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let unread_count = reminders.iter().filter(|r| !r.is_read).count();
        if self.unread_only {
            reminders.retain(|r| !r.is_read);
        }

        Ok(UseCaseResponse {
            reminders,
            unread_count,
        })
    }
}
