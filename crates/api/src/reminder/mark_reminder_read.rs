use crate::error::MoyeoraError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use moyeora_api_structs::mark_reminder_read::*;
use moyeora_domain::{Reminder, ID};
use moyeora_infra::MoyeoraContext;

pub async fn mark_reminder_read_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<MoyeoraContext>,
) -> Result<HttpResponse, MoyeoraError> {
    let user = protect_route(&http_req)?;

    let usecase = MarkReminderReadUseCase {
        user_id: user.user_id,
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(MoyeoraError::from)
}

#[derive(Debug)]
pub struct MarkReminderReadUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for MoyeoraError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkReminderReadUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkReminderRead";

    async fn execute(&mut self, ctx: &MoyeoraContext) -> Result<Self::Response, Self::Error> {
        let reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) if reminder.user_id == self.user_id => reminder,
            _ => return Err(UseCaseError::NotFound(self.reminder_id)),
        };
        if reminder.is_read {
            return Ok(reminder);
        }

        ctx.repos
            .reminders
            .mark_read(&reminder.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.reminder_id))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use moyeora_domain::ReminderBucket;

    #[actix_web::test]
    async fn marks_own_reminder_read() {
        let ctx = MoyeoraContext::create_inmemory();
        let reminder = Reminder::new(ID::new(), ID::new(), ReminderBucket::OneDay, 0);
        ctx.repos.reminders.create_if_absent(&reminder).await.unwrap();

        let mut usecase = MarkReminderReadUseCase {
            user_id: reminder.user_id,
            reminder_id: reminder.id,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.is_read);

        // Marking it again is fine
        let res = usecase.execute(&ctx).await.unwrap();
        assert!(res.is_read);
        assert_eq!(ctx.repos.reminders.find(&reminder.id).await, Some(res));
    }

    #[actix_web::test]
    async fn cannot_mark_other_users_reminder() {
        let ctx = MoyeoraContext::create_inmemory();
        let reminder = Reminder::new(ID::new(), ID::new(), ReminderBucket::OneDay, 0);
        ctx.repos.reminders.create_if_absent(&reminder).await.unwrap();

        let mut usecase = MarkReminderReadUseCase {
            user_id: ID::new(),
            reminder_id: reminder.id,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(reminder.id))
        );
        assert_eq!(ctx.repos.reminders.find(&reminder.id).await, Some(reminder));
    }
}
