use super::{
    add_event_interest::AddEventInterestUseCase, create_event::CreateEventUseCase,
    delete_event::DeleteEventUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use moyeora_domain::{Event, InterestKind};
use moyeora_infra::MoyeoraContext;
use tracing::error;

pub struct AddHostInterestOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for AddHostInterestOnEventCreated {
    async fn notify(&self, e: &Event, ctx: &MoyeoraContext) {
        let add_host_interest = AddEventInterestUseCase {
            user_id: e.host_id,
            event_id: e.id,
            kind: InterestKind::Host,
        };

        // Sideeffect, ignore result
        let _ = execute(add_host_interest, ctx).await;
    }
}

pub struct DeleteInterestsOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for DeleteInterestsOnEventDeleted {
    async fn notify(&self, e: &Event, ctx: &MoyeoraContext) {
        if let Err(err) = ctx.repos.interests.delete_by_event(&e.id).await {
            error!(
                "Unable to delete interests of deleted event: {}. Error: {:?}",
                e.id, err
            );
        }
    }
}

pub struct DeleteRemindersOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for DeleteRemindersOnEventDeleted {
    async fn notify(&self, e: &Event, ctx: &MoyeoraContext) {
        if let Err(err) = ctx.repos.reminders.delete_by_event(&e.id).await {
            error!(
                "Unable to delete reminders of deleted event: {}. Error: {:?}",
                e.id, err
            );
        }
    }
}
