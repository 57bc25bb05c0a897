use super::{UserCommandService, notifications};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserId, UserUpdate},
};

pub struct ApproveUserCommand {
    pub user_id: i64,
    pub approved: bool,
}

impl UserCommandService {
    pub async fn approve_user(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveUserCommand,
    ) -> ApplicationResult<UserDto> {
        actor.require("users", "approve")?;

        let target_id = UserId::new(command.user_id)?;
        let mut user = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        user.respond(command.approved, actor.id, self.clock.now())?;
        let updated = self.user_repo.update(UserUpdate::approval_of(&user)).await?;

        tracing::info!(
            user_id = updated.id.0,
            responder = actor.id.0,
            status = updated.status.as_str(),
            "registration request answered"
        );
        self.deliver(notifications::approval_decision(&updated, command.approved))
            .await;

        Ok(updated.into())
    }
}
