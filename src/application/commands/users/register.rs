use super::{UserCommandService, notifications, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, Email, NewUser, PasswordHash, Role},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Files a registration request. The very first account becomes an
    /// approved administrator; every later one waits for approval.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = DisplayName::new(command.name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let is_first = self.user_repo.count().await? == 0;
        if !is_first && self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let created_at = self.clock.now();

        if is_first {
            let bootstrap = NewUser::bootstrap_admin(
                name.clone(),
                email.clone(),
                password_hash.clone(),
                created_at,
            );
            // Another registration may have claimed the empty store first.
            if let Some(user) = self.user_repo.insert_if_empty(bootstrap).await? {
                tracing::info!(user_id = user.id.0, "bootstrap administrator registered");
                return Ok(user.into());
            }
        }

        let new_user = NewUser::pending(
            name,
            email,
            password_hash,
            command.role.unwrap_or_default(),
            created_at,
        );
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = user.id.0, role = %user.role, "registration request received");
        self.deliver(notifications::registration_received(&user)).await;

        Ok(user.into())
    }
}
