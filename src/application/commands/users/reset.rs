use super::{UserCommandService, notifications, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{Email, PasswordHash, ResetToken, UserUpdate},
};
use chrono::Duration;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

pub struct ForgotPasswordCommand {
    pub email: String,
}

pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
}

/// Only this digest is persisted; the raw token travels by mail.
pub fn hash_reset_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

fn fresh_reset_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

impl UserCommandService {
    /// Succeeds whether or not the address belongs to an account.
    pub async fn forgot_password(&self, command: ForgotPasswordCommand) -> ApplicationResult<()> {
        let email = Email::new(command.email)?;
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            tracing::debug!("password reset requested for unknown address");
            return Ok(());
        };

        let token = fresh_reset_token();
        let reset = ResetToken {
            token_hash: hash_reset_token(&token),
            expires_at: self.clock.now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
        };
        let user = self
            .user_repo
            .update(UserUpdate::new(user.id).with_reset_token(Some(reset)))
            .await?;

        let link = format!("{}/reset-password?token={token}", self.frontend_url);
        self.deliver(notifications::password_reset(&user, &link)).await;
        Ok(())
    }

    pub async fn reset_password(&self, command: ResetPasswordCommand) -> ApplicationResult<()> {
        validate_password(&command.password)?;
        let rejected = || ApplicationError::validation("reset token is invalid or has expired");

        let token = command.token.trim();
        if token.is_empty() {
            return Err(rejected());
        }
        let user = self
            .user_repo
            .find_by_reset_token_hash(&hash_reset_token(token))
            .await?
            .ok_or_else(rejected)?;

        let expired = user
            .reset_token
            .as_ref()
            .is_none_or(|reset| reset.is_expired(self.clock.now()));
        if expired {
            return Err(rejected());
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let update = UserUpdate::new(user.id)
            .with_password_hash(PasswordHash::new(hashed)?)
            .with_reset_token(None);
        self.user_repo.update(update).await?;
        tracing::info!(user_id = user.id.0, "password reset completed");
        Ok(())
    }
}
