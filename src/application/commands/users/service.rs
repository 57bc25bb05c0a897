use std::sync::Arc;

use crate::application::ports::{
    mailer::{Mailer, OutgoingMail},
    security::{PasswordHasher, TokenManager},
    time::Clock,
};
use crate::domain::user::UserRepository;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) clock: Arc<dyn Clock>,
    /// Base of links placed in outgoing mail.
    pub(super) frontend_url: String,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            mailer,
            clock,
            frontend_url: frontend_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Delivery problems are logged and swallowed; they never fail the caller.
    pub(super) async fn deliver(&self, mail: OutgoingMail) {
        let to = mail.to.clone();
        let subject = mail.subject.clone();
        if let Err(err) = self.mailer.send(mail).await {
            tracing::warn!(error = %err, %to, %subject, "mail delivery failed");
        }
    }
}
