// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{
    ApprovalStatus, DisplayName, Email, PasswordHash, Role, UserId,
};
use chrono::{DateTime, Utc};

/// Hashed single-use password reset token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetToken {
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

impl ResetToken {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: ApprovalStatus,
    pub active: bool,
    pub responded_at: Option<DateTime<Utc>>,
    pub responded_by: Option<UserId>,
    pub reset_token: Option<ResetToken>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Records an administrator's decision on a pending registration.
    pub fn respond(
        &mut self,
        approved: bool,
        responder: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status != ApprovalStatus::Pending {
            return Err(DomainError::Validation(
                "user request already responded".into(),
            ));
        }
        if approved {
            self.status = ApprovalStatus::Approved;
            self.active = true;
        } else {
            self.status = ApprovalStatus::Rejected;
        }
        self.responded_at = Some(now);
        self.responded_by = Some(responder);
        Ok(())
    }

    /// Why this account may not sign in, if anything.
    pub fn sign_in_block(&self) -> Option<&'static str> {
        match self.status {
            ApprovalStatus::Pending => Some("account is still pending approval"),
            ApprovalStatus::Rejected => Some("account has been rejected"),
            ApprovalStatus::Approved if !self.active => Some("account is disabled"),
            ApprovalStatus::Approved => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub status: ApprovalStatus,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// A registration awaiting an administrator's decision.
    pub fn pending(
        name: DisplayName,
        email: Email,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            role,
            status: ApprovalStatus::Pending,
            active: false,
            created_at,
        }
    }

    /// The very first account: approved administrator, nobody to approve it.
    pub fn bootstrap_admin(
        name: DisplayName,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            role: Role::Admin,
            status: ApprovalStatus::Approved,
            active: true,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub status: Option<ApprovalStatus>,
    pub active: Option<bool>,
    pub responded_at: Option<DateTime<Utc>>,
    pub responded_by: Option<UserId>,
    pub password_hash: Option<PasswordHash>,
    /// `Some(None)` clears the stored token.
    pub reset_token: Option<Option<ResetToken>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            status: None,
            active: None,
            responded_at: None,
            responded_by: None,
            password_hash: None,
            reset_token: None,
        }
    }

    /// Carries the approval decision already applied to `user`.
    pub fn approval_of(user: &User) -> Self {
        Self {
            status: Some(user.status),
            active: Some(user.active),
            responded_at: user.responded_at,
            responded_by: user.responded_by,
            ..Self::new(user.id)
        }
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_reset_token(mut self, token: Option<ResetToken>) -> Self {
        self.reset_token = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_user() -> User {
        User {
            id: UserId::new(2).unwrap(),
            name: DisplayName::new("Sam").unwrap(),
            email: Email::new("sam@example.com").unwrap(),
            password_hash: PasswordHash::new("hash").unwrap(),
            role: Role::Public,
            status: ApprovalStatus::Pending,
            active: false,
            responded_at: None,
            responded_by: None,
            reset_token: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn approving_activates_account() {
        let mut user = pending_user();
        let now = Utc::now();
        user.respond(true, UserId::new(1).unwrap(), now).unwrap();
        assert_eq!(user.status, ApprovalStatus::Approved);
        assert!(user.active);
        assert_eq!(user.responded_at, Some(now));
        assert!(user.sign_in_block().is_none());
    }

    #[test]
    fn rejecting_keeps_account_inactive() {
        let mut user = pending_user();
        user.respond(false, UserId::new(1).unwrap(), Utc::now()).unwrap();
        assert_eq!(user.status, ApprovalStatus::Rejected);
        assert!(!user.active);
        assert_eq!(user.sign_in_block(), Some("account has been rejected"));
    }

    #[test]
    fn second_response_is_refused() {
        let mut user = pending_user();
        user.respond(true, UserId::new(1).unwrap(), Utc::now()).unwrap();
        assert!(user.respond(false, UserId::new(1).unwrap(), Utc::now()).is_err());
    }
}
