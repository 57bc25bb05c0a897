// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use recipebox::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use recipebox::domain::user::{Role, UserId};

pub const ADMIN_TOKEN: &str = "admin-token";
pub const PUBLIC_TOKEN: &str = "public-token";

fn actor(id: i64, name: &str, role: Role, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        name: name.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Administrator with id 1, the first account in every seeded store.
pub fn admin_actor() -> AuthenticatedUser {
    actor(1, "admin", Role::Admin, super::time::fixed_now())
}

pub fn public_actor() -> AuthenticatedUser {
    actor(2, "visitor", Role::Public, super::time::fixed_now())
}

/// Accepts the two fixed test tokens and issues `token-for-<id>`.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", subject.user_id.0),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(admin_actor()),
            PUBLIC_TOKEN => Ok(public_actor()),
            _ => Err(ApplicationError::unauthorized("invalid or expired token")),
        }
    }
}

/// Stores `hashed:<password>` so tests can check what was persisted.
#[derive(Clone, Debug, Default)]
pub struct PrefixPasswordHasher;

#[async_trait]
impl PasswordHasher for PrefixPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
