// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

use super::claims::parse_claims;

/// Issues Ed25519-signed Biscuit bearer tokens carrying the user's identity,
/// role and capabilities, with validity enforced by embedded time checks.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.name.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r"
        user({uid}, {uname});
        role({urole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        ",
    );

    let mut capabilities: Vec<_> = subject.capabilities.iter().collect();
    capabilities.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for (i, cap) in capabilities.into_iter().enumerate() {
        code.push_str(&format!("right({{res{i}}}, {{act{i}}});\n"));
        params.insert(format!("res{i}"), cap.resource.clone().into());
        params.insert(format!("act{i}"), cap.action.clone().into());
    }

    (code, params)
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|d| d.num_seconds())
        .unwrap_or(i64::MAX)
        .max(0)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let serialized = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token: serialized,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let unauthorized = |err: biscuit_auth::error::Token| {
            tracing::debug!(error = %err, "bearer token rejected");
            ApplicationError::unauthorized("invalid or expired token")
        };

        let biscuit = Biscuit::from_base64(token, self.public).map_err(unauthorized)?;

        // Token checks (validity window) run here; the policy only demands an identity.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($id, $name)")
            .map_err(unauthorized)?
            .build(&biscuit)
            .map_err(unauthorized)?;

        authorizer.authorize().map_err(unauthorized)?;

        let (facts, _, _, _) = authorizer.dump();
        parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    fn manager() -> BiscuitTokenManager {
        let key = KeyPair::new().private().to_bytes_hex();
        BiscuitTokenManager::new(&key, Duration::from_secs(3600)).unwrap()
    }

    fn subject(role: Role) -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(7).unwrap(),
            name: "Chef \"Quote\"".into(),
            role,
            capabilities: role.default_capabilities(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates_with_capabilities() {
        let manager = manager();
        let issued = manager.issue(subject(Role::Admin)).await.unwrap();
        assert_eq!(issued.expires_in, 3600);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, UserId::new(7).unwrap());
        assert_eq!(user.name, "Chef \"Quote\"");
        assert_eq!(user.role, Role::Admin);
        assert!(user.has_capability("users", "approve"));
        assert!(user.has_capability("recipes", "delete"));
    }

    #[tokio::test]
    async fn token_from_another_key_is_rejected() {
        let issued = manager().issue(subject(Role::Public)).await.unwrap();
        let err = manager().authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let err = manager().authenticate("not-a-token").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
