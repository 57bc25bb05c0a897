// src/infrastructure/security/claims.rs
//! Rebuilds an [`AuthenticatedUser`] from the facts of a verified token.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);
    build_authenticated_user(ctx)
}

fn build_authenticated_user(ctx: ClaimsContext) -> ApplicationResult<AuthenticatedUser> {
    let missing = |what: &str| ApplicationError::unauthorized(format!("token is missing {what}"));

    let user_id = ctx.user_id.ok_or_else(|| missing("user id"))?;
    let name = ctx.name.ok_or_else(|| missing("user name"))?;
    let role = ctx.role.ok_or_else(|| missing("role"))?;
    let issued_at = ctx.issued_at.ok_or_else(|| missing("issued_at"))?;
    let expires_at = ctx.expires_at.ok_or_else(|| missing("expires_at"))?;

    let id = UserId::new(user_id)
        .map_err(|_| ApplicationError::unauthorized("token carries an invalid user id"))?;

    // Tokens only ever narrow what the role grants.
    let granted = role.default_capabilities();
    let capabilities = ctx
        .capabilities
        .into_iter()
        .filter(|cap| granted.contains(cap))
        .collect();

    Ok(AuthenticatedUser {
        id,
        name,
        role,
        capabilities,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    capabilities: HashSet<Capability>,
}

fn date(predicate: &Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply_predicate(&fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.name = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("issued_at", _) => self.issued_at = date(predicate),
            ("expires_at", _) => self.expires_at = date(predicate),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.capabilities
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }
}
