// tests/support/mocks/mod.rs
//! In-memory stand-ins for every port and repository.

pub mod assistant;
pub mod mail;
pub mod recipe_repo;
pub mod security;
pub mod time;
pub mod user_repo;

pub use assistant::CannedTextGenerator;
pub use mail::{CapturingMailer, FailingMailer};
pub use recipe_repo::{InMemoryRecipeRepo, RacingRecipeRepo};
pub use security::{
    ADMIN_TOKEN, DummyTokenManager, PUBLIC_TOKEN, PrefixPasswordHasher, admin_actor, public_actor,
};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
