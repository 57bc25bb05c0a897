// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{ApprovalStatus, Email, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    /// Fails with `DomainError::Conflict` when the email is already registered.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Inserts `new_user` only while the store holds no users at all.
    /// Returns `None` when another account already exists.
    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_reset_token_hash(&self, token_hash: &str) -> DomainResult<Option<User>>;

    /// Users in `status`, newest registration first, with the total count.
    async fn list_by_status(
        &self,
        status: ApprovalStatus,
        page: PageRequest,
    ) -> DomainResult<(Vec<User>, u64)>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;
}
