// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use recipebox::domain::errors::{DomainError, DomainResult};
use recipebox::domain::pagination::PageRequest;
use recipebox::domain::user::{
    ApprovalStatus, Email, NewUser, User, UserId, UserRepository, UserUpdate,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    stale_empty_count: AtomicBool,
}

impl InMemoryUserRepo {
    /// Makes `count` report an empty store, as seen by a registration that
    /// read the count just before a concurrent one landed.
    pub fn report_stale_empty_count(&self) {
        self.stale_empty_count.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn by_email(&self, email: &str) -> Option<User> {
        self.all().into_iter().find(|u| u.email.as_str() == email)
    }

    fn push(users: &mut Vec<User>, new_user: NewUser) -> DomainResult<User> {
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            status: new_user.status,
            active: new_user.active,
            responded_at: None,
            responded_by: None,
            reset_token: None,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        if self.stale_empty_count.load(Ordering::SeqCst) {
            return Ok(0);
        }
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        Self::push(&mut users, new_user)
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        if !users.is_empty() {
            return Ok(None);
        }
        Self::push(&mut users, new_user).map(Some)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.all().into_iter().find(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.all().into_iter().find(|u| &u.email == email))
    }

    async fn find_by_reset_token_hash(&self, token_hash: &str) -> DomainResult<Option<User>> {
        Ok(self.all().into_iter().find(|u| {
            u.reset_token
                .as_ref()
                .is_some_and(|t| t.token_hash == token_hash)
        }))
    }

    async fn list_by_status(
        &self,
        status: ApprovalStatus,
        page: PageRequest,
    ) -> DomainResult<(Vec<User>, u64)> {
        let mut matching: Vec<User> = self
            .all()
            .into_iter()
            .filter(|u| u.status == status)
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((items, total))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(status) = update.status {
            user.status = status;
        }
        if let Some(active) = update.active {
            user.active = active;
        }
        if update.responded_at.is_some() {
            user.responded_at = update.responded_at;
        }
        if update.responded_by.is_some() {
            user.responded_by = update.responded_by;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        if let Some(token) = update.reset_token {
            user.reset_token = token;
        }
        Ok(user.clone())
    }
}
