use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserListResponse},
        error::ApplicationResult,
    },
    domain::{
        pagination::{Page, PageMeta, PageRequest},
        user::ApprovalStatus,
    },
};

pub const PENDING_PAGE_SIZE: u32 = 10;

pub struct ListPendingUsersQuery {
    pub page: Option<String>,
}

impl UserQueryService {
    pub async fn list_pending_users(
        &self,
        actor: &AuthenticatedUser,
        query: ListPendingUsersQuery,
    ) -> ApplicationResult<UserListResponse> {
        actor.require("users", "read")?;

        let request = PageRequest::new(
            PageRequest::parse(query.page.as_deref(), None).page(),
            PENDING_PAGE_SIZE,
        );
        let (users, total) = self
            .user_repo
            .list_by_status(ApprovalStatus::Pending, request)
            .await?;

        Ok(Page::new(users, PageMeta::new(request, total)).into())
    }
}
