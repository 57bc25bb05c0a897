mod pending;
mod profile;
mod service;

pub use pending::{ListPendingUsersQuery, PENDING_PAGE_SIZE};
pub use service::UserQueryService;
