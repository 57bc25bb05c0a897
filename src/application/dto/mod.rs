pub mod assistant;
pub mod auth;
pub mod pagination;
pub mod recipes;
pub mod users;

pub use assistant::{ChatMessageDto, ChatReplyDto, GeneratedDescriptionDto, GeneratedTagsDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResponse, MessageResponse, TokenSubject};
pub use pagination::PaginationDto;
pub use recipes::{RecipeDto, RecipeListResponse};
pub use users::{CapabilityView, UserDto, UserListResponse, UserProfileDto};
