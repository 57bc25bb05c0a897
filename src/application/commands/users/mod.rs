mod approve;
mod login;
mod notifications;
mod password;
mod register;
mod reset;
mod service;

pub use approve::ApproveUserCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use password::MIN_PASSWORD_LENGTH;
pub use register::RegisterUserCommand;
pub use reset::{ForgotPasswordCommand, RESET_TOKEN_TTL_MINUTES, ResetPasswordCommand, hash_reset_token};
pub use service::UserCommandService;
