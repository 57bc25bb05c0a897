// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{
        ForgotPasswordCommand, LoginUserCommand, RegisterUserCommand, ResetPasswordCommand,
    },
    dto::{LoginResponse, MessageResponse, UserDto, UserProfileDto},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Requested role; the account still waits for approval.
    pub role: Option<Role>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration recorded; pending approval unless it is the first account.", body = UserDto),
        (status = 400, description = "Invalid input.", body = ErrorBody),
        (status = 409, description = "Email already registered.", body = ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        role: payload.role,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token and user.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorBody),
        (status = 403, description = "Account pending, rejected or disabled.", body = ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Profile of the caller.", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Always succeeds for a well-formed address.", body = MessageResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn forgot_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .forgot_password(ForgotPasswordCommand {
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new(
        "if the account exists, a reset link has been sent",
    )))
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password replaced.", body = MessageResponse),
        (status = 400, description = "Token invalid or expired, or password too weak.", body = ErrorBody)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn reset_password(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .reset_password(ResetPasswordCommand {
            token: payload.token,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new("password has been reset")))
}
