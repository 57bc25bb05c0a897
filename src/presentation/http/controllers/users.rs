// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::ApproveUserCommand,
    dto::{UserDto, UserListResponse},
    queries::users::ListPendingUsersQuery,
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PendingUsersParams {
    pub page: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApproveUserRequest {
    pub user_id: i64,
    #[serde(default)]
    pub approved: bool,
}

#[utoipa::path(
    get,
    path = "/api/users/pending",
    params(PendingUsersParams),
    responses(
        (status = 200, description = "Pending registrations, newest first.", body = UserListResponse),
        (status = 403, description = "Caller may not read users.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn list_pending_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PendingUsersParams>,
) -> HttpResult<Json<UserListResponse>> {
    state
        .services
        .user_queries
        .list_pending_users(&user, ListPendingUsersQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/users/approve",
    request_body = ApproveUserRequest,
    responses(
        (status = 200, description = "Decision recorded.", body = UserDto),
        (status = 400, description = "Request already answered.", body = ErrorBody),
        (status = 404, description = "User not found.", body = ErrorBody)
    ),
    tag = "Users"
)]
pub async fn approve_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ApproveUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = ApproveUserCommand {
        user_id: payload.user_id,
        approved: payload.approved,
    };

    state
        .services
        .user_commands
        .approve_user(&user, command)
        .await
        .into_http()
        .map(Json)
}
