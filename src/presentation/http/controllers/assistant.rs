// src/presentation/http/controllers/assistant.rs
use crate::application::{
    assistant::{ChatCommand, DescribeRecipeCommand, RecipeContext, SuggestTagsCommand},
    dto::{ChatMessageDto, ChatReplyDto, GeneratedDescriptionDto, GeneratedTagsDto},
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DescribeRequest {
    pub title: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SuggestTagsRequest {
    pub title: String,
    pub ingredients: Vec<String>,
    pub content: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessageDto>,
    pub recipe: RecipeContext,
}

#[utoipa::path(
    post,
    path = "/api/ai/generate-desc",
    request_body = DescribeRequest,
    responses(
        (status = 200, description = "Short description for the recipe title.", body = GeneratedDescriptionDto),
        (status = 400, description = "Title missing.", body = ErrorBody),
        (status = 500, description = "Text generation unavailable.", body = ErrorBody)
    ),
    security(()),
    tag = "Assistant"
)]
pub async fn generate_description(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<DescribeRequest>,
) -> HttpResult<Json<GeneratedDescriptionDto>> {
    state
        .services
        .assistant
        .describe(DescribeRecipeCommand {
            title: payload.title,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/ai/generate-tags",
    request_body = SuggestTagsRequest,
    responses(
        (status = 200, description = "Up to five lowercase tags.", body = GeneratedTagsDto),
        (status = 400, description = "Title, ingredients or content missing.", body = ErrorBody)
    ),
    security(()),
    tag = "Assistant"
)]
pub async fn generate_tags(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SuggestTagsRequest>,
) -> HttpResult<Json<GeneratedTagsDto>> {
    let command = SuggestTagsCommand {
        title: payload.title,
        ingredients: payload.ingredients,
        content: payload.content,
    };

    state
        .services
        .assistant
        .suggest_tags(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/ai/chatBot",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply.", body = ChatReplyDto),
        (status = 400, description = "Messages or recipe context missing.", body = ErrorBody)
    ),
    security(()),
    tag = "Assistant"
)]
pub async fn chat(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ChatRequest>,
) -> HttpResult<Json<ChatReplyDto>> {
    let command = ChatCommand {
        messages: payload.messages,
        recipe: payload.recipe,
    };

    state
        .services
        .assistant
        .chat(command)
        .await
        .into_http()
        .map(Json)
}
