// src/presentation/http/controllers/recipes.rs
use crate::application::{
    commands::recipes::{CreateRecipeCommand, DeleteRecipeCommand, UpdateRecipeCommand},
    dto::{MessageResponse, RecipeDto, RecipeListResponse},
    queries::recipes::{GetRecipeBySlugQuery, ListRecipesQuery},
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Raw listing parameters. Every value is optional and malformed values fall
/// back to their defaults instead of failing the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipeListParams {
    /// Case-insensitive substring over title, description and tags.
    pub search: Option<String>,
    /// A category name, or `all`.
    pub category: Option<String>,
    /// Comma-separated tags; a recipe matches when it carries any of them.
    pub tags: Option<String>,
    /// `newest` (default), `oldest`, `az` or `za`.
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub time: Option<i32>,
    pub difficulty: Option<String>,
    pub servings: Option<i32>,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    /// URLs of already-hosted images.
    pub images: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub time: Option<i32>,
    pub difficulty: Option<String>,
    pub servings: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub images: Option<Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(RecipeListParams),
    responses(
        (status = 200, description = "One page of recipes.", body = RecipeListResponse)
    ),
    security(()),
    tag = "Recipes"
)]
pub async fn list_recipes(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RecipeListParams>,
) -> HttpResult<Json<RecipeListResponse>> {
    let query = ListRecipesQuery {
        search: params.search,
        category: params.category,
        tags: params.tags,
        sort: params.sort,
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .recipe_queries
        .list_recipes(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Recipe slug")),
    responses(
        (status = 200, description = "Recipe.", body = RecipeDto),
        (status = 404, description = "No recipe carries this slug.", body = ErrorBody)
    ),
    security(()),
    tag = "Recipes"
)]
pub async fn get_recipe_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<RecipeDto>> {
    state
        .services
        .recipe_queries
        .get_recipe_by_slug(GetRecipeBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created.", body = RecipeDto),
        (status = 400, description = "Invalid recipe.", body = ErrorBody),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody),
        (status = 403, description = "Caller may not create recipes.", body = ErrorBody)
    ),
    tag = "Recipes"
)]
pub async fn create_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateRecipeRequest>,
) -> HttpResult<(StatusCode, Json<RecipeDto>)> {
    let command = CreateRecipeCommand {
        title: payload.title,
        description: payload.description,
        content: payload.content,
        category: payload.category,
        time: payload.time,
        difficulty: payload.difficulty,
        servings: payload.servings,
        tags: payload.tags,
        ingredients: payload.ingredients,
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        images: payload.images,
    };

    let recipe = state
        .services
        .recipe_commands
        .create_recipe(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    put,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Current recipe slug")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe; the slug changes only with the title.", body = RecipeDto),
        (status = 404, description = "No recipe carries this slug.", body = ErrorBody),
        (status = 409, description = "Concurrent modification.", body = ErrorBody)
    ),
    tag = "Recipes"
)]
pub async fn update_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateRecipeRequest>,
) -> HttpResult<Json<RecipeDto>> {
    let command = UpdateRecipeCommand {
        slug,
        title: payload.title,
        description: payload.description,
        content: payload.content,
        category: payload.category,
        time: payload.time,
        difficulty: payload.difficulty,
        servings: payload.servings,
        tags: payload.tags,
        ingredients: payload.ingredients,
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        images: payload.images,
    };

    state
        .services
        .recipe_commands
        .update_recipe(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Recipe slug")),
    responses(
        (status = 200, description = "Recipe deleted.", body = MessageResponse),
        (status = 404, description = "No recipe carries this slug.", body = ErrorBody)
    ),
    tag = "Recipes"
)]
pub async fn delete_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .recipe_commands
        .delete_recipe(&user, DeleteRecipeCommand { slug })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new("recipe deleted")))
}
