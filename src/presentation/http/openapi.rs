// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::auth::forgot_password,
        crate::presentation::http::controllers::auth::reset_password,
        crate::presentation::http::controllers::users::list_pending_users,
        crate::presentation::http::controllers::users::approve_user,
        crate::presentation::http::controllers::recipes::list_recipes,
        crate::presentation::http::controllers::recipes::get_recipe_by_slug,
        crate::presentation::http::controllers::recipes::create_recipe,
        crate::presentation::http::controllers::recipes::update_recipe,
        crate::presentation::http::controllers::recipes::delete_recipe,
        crate::presentation::http::controllers::assistant::generate_description,
        crate::presentation::http::controllers::assistant::generate_tags,
        crate::presentation::http::controllers::assistant::chat
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::ForgotPasswordRequest,
            crate::presentation::http::controllers::auth::ResetPasswordRequest,
            crate::presentation::http::controllers::users::ApproveUserRequest,
            crate::presentation::http::controllers::recipes::CreateRecipeRequest,
            crate::presentation::http::controllers::recipes::UpdateRecipeRequest,
            crate::presentation::http::controllers::assistant::DescribeRequest,
            crate::presentation::http::controllers::assistant::SuggestTagsRequest,
            crate::presentation::http::controllers::assistant::ChatRequest,
            crate::application::assistant::RecipeContext,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::LoginResponse,
            crate::application::dto::MessageResponse,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::UserListResponse,
            crate::application::dto::CapabilityView,
            crate::application::dto::PaginationDto,
            crate::application::dto::RecipeDto,
            crate::application::dto::RecipeListResponse,
            crate::application::dto::ChatMessageDto,
            crate::application::dto::ChatReplyDto,
            crate::application::dto::GeneratedDescriptionDto,
            crate::application::dto::GeneratedTagsDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, sign-in and password reset"),
        (name = "Users", description = "Registration approval workflow"),
        (name = "Recipes", description = "Recipe catalogue"),
        (name = "Assistant", description = "Text generation helpers for recipe authors"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Recipebox API",
        description = "Recipe-sharing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push(DEFAULT_SERVER_URL.to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs`, Redoc at `/redoc` and the raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the OpenAPI document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
