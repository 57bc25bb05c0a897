// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{assistant, auth, recipes, users},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Full application router. The per-IP limiter needs `ConnectInfo`, so
/// in-process callers without a socket pass `rate_limit = false`.
pub fn build_router_with_rate_limiter(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: bool,
) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api_routes());

    if rate_limit {
        match rate_limit_layer() {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!("rate limiter configuration rejected; serving without it"),
        }
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::profile))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/users/pending", get(users::list_pending_users))
        .route("/api/users/approve", post(users::approve_user))
        .route(
            "/api/posts",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/api/posts/{slug}",
            get(recipes::get_recipe_by_slug)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route("/api/ai/generate-desc", post(assistant::generate_description))
        .route("/api/ai/generate-tags", post(assistant::generate_tags))
        .route("/api/ai/chatBot", post(assistant::chat))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
