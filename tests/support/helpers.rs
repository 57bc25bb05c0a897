// tests/support/helpers.rs
use std::sync::Arc;

use super::builders::UserBuilder;
use super::mocks::{
    CannedTextGenerator, CapturingMailer, DummyTokenManager, FixedClock, InMemoryRecipeRepo,
    InMemoryUserRepo, PrefixPasswordHasher,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use recipebox::application::ports::{
    assistant::TextGenerator,
    mailer::Mailer,
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::SlugGenerator,
};
use recipebox::application::services::ApplicationServices;
use recipebox::domain::recipe::{NewRecipe, RecipeReadRepository, RecipeWriteRepository};
use recipebox::domain::user::UserRepository;
use recipebox::infrastructure::util::DefaultSlugGenerator;
use recipebox::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;

pub const FRONTEND_URL: &str = "http://localhost:5173";
pub const CANNED_REPLY: &str = "Quick, Vegan, vegan, Dinner , , Spicy, Asian";

/// Fully wired services over in-memory collaborators.
pub struct TestApp {
    pub recipes: Arc<InMemoryRecipeRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub mailer: Arc<CapturingMailer>,
    pub generator: Arc<CannedTextGenerator>,
    pub clock: Arc<FixedClock>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        let recipes = Arc::new(InMemoryRecipeRepo::default());
        Self::with_recipe_writer(Arc::clone(&recipes) as Arc<dyn RecipeWriteRepository>, recipes)
    }

    /// Routes recipe writes through `writer` while reads hit `recipes`.
    pub fn with_recipe_writer(
        writer: Arc<dyn RecipeWriteRepository>,
        recipes: Arc<InMemoryRecipeRepo>,
    ) -> Self {
        let mailer = Arc::new(CapturingMailer::default());
        Self::assemble(writer, recipes, Arc::clone(&mailer) as Arc<dyn Mailer>, mailer)
    }

    pub fn with_mailer(mailer: Arc<dyn Mailer>) -> Self {
        let recipes = Arc::new(InMemoryRecipeRepo::default());
        Self::assemble(
            Arc::clone(&recipes) as Arc<dyn RecipeWriteRepository>,
            recipes,
            mailer,
            Arc::new(CapturingMailer::default()),
        )
    }

    fn assemble(
        writer: Arc<dyn RecipeWriteRepository>,
        recipes: Arc<InMemoryRecipeRepo>,
        mailer: Arc<dyn Mailer>,
        capturing: Arc<CapturingMailer>,
    ) -> Self {
        let users = Arc::new(InMemoryUserRepo::default());
        let generator = Arc::new(CannedTextGenerator::new(CANNED_REPLY));
        let clock = Arc::new(FixedClock::default());

        let services = Arc::new(ApplicationServices::new(
            Arc::clone(&users) as Arc<dyn UserRepository>,
            writer,
            Arc::clone(&recipes) as Arc<dyn RecipeReadRepository>,
            Arc::new(PrefixPasswordHasher) as Arc<dyn PasswordHasher>,
            Arc::new(DummyTokenManager) as Arc<dyn TokenManager>,
            mailer,
            Arc::clone(&generator) as Arc<dyn TextGenerator>,
            Arc::clone(&clock) as Arc<dyn Clock>,
            Arc::new(DefaultSlugGenerator) as Arc<dyn SlugGenerator>,
            FRONTEND_URL,
        ));

        Self {
            recipes,
            users,
            mailer: capturing,
            generator,
            clock,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState::new(Arc::clone(&self.services));
        build_router_with_rate_limiter(state, &[FRONTEND_URL.to_string()], false)
    }

    pub async fn seed_recipe(&self, recipe: NewRecipe) {
        self.recipes.insert(recipe).await.expect("seed recipe");
    }

    /// Seeds an approved administrator (id 1) so later registrations stay pending.
    pub async fn seed_admin(&self) {
        self.users
            .insert(UserBuilder::new("admin@example.com").admin().build())
            .await
            .expect("seed admin");
    }

    pub async fn seed_user(&self, builder: UserBuilder) -> i64 {
        self.users.insert(builder.build()).await.expect("seed user").id.0
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts the `{error, message}` envelope, its status and its canonical reason.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message"
    );
    json
}
