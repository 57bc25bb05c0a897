// src/main.rs
use anyhow::Result;
use recipebox::application::{
    ports::{
        assistant::TextGenerator,
        mailer::Mailer,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use recipebox::config::AppConfig;
use recipebox::domain::{
    recipe::{RecipeReadRepository, RecipeWriteRepository},
    user::UserRepository,
};
use recipebox::infrastructure::{
    assistant::{DisabledTextGenerator, GeminiTextGenerator},
    database,
    mail::{LogMailer, ResendMailer},
    repositories::{
        PostgresRecipeReadRepository, PostgresRecipeWriteRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use recipebox::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let recipe_write_repo: Arc<dyn RecipeWriteRepository> =
        Arc::new(PostgresRecipeWriteRepository::new(pool.clone()));
    let recipe_read_repo: Arc<dyn RecipeReadRepository> =
        Arc::new(PostgresRecipeReadRepository::new(pool));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let mailer: Arc<dyn Mailer> = match &config.mail().resend_api_key {
        Some(key) => Arc::new(ResendMailer::new(key.clone(), config.mail().from.clone())?),
        None => {
            tracing::info!("RESEND_API_KEY not set; outgoing mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    let text_generator: Arc<dyn TextGenerator> = match &config.assistant().gemini_api_key {
        Some(key) => Arc::new(GeminiTextGenerator::new(
            key.clone(),
            config.assistant().model.clone(),
        )?),
        None => {
            tracing::warn!("GEMINI_API_KEY not set; assistant endpoints are disabled");
            Arc::new(DisabledTextGenerator)
        }
    };

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        recipe_write_repo,
        recipe_read_repo,
        password_hasher,
        token_manager,
        mailer,
        text_generator,
        clock,
        slugger,
        config.frontend_url(),
    ));

    let state = HttpState::new(services);
    let app = build_router_with_rate_limiter(
        state,
        config.allowed_origins(),
        config.rate_limit_enabled(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
