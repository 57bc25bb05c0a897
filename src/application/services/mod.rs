// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        assistant::AssistantService,
        commands::{recipes::RecipeCommandService, users::UserCommandService},
        ports::{
            assistant::TextGenerator,
            mailer::Mailer,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{recipes::RecipeQueryService, users::UserQueryService},
    },
    domain::{
        recipe::{RecipeReadRepository, RecipeWriteRepository, services::RecipeSlugService},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub recipe_commands: Arc<RecipeCommandService>,
    pub recipe_queries: Arc<RecipeQueryService>,
    pub assistant: Arc<AssistantService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        recipe_write_repo: Arc<dyn RecipeWriteRepository>,
        recipe_read_repo: Arc<dyn RecipeReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        mailer: Arc<dyn Mailer>,
        text_generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        frontend_url: impl Into<String>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            mailer,
            Arc::clone(&clock),
            frontend_url,
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(RecipeSlugService::new(
            Arc::clone(&recipe_read_repo),
            slugger,
        ));

        let recipe_commands = Arc::new(RecipeCommandService::new(
            recipe_write_repo,
            Arc::clone(&recipe_read_repo),
            slug_service,
            clock,
        ));
        let recipe_queries = Arc::new(RecipeQueryService::new(recipe_read_repo));

        let assistant = Arc::new(AssistantService::new(text_generator));

        Self {
            user_commands,
            user_queries,
            recipe_commands,
            recipe_queries,
            assistant,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

}
