// src/application/commands/recipes/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::recipe::{RecipeReadRepository, RecipeWriteRepository, services::RecipeSlugService},
};

/// Attempts per write before a slug race is reported as a failure.
pub const MAX_SLUG_ATTEMPTS: usize = 3;

pub struct RecipeCommandService {
    pub(super) write_repo: Arc<dyn RecipeWriteRepository>,
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
    pub(super) slug_service: Arc<RecipeSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecipeCommandService {
    pub fn new(
        write_repo: Arc<dyn RecipeWriteRepository>,
        read_repo: Arc<dyn RecipeReadRepository>,
        slug_service: Arc<RecipeSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }
}
