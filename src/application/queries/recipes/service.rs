use std::sync::Arc;

use crate::domain::recipe::RecipeReadRepository;

pub struct RecipeQueryService {
    pub(super) read_repo: Arc<dyn RecipeReadRepository>,
}

impl RecipeQueryService {
    pub fn new(read_repo: Arc<dyn RecipeReadRepository>) -> Self {
        Self { read_repo }
    }
}
