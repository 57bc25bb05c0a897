use super::RecipeQueryService;
use crate::{
    application::{
        dto::RecipeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::recipe::RecipeSlug,
};

pub struct GetRecipeBySlugQuery {
    pub slug: String,
}

impl RecipeQueryService {
    pub async fn get_recipe_by_slug(
        &self,
        query: GetRecipeBySlugQuery,
    ) -> ApplicationResult<RecipeDto> {
        let not_found = || ApplicationError::not_found("recipe not found");
        let slug = RecipeSlug::new(query.slug).map_err(|_| not_found())?;
        let recipe = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        Ok(recipe.into())
    }
}
