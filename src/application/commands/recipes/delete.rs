// src/application/commands/recipes/delete.rs
use super::{RecipeCommandService, fields::lookup_slug};
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteRecipeCommand {
    pub slug: String,
}

impl RecipeCommandService {
    pub async fn delete_recipe(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteRecipeCommand,
    ) -> ApplicationResult<()> {
        actor.require("recipes", "delete")?;

        let slug = lookup_slug(&command.slug)?;
        let recipe = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        self.write_repo.delete(recipe.id).await?;
        tracing::info!(recipe_id = recipe.id.0, slug = %recipe.slug, "recipe deleted");
        Ok(())
    }
}
