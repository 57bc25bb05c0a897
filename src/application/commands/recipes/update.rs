// src/application/commands/recipes/update.rs
use super::{
    MAX_SLUG_ATTEMPTS, RecipeCommandService,
    fields::{lookup_slug, parse_category, parse_difficulty},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        recipe::{Recipe, RecipeDetails, RecipeTitle, RecipeUpdate},
    },
};
use chrono::{DateTime, Utc};

/// Partial update addressed by the recipe's current slug. `None` keeps the stored value.
#[derive(Default)]
pub struct UpdateRecipeCommand {
    pub slug: String,
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

impl UpdateRecipeCommand {
    fn merge_details(&mut self, current: &RecipeDetails) -> ApplicationResult<RecipeDetails> {
        let mut details = current.clone();
        if let Some(description) = self.description.take() {
            details.description = description.trim().to_string();
        }
        if let Some(content) = self.content.take() {
            details.content = content.trim().to_string();
        }
        if let Some(category) = self.category.as_deref() {
            details.category = parse_category(category)?;
        }
        if let Some(difficulty) = self.difficulty.as_deref() {
            details.difficulty = parse_difficulty(difficulty)?;
        }
        if let Some(time) = self.time {
            details.time_minutes = time;
        }
        if let Some(servings) = self.servings {
            details.servings = servings;
        }
        if let Some(tags) = self.tags.take() {
            details.tags = tags;
        }
        if let Some(ingredients) = self.ingredients.take() {
            details.ingredients = ingredients;
        }
        if self.prep_time.is_some() {
            details.prep_time = self.prep_time;
        }
        if self.cook_time.is_some() {
            details.cook_time = self.cook_time;
        }
        if let Some(images) = self.images.take() {
            details.images = images;
        }
        Ok(details.normalized())
    }
}

impl RecipeCommandService {
    pub async fn update_recipe(
        &self,
        actor: &AuthenticatedUser,
        mut command: UpdateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        actor.require("recipes", "update")?;

        let slug = lookup_slug(&command.slug)?;
        let mut recipe = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("recipe not found"))?;

        // Only a title that actually changes triggers re-slugging.
        let retitle = command
            .title
            .take()
            .map(RecipeTitle::new)
            .transpose()?
            .filter(|title| recipe.title_differs(title));

        let details = command.merge_details(&recipe.details)?;
        let details_changed = details != recipe.details;

        if retitle.is_none() && !details_changed {
            return Ok(recipe.into());
        }

        let original_updated_at = recipe.updated_at;
        let now = self.clock.now();
        if details_changed {
            recipe.set_details(details, now)?;
        }

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let update = self
                .build_update(&recipe, retitle.as_ref(), details_changed, original_updated_at, now)
                .await?;

            match self.write_repo.update(update).await {
                Ok(updated) => return Ok(updated.into()),
                Err(DomainError::SlugTaken(slug)) => {
                    tracing::warn!(%slug, attempt, recipe_id = recipe.id.0, "slug claimed concurrently, re-resolving");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::infrastructure("could not update recipe"))
    }

    async fn build_update(
        &self,
        recipe: &Recipe,
        retitle: Option<&RecipeTitle>,
        details_changed: bool,
        original_updated_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> ApplicationResult<RecipeUpdate> {
        let mut update = RecipeUpdate::new(recipe.id, original_updated_at);
        update.set_updated_at(now);

        if let Some(title) = retitle {
            let slug = self
                .slug_service
                .generate_unique_slug(title, Some(recipe.id))
                .await?;
            update = update.with_title(title.clone(), slug);
        }
        if details_changed {
            update = update.with_details(recipe.details.clone());
        }
        Ok(update)
    }
}
