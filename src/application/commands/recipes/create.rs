// src/application/commands/recipes/create.rs
use super::{
    MAX_SLUG_ATTEMPTS, RecipeCommandService,
    fields::{parse_category, parse_difficulty},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, RecipeDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        recipe::{Difficulty, NewRecipe, RecipeDetails, RecipeTitle},
    },
};

pub struct CreateRecipeCommand {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub time: Option<i32>,
    pub difficulty: Option<String>,
    pub servings: Option<i32>,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub images: Vec<String>,
}

impl CreateRecipeCommand {
    pub fn builder() -> CreateRecipeCommandBuilder {
        CreateRecipeCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateRecipeCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    category: Option<String>,
    time: Option<i32>,
    difficulty: Option<String>,
    servings: Option<i32>,
    tags: Vec<String>,
    ingredients: Vec<String>,
}

impl CreateRecipeCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn time(mut self, minutes: i32) -> Self {
        self.time = Some(minutes);
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn servings(mut self, servings: i32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    pub fn build(self) -> Result<CreateRecipeCommand, &'static str> {
        Ok(CreateRecipeCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            content: self.content.ok_or("content is required")?,
            category: self.category.ok_or("category is required")?,
            time: self.time,
            difficulty: self.difficulty,
            servings: self.servings,
            tags: self.tags,
            ingredients: self.ingredients,
            prep_time: None,
            cook_time: None,
            images: Vec::new(),
        })
    }
}

impl CreateRecipeCommand {
    fn into_details(self) -> ApplicationResult<(String, RecipeDetails)> {
        let difficulty = match self.difficulty.as_deref() {
            Some(raw) => parse_difficulty(raw)?,
            None => Difficulty::default(),
        };
        let details = RecipeDetails {
            description: self.description.trim().to_string(),
            content: self.content.trim().to_string(),
            category: parse_category(&self.category)?,
            time_minutes: self.time.unwrap_or(0),
            difficulty,
            servings: self.servings.unwrap_or(1),
            tags: self.tags,
            ingredients: self.ingredients,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            images: self.images,
        }
        .normalized();
        details.validate()?;
        Ok((self.title, details))
    }
}

impl RecipeCommandService {
    pub async fn create_recipe(
        &self,
        actor: &AuthenticatedUser,
        command: CreateRecipeCommand,
    ) -> ApplicationResult<RecipeDto> {
        actor.require("recipes", "create")?;

        let (title, details) = command.into_details()?;
        let title = RecipeTitle::new(title)?;
        let now = self.clock.now();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self.slug_service.generate_unique_slug(&title, None).await?;
            let new_recipe = NewRecipe {
                title: title.clone(),
                slug,
                details: details.clone(),
                created_by: Some(actor.id),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_recipe).await {
                Ok(created) => {
                    tracing::info!(recipe_id = created.id.0, slug = %created.slug, "recipe created");
                    return Ok(created.into());
                }
                Err(DomainError::SlugTaken(slug)) => {
                    tracing::warn!(%slug, attempt, "slug claimed concurrently, re-resolving");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::infrastructure("could not create recipe"))
    }
}
