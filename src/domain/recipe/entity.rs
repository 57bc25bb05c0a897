// src/domain/recipe/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::value_objects::{
    Category, Difficulty, RecipeId, RecipeSlug, RecipeTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Descriptive recipe fields. The slug logic never looks inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    pub description: String,
    pub content: String,
    pub category: Category,
    pub time_minutes: i32,
    pub difficulty: Difficulty,
    pub servings: i32,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub images: Vec<String>,
}

impl RecipeDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if self.description.trim().is_empty() {
            return Err(DomainError::Validation("description cannot be empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        if self.servings < 1 {
            return Err(DomainError::Validation(
                "servings must be at least 1".into(),
            ));
        }
        let negative_time = self.time_minutes < 0
            || self.prep_time.is_some_and(|t| t < 0)
            || self.cook_time.is_some_and(|t| t < 0);
        if negative_time {
            return Err(DomainError::Validation(
                "times cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Trims tags and ingredients and drops blank or repeated tags.
    pub fn normalized(mut self) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags.drain(..) {
            let tag = tag.trim().to_string();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        self.tags = tags;
        self.ingredients = self
            .ingredients
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: RecipeTitle,
    pub slug: RecipeSlug,
    pub details: RecipeDetails,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Whether assigning `title` would change the stored value.
    pub fn title_differs(&self, title: &RecipeTitle) -> bool {
        self.title != *title
    }

    pub fn set_details(&mut self, details: RecipeDetails, now: DateTime<Utc>) -> DomainResult<()> {
        details.validate()?;
        self.details = details;
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: RecipeTitle,
    pub slug: RecipeSlug,
    pub details: RecipeDetails,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub id: RecipeId,
    pub title: Option<RecipeTitle>,
    pub slug: Option<RecipeSlug>,
    pub details: Option<RecipeDetails>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeUpdate {
    pub fn new(id: RecipeId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            details: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: RecipeTitle, slug: RecipeSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_details(mut self, details: RecipeDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
