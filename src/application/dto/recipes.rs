use crate::domain::{
    pagination::Page,
    recipe::{Category, Difficulty, Recipe},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::PaginationDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    /// Total minutes.
    pub time: i32,
    pub difficulty: Difficulty,
    pub servings: i32,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub images: Vec<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        let details = recipe.details;
        Self {
            id: recipe.id.into(),
            title: recipe.title.into_inner(),
            slug: recipe.slug.into_inner(),
            description: details.description,
            content: details.content,
            category: details.category,
            time: details.time_minutes,
            difficulty: details.difficulty,
            servings: details.servings,
            tags: details.tags,
            ingredients: details.ingredients,
            prep_time: details.prep_time,
            cook_time: details.cook_time,
            images: details.images,
            created_by: recipe.created_by.map(Into::into),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeListResponse {
    pub items: Vec<RecipeDto>,
    pub pagination: PaginationDto,
}

impl From<Page<Recipe>> for RecipeListResponse {
    fn from(page: Page<Recipe>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            pagination: page.meta.into(),
        }
    }
}
