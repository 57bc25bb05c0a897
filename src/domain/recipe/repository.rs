use crate::domain::errors::DomainResult;
use crate::domain::recipe::entity::{NewRecipe, Recipe, RecipeUpdate};
use crate::domain::recipe::listing::RecipeListQuery;
use crate::domain::recipe::value_objects::{RecipeId, RecipeSlug};
use async_trait::async_trait;

#[async_trait]
pub trait RecipeWriteRepository: Send + Sync {
    /// Fails with `DomainError::SlugTaken` when another recipe already holds the slug.
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe>;
    /// Fails with `DomainError::SlugTaken` on a slug clash and with
    /// `DomainError::Conflict` when the stored `updated_at` moved on.
    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe>;
    async fn delete(&self, id: RecipeId) -> DomainResult<()>;
}

#[async_trait]
pub trait RecipeReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>>;
    /// Returns the requested page and the number of recipes matching the filter.
    async fn list_page(&self, query: &RecipeListQuery) -> DomainResult<(Vec<Recipe>, u64)>;
}
