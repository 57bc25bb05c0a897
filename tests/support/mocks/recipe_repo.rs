// tests/support/mocks/recipe_repo.rs
use async_trait::async_trait;
use recipebox::domain::errors::{DomainError, DomainResult};
use recipebox::domain::recipe::{
    NewRecipe, Recipe, RecipeId, RecipeListQuery, RecipeReadRepository, RecipeSlug, RecipeTitle,
    RecipeUpdate, RecipeWriteRepository,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

/// Honours the same uniqueness and optimistic-concurrency rules as the
/// Postgres repositories, and evaluates listings with the domain rules.
#[derive(Default)]
pub struct InMemoryRecipeRepo {
    recipes: Mutex<Vec<Recipe>>,
    next_id: Mutex<i64>,
}

impl InMemoryRecipeRepo {
    pub fn all(&self) -> Vec<Recipe> {
        self.recipes.lock().unwrap().clone()
    }

    pub fn by_id(&self, id: RecipeId) -> Option<Recipe> {
        self.all().into_iter().find(|r| r.id == id)
    }

    pub fn slugs(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .map(|r| r.slug.as_str().to_string())
            .collect()
    }

    fn store(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let mut recipes = self.recipes.lock().unwrap();
        if recipes.iter().any(|r| r.slug == recipe.slug) {
            return Err(DomainError::SlugTaken(recipe.slug.as_str().to_string()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = Recipe {
            id: RecipeId::new(*next_id)?,
            title: recipe.title,
            slug: recipe.slug,
            details: recipe.details,
            created_by: recipe.created_by,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        };
        recipes.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl RecipeWriteRepository for InMemoryRecipeRepo {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        self.store(recipe)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let mut recipes = self.recipes.lock().unwrap();
        if let Some(slug) = &update.slug {
            if recipes.iter().any(|r| r.id != update.id && &r.slug == slug) {
                return Err(DomainError::SlugTaken(slug.as_str().to_string()));
            }
        }
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| DomainError::NotFound("recipe not found".into()))?;
        if recipe.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "recipe was modified concurrently".into(),
            ));
        }
        if let Some(title) = update.title {
            recipe.title = title;
        }
        if let Some(slug) = update.slug {
            recipe.slug = slug;
        }
        if let Some(details) = update.details {
            recipe.details = details;
        }
        recipe.updated_at = update.updated_at;
        Ok(recipe.clone())
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeReadRepository for InMemoryRecipeRepo {
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        Ok(self.all().into_iter().find(|r| &r.slug == slug))
    }

    async fn list_page(&self, query: &RecipeListQuery) -> DomainResult<(Vec<Recipe>, u64)> {
        Ok(query.evaluate(&self.all()))
    }
}

/// Write repository in which a competing writer claims the chosen slug
/// right before each of the first `races` writes lands.
pub struct RacingRecipeRepo {
    inner: Arc<InMemoryRecipeRepo>,
    races: AtomicU32,
}

impl RacingRecipeRepo {
    pub fn new(inner: Arc<InMemoryRecipeRepo>, races: u32) -> Self {
        Self {
            inner,
            races: AtomicU32::new(races),
        }
    }

    fn take_race(&self) -> bool {
        self.races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }

    fn competitor(&self, template: &NewRecipe) -> DomainResult<()> {
        let mut rival = template.clone();
        rival.title = RecipeTitle::new(format!("{} (rival)", template.title))?;
        rival.created_by = None;
        self.inner.store(rival).map(|_| ())
    }
}

#[async_trait]
impl RecipeWriteRepository for RacingRecipeRepo {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        if self.take_race() {
            self.competitor(&recipe)?;
        }
        self.inner.insert(recipe).await
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let raced_slug = update.slug.clone().filter(|_| self.take_race());
        if let Some(slug) = raced_slug {
            let current = self
                .inner
                .by_id(update.id)
                .ok_or_else(|| DomainError::NotFound("recipe not found".into()))?;
            self.competitor(&NewRecipe {
                title: current.title,
                slug,
                details: current.details,
                created_by: None,
                created_at: current.created_at,
                updated_at: current.updated_at,
            })?;
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
