// src/domain/recipe/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::recipe::repository::RecipeReadRepository;
use crate::domain::recipe::value_objects::{RecipeId, RecipeSlug, RecipeTitle};

/// Base slug used when a title normalises to nothing (e.g. "!!!").
pub const FALLBACK_BASE_SLUG: &str = "recipe";

/// Room left after the base for a `-N` suffix.
const SUFFIX_RESERVE: usize = 12;

/// Domain service responsible for producing unique slugs for recipes.
///
/// Probing is sequential (`base`, `base-2`, `base-3`, …) and read-only. It is
/// not atomic with the write that follows, so the unique index on
/// `recipes.slug` remains the final arbiter; callers retry on
/// [`DomainError::SlugTaken`](crate::domain::errors::DomainError::SlugTaken).
pub struct RecipeSlugService {
    read_repo: Arc<dyn RecipeReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl RecipeSlugService {
    pub fn new(
        read_repo: Arc<dyn RecipeReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn base_slug(&self, title: &RecipeTitle) -> String {
        let mut base = self.generator.slugify(title.as_str());
        let max_base = RecipeSlug::MAX_LEN - SUFFIX_RESERVE;
        if base.len() > max_base {
            let mut cut = max_base;
            while !base.is_char_boundary(cut) {
                cut -= 1;
            }
            base.truncate(cut);
            base.truncate(base.trim_end_matches('-').len());
        }
        if base.is_empty() {
            FALLBACK_BASE_SLUG.to_string()
        } else {
            base
        }
    }

    /// Returns a slug not held by any persisted recipe other than `ignore_id`.
    pub async fn generate_unique_slug(
        &self,
        title: &RecipeTitle,
        ignore_id: Option<RecipeId>,
    ) -> DomainResult<RecipeSlug> {
        let base = self.base_slug(title);
        let mut candidate = RecipeSlug::new(base.clone())?;
        let mut suffix = 2u64;

        loop {
            match self.read_repo.find_by_slug(&candidate).await? {
                Some(existing) if Some(existing.id) != ignore_id => {
                    tracing::debug!(slug = %candidate, "slug taken, probing next suffix");
                    candidate = RecipeSlug::new(format!("{base}-{suffix}"))?;
                    suffix += 1;
                }
                _ => return Ok(candidate),
            }
        }
    }
}
