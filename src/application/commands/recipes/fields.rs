// src/application/commands/recipes/fields.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::recipe::{Category, Difficulty, RecipeSlug},
};

pub(super) fn parse_category(raw: &str) -> ApplicationResult<Category> {
    raw.trim().parse::<Category>().map_err(|_| {
        ApplicationError::validation(format!(
            "category must be one of: {}",
            Category::ALL.map(|c| c.as_str()).join(", ")
        ))
    })
}

pub(super) fn parse_difficulty(raw: &str) -> ApplicationResult<Difficulty> {
    raw.trim()
        .parse::<Difficulty>()
        .map_err(|_| ApplicationError::validation("difficulty must be one of: easy, medium, hard"))
}

/// Path slugs that could never have been stored are reported as missing.
pub(super) fn lookup_slug(raw: &str) -> ApplicationResult<RecipeSlug> {
    RecipeSlug::new(raw).map_err(|_| ApplicationError::not_found("recipe not found"))
}
