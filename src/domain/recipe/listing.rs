// src/domain/recipe/listing.rs
//! Filter, ordering and paging rules shared by every recipe listing.
//!
//! Raw request parameters are normalised here and never rejected: unknown
//! categories drop the category filter, unknown sort keys fall back to
//! newest-first, and malformed page numbers or sizes take their defaults.

use crate::domain::pagination::PageRequest;
use crate::domain::recipe::entity::Recipe;
use crate::domain::recipe::value_objects::Category;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecipeSort {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl RecipeSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("oldest") => Self::Oldest,
            Some("az") => Self::TitleAsc,
            Some("za") => Self::TitleDesc,
            _ => Self::Newest,
        }
    }

    /// Total order over recipes. Title ties fall back to creation order,
    /// creation ties fall back to the id.
    pub fn compare(self, a: &Recipe, b: &Recipe) -> Ordering {
        let creation = a
            .created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id));
        match self {
            Self::Newest => creation.reverse(),
            Self::Oldest => creation,
            Self::TitleAsc => title_key(a).cmp(&title_key(b)).then(creation),
            Self::TitleDesc => title_key(b).cmp(&title_key(a)).then(creation),
        }
    }
}

fn title_key(recipe: &Recipe) -> String {
    recipe.title.as_str().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive literal substring over title, description and tags.
    pub search: Option<String>,
    pub category: Option<Category>,
    /// Matches when the recipe carries any of these tags.
    pub tags: Vec<String>,
}

impl RecipeFilter {
    pub fn from_params(search: Option<&str>, category: Option<&str>, tags: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all")
            .and_then(|c| c.parse::<Category>().ok());

        let mut wanted: Vec<String> = Vec::new();
        for tag in tags.unwrap_or_default().split(',').map(str::trim) {
            if !tag.is_empty() && !wanted.iter().any(|t| t == tag) {
                wanted.push(tag.to_string());
            }
        }

        Self {
            search,
            category,
            tags: wanted,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(category) = self.category {
            if recipe.details.category != category {
                return false;
            }
        }

        if !self.tags.is_empty() && !recipe.details.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }

        match &self.search {
            Some(needle) => {
                let needle = needle.to_lowercase();
                let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
                contains(recipe.title.as_str())
                    || contains(&recipe.details.description)
                    || recipe.details.tags.iter().any(|t| contains(t))
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeListQuery {
    pub filter: RecipeFilter,
    pub sort: RecipeSort,
    pub page: PageRequest,
}

impl RecipeListQuery {
    /// Applies the query to an in-memory collection, returning the requested
    /// slice and the number of matching recipes.
    pub fn evaluate(&self, recipes: &[Recipe]) -> (Vec<Recipe>, u64) {
        let mut matching: Vec<&Recipe> = recipes.iter().filter(|r| self.filter.matches(r)).collect();
        matching.sort_by(|a, b| self.sort.compare(a, b));
        let total = matching.len() as u64;
        let offset = usize::try_from(self.page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(self.page.limit() as usize)
            .cloned()
            .collect();
        (items, total)
    }
}
