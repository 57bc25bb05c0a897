mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetRecipeBySlugQuery;
pub use list::ListRecipesQuery;
pub use service::RecipeQueryService;
