pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewRecipe, Recipe, RecipeDetails, RecipeUpdate};
pub use listing::{RecipeFilter, RecipeListQuery, RecipeSort};
pub use repository::{RecipeReadRepository, RecipeWriteRepository};
pub use value_objects::{Category, Difficulty, RecipeId, RecipeSlug, RecipeTitle};
