// src/application/commands/recipes/mod.rs
mod create;
mod delete;
mod fields;
mod service;
mod update;

pub use create::{CreateRecipeCommand, CreateRecipeCommandBuilder};
pub use delete::DeleteRecipeCommand;
pub use service::{MAX_SLUG_ATTEMPTS, RecipeCommandService};
pub use update::UpdateRecipeCommand;
