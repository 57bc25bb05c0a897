// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_recipe;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_recipe::{PostgresRecipeReadRepository, PostgresRecipeWriteRepository};
pub use postgres_user::PostgresUserRepository;
