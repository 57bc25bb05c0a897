// src/domain/mod.rs
pub mod errors;
pub mod pagination;
pub mod recipe;
pub mod user;
