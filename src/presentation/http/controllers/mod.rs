// src/presentation/http/controllers/mod.rs
pub mod assistant;
pub mod auth;
pub mod recipes;
pub mod users;
