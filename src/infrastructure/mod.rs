// src/infrastructure/mod.rs
pub mod assistant;
pub mod database;
pub mod mail;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
