// src/application/ports/mod.rs
pub mod assistant;
pub mod mailer;
pub mod security;
pub mod time;
pub mod util;

