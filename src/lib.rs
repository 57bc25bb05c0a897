// src/lib.rs
//! Recipe-sharing REST backend: recipe catalogue with unique slugs, filtered
//! and paginated listing, approval-gated accounts and a text-generation
//! assistant for recipe authors.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
