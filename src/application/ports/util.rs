// src/application/ports/util.rs

/// Reduces free text to lowercase ASCII letters, digits and single hyphens.
/// May return an empty string when nothing survives.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
