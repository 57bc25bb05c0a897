// src/application/ports/assistant.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Single-turn text completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String>;
}
