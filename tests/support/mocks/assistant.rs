// tests/support/mocks/assistant.rs
use async_trait::async_trait;
use recipebox::application::{ApplicationResult, ports::assistant::TextGenerator};
use std::sync::Mutex;

/// Answers every prompt with the same text and remembers the prompts.
pub struct CannedTextGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl CannedTextGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for CannedTextGenerator {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}
