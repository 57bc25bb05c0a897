// src/infrastructure/assistant.rs
//! Text generation through the Gemini `generateContent` REST endpoint.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::assistant::TextGenerator,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it said anything.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

pub struct GeminiTextGenerator {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiTextGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| ApplicationError::infrastructure(format!("gemini client: {err}")))?;
        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String> {
        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("gemini request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, model = %self.model, "gemini rejected request");
            return Err(ApplicationError::infrastructure(format!(
                "text generation failed ({status})"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("gemini reply unreadable: {err}")))?;

        parsed
            .into_text()
            .ok_or_else(|| ApplicationError::infrastructure("text generation returned no content"))
    }
}

/// Stand-in used when no API key is configured.
#[derive(Default, Clone)]
pub struct DisabledTextGenerator;

#[async_trait]
impl TextGenerator for DisabledTextGenerator {
    async fn generate(&self, _prompt: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure(
            "assistant is not configured (set GEMINI_API_KEY)",
        ))
    }
}
