// src/application/assistant/mod.rs
//! Recipe writing helpers backed by a text-generation model.

mod prompts;

use std::sync::Arc;

use crate::application::{
    dto::{ChatMessageDto, ChatReplyDto, GeneratedDescriptionDto, GeneratedTagsDto},
    error::{ApplicationError, ApplicationResult},
    ports::assistant::TextGenerator,
};

pub use prompts::{MAX_SUGGESTED_TAGS, RecipeContext, parse_tag_reply};

pub struct DescribeRecipeCommand {
    pub title: String,
}

pub struct SuggestTagsCommand {
    pub title: String,
    pub ingredients: Vec<String>,
    pub content: String,
}

pub struct ChatCommand {
    pub messages: Vec<ChatMessageDto>,
    pub recipe: RecipeContext,
}

pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
}

impl AssistantService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn describe(
        &self,
        command: DescribeRecipeCommand,
    ) -> ApplicationResult<GeneratedDescriptionDto> {
        let title = required(&command.title, "title is required")?;
        let reply = self.generator.generate(&prompts::describe(title)).await?;
        Ok(GeneratedDescriptionDto {
            description: reply.trim().to_string(),
        })
    }

    pub async fn suggest_tags(
        &self,
        command: SuggestTagsCommand,
    ) -> ApplicationResult<GeneratedTagsDto> {
        const MISSING: &str = "title, ingredients, and content are required";
        let title = required(&command.title, MISSING)?;
        let content = required(&command.content, MISSING)?;
        if command.ingredients.iter().all(|i| i.trim().is_empty()) {
            return Err(ApplicationError::validation(MISSING));
        }

        let prompt = prompts::suggest_tags(title, &command.ingredients, content);
        let reply = self.generator.generate(&prompt).await?;
        Ok(GeneratedTagsDto {
            tags: parse_tag_reply(&reply),
        })
    }

    pub async fn chat(&self, command: ChatCommand) -> ApplicationResult<ChatReplyDto> {
        if command.messages.is_empty() {
            return Err(ApplicationError::validation("messages array is required"));
        }
        required(&command.recipe.title, "recipe context is required")?;

        let transcript = prompts::chat_transcript(&command.recipe, &command.messages);
        let reply = self.generator.generate(&transcript).await?;
        Ok(ChatReplyDto::assistant(reply.trim()))
    }
}

fn required<'a>(value: &'a str, message: &str) -> ApplicationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApplicationError::validation(message))
    } else {
        Ok(value)
    }
}
