// src/application/assistant/prompts.rs
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::ChatMessageDto;

pub const MAX_SUGGESTED_TAGS: usize = 5;

/// Recipe fields quoted to the model when chatting about a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeContext {
    pub title: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub servings: Option<i32>,
    pub time: Option<i32>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub ingredients: Vec<String>,
    pub content: Option<String>,
    pub tags: Vec<String>,
}

pub(super) fn describe(title: &str) -> String {
    format!("Create a short, appetizing description (max 250 characters) for this recipe: {title}")
}

pub(super) fn suggest_tags(title: &str, ingredients: &[String], content: &str) -> String {
    format!(
        "Suggest exactly {MAX_SUGGESTED_TAGS} relevant tags for this recipe.\n\
         Return ONLY comma-separated lowercase tags (no numbering, no explanation).\n\n\
         Title: {title}\n\
         Ingredients: {}\n\
         Content: {content}\n\n\
         Example output: vegan, spicy, dinner, asian, healthy",
        ingredients.join(", ")
    )
}

fn or_unknown<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "unknown".to_string(), ToString::to_string)
}

pub(super) fn system_context(recipe: &RecipeContext) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "You are a helpful cooking assistant helping a user with this recipe:"
    );
    let _ = writeln!(out, "**Recipe Title:** {}", recipe.title.trim());
    let _ = writeln!(out, "**Category:** {}", or_unknown(recipe.category.as_ref()));
    let _ = writeln!(out, "**Difficulty:** {}", or_unknown(recipe.difficulty.as_ref()));
    let _ = writeln!(out, "**Servings:** {}", or_unknown(recipe.servings.as_ref()));
    let _ = writeln!(out, "**Total Time:** {} minutes", or_unknown(recipe.time.as_ref()));
    if let Some(prep) = recipe.prep_time.filter(|t| *t > 0) {
        let _ = writeln!(out, "**Prep Time:** {prep} minutes");
    }
    if let Some(cook) = recipe.cook_time.filter(|t| *t > 0) {
        let _ = writeln!(out, "**Cook Time:** {cook} minutes");
    }

    let _ = writeln!(out, "\n**Ingredients:**");
    if recipe.ingredients.is_empty() {
        let _ = writeln!(out, "No ingredients listed");
    }
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        let _ = writeln!(out, "{}. {ingredient}", i + 1);
    }

    let instructions = recipe
        .content
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("No instructions provided");
    let _ = writeln!(out, "\n**Instructions:**\n{instructions}");

    if !recipe.tags.is_empty() {
        let _ = writeln!(out, "\n**Tags:** {}", recipe.tags.join(", "));
    }

    out.push_str(
        "\n---\n\nYour role:\n\
         - Answer questions about this recipe\n\
         - Suggest ingredient substitutions\n\
         - Explain cooking techniques\n\
         - Help with timing and temperature\n\
         - Provide tips for better results\n\
         - Suggest modifications (e.g., making it vegan, gluten-free)\n\
         - Be friendly, encouraging, and concise\n\n\
         Keep responses brief (2-3 paragraphs max) unless the user asks for detailed explanations.",
    );
    out
}

pub(super) fn chat_transcript(recipe: &RecipeContext, messages: &[ChatMessageDto]) -> String {
    std::iter::once(format!("SYSTEM: {}", system_context(recipe)))
        .chain(
            messages
                .iter()
                .map(|m| format!("{}: {}", m.role.to_uppercase(), m.content)),
        )
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Turns a comma-separated model reply into at most five distinct lowercase tags.
pub fn parse_tag_reply(reply: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in reply.split(',').map(|t| t.trim().to_lowercase()) {
        if tags.len() == MAX_SUGGESTED_TAGS {
            break;
        }
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_reply_is_cleaned_and_capped() {
        let tags = parse_tag_reply(" Vegan, spicy ,,SPICY, dinner, asian, healthy, extra\n");
        assert_eq!(tags, vec!["vegan", "spicy", "dinner", "asian", "healthy"]);
    }

    #[test]
    fn system_context_numbers_ingredients_and_skips_missing_times() {
        let recipe = RecipeContext {
            title: "Banana Bread".into(),
            ingredients: vec!["bananas".into(), "flour".into()],
            cook_time: Some(50),
            ..RecipeContext::default()
        };
        let context = system_context(&recipe);
        assert!(context.contains("**Recipe Title:** Banana Bread"));
        assert!(context.contains("1. bananas\n2. flour"));
        assert!(context.contains("**Cook Time:** 50 minutes"));
        assert!(!context.contains("Prep Time"));
        assert!(context.contains("No instructions provided"));
    }

    #[test]
    fn transcript_prefixes_roles() {
        let recipe = RecipeContext {
            title: "Soup".into(),
            ..RecipeContext::default()
        };
        let messages = vec![ChatMessageDto {
            role: "user".into(),
            content: "Can I freeze it?".into(),
        }];
        let transcript = chat_transcript(&recipe, &messages);
        assert!(transcript.starts_with("SYSTEM: You are a helpful cooking assistant"));
        assert!(transcript.ends_with("USER: Can I freeze it?"));
    }
}
