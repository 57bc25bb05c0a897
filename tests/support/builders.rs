// tests/support/builders.rs
use chrono::Duration;

use recipebox::domain::recipe::{
    Category, Difficulty, NewRecipe, RecipeDetails, RecipeSlug, RecipeTitle,
};
use recipebox::domain::user::{
    ApprovalStatus, DisplayName, Email, NewUser, PasswordHash, Role, UserId,
};

use super::mocks::fixed_now;

/// Seed data for recipe stores; created `minutes` after the fixed clock.
pub struct RecipeBuilder {
    title: String,
    slug: Option<String>,
    category: Category,
    tags: Vec<String>,
    description: String,
    minutes: i64,
}

impl RecipeBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            category: Category::Dinner,
            tags: Vec::new(),
            description: "A family favourite".into(),
            minutes: 0,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created_minutes_after_epoch(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn build(self) -> NewRecipe {
        let slug = self.slug.unwrap_or_else(|| {
            self.title
                .to_lowercase()
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("-")
        });
        let created_at = fixed_now() + Duration::minutes(self.minutes);
        NewRecipe {
            title: RecipeTitle::new(self.title).unwrap(),
            slug: RecipeSlug::new(slug).unwrap(),
            details: RecipeDetails {
                description: self.description,
                content: "Combine and cook.".into(),
                category: self.category,
                time_minutes: 30,
                difficulty: Difficulty::Easy,
                servings: 2,
                tags: self.tags,
                ingredients: vec!["salt".into()],
                prep_time: None,
                cook_time: None,
                images: Vec::new(),
            },
            created_by: Some(UserId::new(1).unwrap()),
            created_at,
            updated_at: created_at,
        }
    }
}

/// Account seed with the password `secret-pass` under the prefix hasher.
pub struct UserBuilder {
    name: String,
    email: String,
    role: Role,
    status: ApprovalStatus,
    active: bool,
    minutes: i64,
}

pub const SEED_PASSWORD: &str = "secret-pass";

impl UserBuilder {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: "Cook".into(),
            email: email.into(),
            role: Role::Public,
            status: ApprovalStatus::Approved,
            active: true,
            minutes: 0,
        }
    }

    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self
    }

    pub fn pending(mut self) -> Self {
        self.status = ApprovalStatus::Pending;
        self.active = false;
        self
    }

    pub fn rejected(mut self) -> Self {
        self.status = ApprovalStatus::Rejected;
        self.active = false;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn created_minutes_after_epoch(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn build(self) -> NewUser {
        NewUser {
            name: DisplayName::new(self.name).unwrap(),
            email: Email::new(self.email).unwrap(),
            password_hash: PasswordHash::new(format!("hashed:{SEED_PASSWORD}")).unwrap(),
            role: self.role,
            status: self.status,
            active: self.active,
            created_at: fixed_now() + Duration::minutes(self.minutes),
        }
    }
}
