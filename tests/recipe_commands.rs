// tests/recipe_commands.rs
mod support;

use recipebox::application::commands::recipes::{
    CreateRecipeCommand, DeleteRecipeCommand, UpdateRecipeCommand,
};
use recipebox::application::error::ApplicationError;
use recipebox::domain::errors::DomainError;
use recipebox::domain::recipe::{Category, Difficulty};
use support::*;

fn soup() -> CreateRecipeCommand {
    CreateRecipeCommand::builder()
        .title("Tomato Soup")
        .description("Bright and warming")
        .content("Roast, blend, season.")
        .category("lunch")
        .time(40)
        .difficulty("medium")
        .servings(4)
        .tag(" Vegan ")
        .tag("comfort")
        .tag("comfort")
        .ingredient(" tomatoes ")
        .ingredient("")
        .build()
        .unwrap()
}

fn is_validation(err: &ApplicationError) -> bool {
    matches!(
        err,
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_))
    )
}

#[tokio::test]
async fn create_normalises_fields_and_stamps_author() {
    let app = TestApp::new();
    let created = app
        .services
        .recipe_commands
        .create_recipe(&admin_actor(), soup())
        .await
        .unwrap();

    assert_eq!(created.slug, "tomato-soup");
    assert_eq!(created.category, Category::Lunch);
    assert_eq!(created.difficulty, Difficulty::Medium);
    assert_eq!(created.tags, vec!["Vegan", "comfort"]);
    assert_eq!(created.ingredients, vec!["tomatoes"]);
    assert_eq!(created.created_by, Some(1));
    assert_eq!(created.created_at, fixed_now());
    assert_eq!(app.recipes.all().len(), 1);
}

#[tokio::test]
async fn create_stores_trimmed_title() {
    let app = TestApp::new();
    let mut padded = soup();
    padded.title = "  Tomato Soup \t".into();
    let created = app
        .services
        .recipe_commands
        .create_recipe(&admin_actor(), padded)
        .await
        .unwrap();

    assert_eq!(created.title, "Tomato Soup");
    assert_eq!(created.slug, "tomato-soup");
}

#[tokio::test]
async fn create_without_capability_is_forbidden() {
    let app = TestApp::new();
    let err = app
        .services
        .recipe_commands
        .create_recipe(&public_actor(), soup())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
    assert!(app.recipes.all().is_empty());
}

#[tokio::test]
async fn create_rejects_unknown_category_and_zero_servings() {
    let app = TestApp::new();

    let mut bad_category = soup();
    bad_category.category = "brunch".into();
    let err = app
        .services
        .recipe_commands
        .create_recipe(&admin_actor(), bad_category)
        .await
        .unwrap_err();
    assert!(is_validation(&err), "{err:?}");

    let mut no_servings = soup();
    no_servings.servings = Some(0);
    let err = app
        .services
        .recipe_commands
        .create_recipe(&admin_actor(), no_servings)
        .await
        .unwrap_err();
    assert!(is_validation(&err), "{err:?}");

    let mut blank_title = soup();
    blank_title.title = "   ".into();
    let err = app
        .services
        .recipe_commands
        .create_recipe(&admin_actor(), blank_title)
        .await
        .unwrap_err();
    assert!(is_validation(&err), "{err:?}");

    assert!(app.recipes.all().is_empty());
}

#[tokio::test]
async fn partial_update_keeps_untouched_fields() {
    let app = TestApp::new();
    app.services
        .recipe_commands
        .create_recipe(&admin_actor(), soup())
        .await
        .unwrap();
    app.clock.advance(chrono::Duration::minutes(5));

    let updated = app
        .services
        .recipe_commands
        .update_recipe(
            &admin_actor(),
            UpdateRecipeCommand {
                slug: "tomato-soup".into(),
                servings: Some(6),
                tags: Some(vec!["soup".into()]),
                ..UpdateRecipeCommand::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "tomato-soup");
    assert_eq!(updated.servings, 6);
    assert_eq!(updated.tags, vec!["soup"]);
    assert_eq!(updated.description, "Bright and warming");
    assert_eq!(updated.updated_at, fixed_now() + chrono::Duration::minutes(5));
    assert_eq!(updated.created_at, fixed_now());
}

#[tokio::test]
async fn update_validates_merged_details() {
    let app = TestApp::new();
    app.services
        .recipe_commands
        .create_recipe(&admin_actor(), soup())
        .await
        .unwrap();

    let err = app
        .services
        .recipe_commands
        .update_recipe(
            &admin_actor(),
            UpdateRecipeCommand {
                slug: "tomato-soup".into(),
                servings: Some(0),
                ..UpdateRecipeCommand::default()
            },
        )
        .await
        .unwrap_err();
    assert!(is_validation(&err), "{err:?}");
    assert_eq!(app.recipes.all()[0].details.servings, 4);
}

#[tokio::test]
async fn update_and_delete_report_missing_recipes() {
    let app = TestApp::new();

    let err = app
        .services
        .recipe_commands
        .update_recipe(
            &admin_actor(),
            UpdateRecipeCommand {
                slug: "nothing-here".into(),
                title: Some("Anything".into()),
                ..UpdateRecipeCommand::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");

    for slug in ["nothing-here", "NOT VALID"] {
        let err = app
            .services
            .recipe_commands
            .delete_recipe(&admin_actor(), DeleteRecipeCommand { slug: slug.into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "{slug}: {err:?}");
    }
}

#[tokio::test]
async fn delete_requires_capability_and_removes_recipe() {
    let app = TestApp::new();
    app.seed_recipe(RecipeBuilder::new("Tomato Soup").build()).await;

    let err = app
        .services
        .recipe_commands
        .delete_recipe(
            &public_actor(),
            DeleteRecipeCommand {
                slug: "tomato-soup".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
    assert_eq!(app.recipes.all().len(), 1);

    app.services
        .recipe_commands
        .delete_recipe(
            &admin_actor(),
            DeleteRecipeCommand {
                slug: "tomato-soup".into(),
            },
        )
        .await
        .unwrap();
    assert!(app.recipes.all().is_empty());
}
