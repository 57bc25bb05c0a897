use crate::domain::errors::DomainError;

const CNT_RECIPE_SLUG: &str = "recipes_slug_key";
const CNT_RECIPE_AUTHOR: &str = "recipes_created_by_fkey";
const CNT_RECIPE_SERVINGS_CHECK: &str = "recipes_servings_check";
const CNT_USER_EMAIL: &str = "users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_RECIPE_SLUG => DomainError::SlugTaken("slug already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_RECIPE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_RECIPE_SERVINGS_CHECK => {
                        DomainError::Validation("servings must be at least 1".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
