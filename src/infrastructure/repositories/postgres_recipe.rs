// src/infrastructure/repositories/postgres_recipe.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::recipe::{
    NewRecipe, Recipe, RecipeDetails, RecipeFilter, RecipeId, RecipeListQuery,
    RecipeReadRepository, RecipeSlug, RecipeSort, RecipeTitle, RecipeUpdate,
    RecipeWriteRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const RECIPE_COLUMNS: &str = "id, title, slug, description, content, category, time_minutes, \
     difficulty, servings, tags, ingredients, prep_time, cook_time, images, created_by, \
     created_at, updated_at";

#[derive(Clone)]
pub struct PostgresRecipeWriteRepository {
    pool: PgPool,
}

impl PostgresRecipeWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresRecipeReadRepository {
    pool: PgPool,
}

impl PostgresRecipeReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    content: String,
    category: String,
    time_minutes: i32,
    difficulty: String,
    servings: i32,
    tags: Vec<String>,
    ingredients: Vec<String>,
    prep_time: Option<i32>,
    cook_time: Option<i32>,
    images: Vec<String>,
    created_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = DomainError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        Ok(Recipe {
            id: RecipeId::new(row.id)?,
            title: RecipeTitle::new(row.title)?,
            slug: RecipeSlug::new(row.slug)?,
            details: RecipeDetails {
                description: row.description,
                content: row.content,
                category: row.category.parse()?,
                time_minutes: row.time_minutes,
                difficulty: row.difficulty.parse()?,
                servings: row.servings,
                tags: row.tags,
                ingredients: row.ingredients,
                prep_time: row.prep_time,
                cook_time: row.cook_time,
                images: row.images,
            },
            created_by: row.created_by.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Attaches the attempted slug to a unique-index rejection.
fn slug_error(slug: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |err| match map_sqlx(err) {
        DomainError::SlugTaken(_) => DomainError::SlugTaken(slug.to_string()),
        other => other,
    }
}

fn push_details(builder: &mut QueryBuilder<'_, Postgres>, details: RecipeDetails) {
    builder.push(", description = ");
    builder.push_bind(details.description);
    builder.push(", content = ");
    builder.push_bind(details.content);
    builder.push(", category = ");
    builder.push_bind(details.category.as_str());
    builder.push(", time_minutes = ");
    builder.push_bind(details.time_minutes);
    builder.push(", difficulty = ");
    builder.push_bind(details.difficulty.as_str());
    builder.push(", servings = ");
    builder.push_bind(details.servings);
    builder.push(", tags = ");
    builder.push_bind(details.tags);
    builder.push(", ingredients = ");
    builder.push_bind(details.ingredients);
    builder.push(", prep_time = ");
    builder.push_bind(details.prep_time);
    builder.push(", cook_time = ");
    builder.push_bind(details.cook_time);
    builder.push(", images = ");
    builder.push_bind(details.images);
}

#[async_trait]
impl RecipeWriteRepository for PostgresRecipeWriteRepository {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let NewRecipe {
            title,
            slug,
            details,
            created_by,
            created_at,
            updated_at,
        } = recipe;

        let sql = format!(
            "INSERT INTO recipes (title, slug, description, content, category, time_minutes,
                 difficulty, servings, tags, ingredients, prep_time, cook_time, images,
                 created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {RECIPE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(details.description)
            .bind(details.content)
            .bind(details.category.as_str())
            .bind(details.time_minutes)
            .bind(details.difficulty.as_str())
            .bind(details.servings)
            .bind(details.tags)
            .bind(details.ingredients)
            .bind(details.prep_time)
            .bind(details.cook_time)
            .bind(details.images)
            .bind(created_by.map(i64::from))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(slug_error(slug.as_str()))?;

        Recipe::try_from(row)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let RecipeUpdate {
            id,
            title,
            slug,
            details,
            original_updated_at,
            updated_at,
        } = update;
        let attempted_slug = slug.as_ref().map(ToString::to_string).unwrap_or_default();

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE recipes SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(details) = details {
            push_details(&mut builder, details);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(RECIPE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<RecipeRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(slug_error(&attempted_slug))?;

        let row = maybe_row.ok_or_else(|| {
            DomainError::Conflict("recipe was modified concurrently, please retry".into())
        })?;

        Recipe::try_from(row)
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        Ok(())
    }
}

/// Escapes LIKE metacharacters so user input matches literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

impl PostgresRecipeReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &RecipeFilter) {
        let mut has_where = false;

        if let Some(category) = filter.category {
            push_clause(builder, &mut has_where);
            builder.push("category = ");
            builder.push_bind(category.as_str());
        }

        if !filter.tags.is_empty() {
            push_clause(builder, &mut has_where);
            builder.push("tags && ");
            builder.push_bind(filter.tags.clone());
        }

        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            push_clause(builder, &mut has_where);
            builder.push("(title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR EXISTS (SELECT 1 FROM unnest(tags) AS t(tag) WHERE t.tag ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\'))");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: RecipeSort) {
        builder.push(match sort {
            RecipeSort::Newest => " ORDER BY created_at DESC, id DESC",
            RecipeSort::Oldest => " ORDER BY created_at ASC, id ASC",
            RecipeSort::TitleAsc => {
                " ORDER BY lower(title) COLLATE \"C\" ASC, created_at ASC, id ASC"
            }
            RecipeSort::TitleDesc => {
                " ORDER BY lower(title) COLLATE \"C\" DESC, created_at ASC, id ASC"
            }
        });
    }
}

#[async_trait]
impl RecipeReadRepository for PostgresRecipeReadRepository {
    async fn find_by_slug(&self, slug: &RecipeSlug) -> DomainResult<Option<Recipe>> {
        let sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE slug = $1");
        let row = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Recipe::try_from).transpose()
    }

    async fn list_page(&self, query: &RecipeListQuery) -> DomainResult<(Vec<Recipe>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM recipes");
        Self::apply_conditions(&mut count_builder, &query.filter);

        let mut page_builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        page_builder.push(RECIPE_COLUMNS);
        page_builder.push(" FROM recipes");
        Self::apply_conditions(&mut page_builder, &query.filter);
        Self::apply_ordering(&mut page_builder, query.sort);
        page_builder.push(" LIMIT ");
        page_builder.push_bind(i64::from(query.page.limit()));
        page_builder.push(" OFFSET ");
        page_builder.push_bind(i64::try_from(query.page.offset()).unwrap_or(i64::MAX));

        let (total, rows) = tokio::try_join!(
            count_builder
                .build_query_scalar::<i64>()
                .fetch_one(&self.pool),
            page_builder
                .build_query_as::<RecipeRow>()
                .fetch_all(&self.pool),
        )
        .map_err(map_sqlx)?;

        let recipes = rows
            .into_iter()
            .map(Recipe::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((recipes, u64::try_from(total).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
        assert_eq!(like_pattern("bread"), "%bread%");
    }

    #[test]
    fn filters_render_in_a_stable_order() {
        let filter = RecipeFilter::from_params(Some("pie"), Some("dessert"), Some("sweet"));
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM recipes");
        PostgresRecipeReadRepository::apply_conditions(&mut builder, &filter);
        let sql = builder.sql();
        assert!(sql.starts_with("SELECT COUNT(*) FROM recipes WHERE category = $1 AND tags && $2 AND (title ILIKE $3"));
        assert!(sql.contains("unnest(tags)"));
    }
}
