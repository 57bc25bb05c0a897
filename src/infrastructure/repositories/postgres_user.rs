// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::{
    ApprovalStatus, DisplayName, Email, NewUser, PasswordHash, ResetToken, User, UserId,
    UserRepository, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, name, email, password_hash, role, status, active, responded_at, \
     responded_by, reset_token_hash, reset_token_expires_at, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    status: String,
    active: bool,
    responded_at: Option<DateTime<Utc>>,
    responded_by: Option<i64>,
    reset_token_hash: Option<String>,
    reset_token_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let reset_token = match (row.reset_token_hash, row.reset_token_expires_at) {
            (Some(token_hash), Some(expires_at)) => Some(ResetToken {
                token_hash,
                expires_at,
            }),
            _ => None,
        };

        Ok(User {
            id: UserId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse()?,
            status: row.status.parse()?,
            active: row.active,
            responded_at: row.responded_at,
            responded_by: row.responded_by.map(UserId::new).transpose()?,
            reset_token,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            password_hash,
            role,
            status,
            active,
            created_at,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (name, email, password_hash, role, status, active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(name.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(status.as_str())
            .bind(active)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let NewUser {
            name,
            email,
            password_hash,
            role,
            status,
            active,
            created_at,
        } = new_user;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        // Serializes against every other writer so two first registrations
        // cannot both observe an empty table.
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO users (name, email, password_hash, role, status, active, created_at)
             SELECT $1, $2, $3, $4, $5, $6, $7
             WHERE NOT EXISTS (SELECT 1 FROM users)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(name.as_str())
            .bind(email.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(status.as_str())
            .bind(active)
            .bind(created_at)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.find_one("email", email.as_str()).await
    }

    async fn find_by_reset_token_hash(&self, token_hash: &str) -> DomainResult<Option<User>> {
        self.find_one("reset_token_hash", token_hash).await
    }

    async fn list_by_status(
        &self,
        status: ApprovalStatus,
        page: PageRequest,
    ) -> DomainResult<(Vec<User>, u64)> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE status = $1
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let (total, rows) = tokio::try_join!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE status = $1")
                .bind(status.as_str())
                .fetch_one(&self.pool),
            sqlx::query_as::<_, UserRow>(&sql)
                .bind(status.as_str())
                .bind(i64::from(page.limit()))
                .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
                .fetch_all(&self.pool),
        )
        .map_err(map_sqlx)?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((users, u64::try_from(total).unwrap_or_default()))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            status,
            active,
            responded_at,
            responded_by,
            password_hash,
            reset_token,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET id = id");

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(active) = active {
            builder.push(", active = ");
            builder.push_bind(active);
        }
        if let Some(responded_at) = responded_at {
            builder.push(", responded_at = ");
            builder.push_bind(responded_at);
        }
        if let Some(responded_by) = responded_by {
            builder.push(", responded_by = ");
            builder.push_bind(i64::from(responded_by));
        }
        if let Some(password_hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(String::from(password_hash));
        }
        if let Some(reset_token) = reset_token {
            let (hash, expires_at) = reset_token
                .map(|t| (t.token_hash, t.expires_at))
                .unzip();
            builder.push(", reset_token_hash = ");
            builder.push_bind(hash);
            builder.push(", reset_token_expires_at = ");
            builder.push_bind(expires_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
