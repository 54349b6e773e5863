use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::repo_types::User,
    error::{ApiError, ApiResult},
};

impl User {
    /// Create a new user with a hashed password. Fresh users are never admins.
    pub async fn create(db: &PgPool, username: &str, password_hash: &str) -> ApiResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, is_admin, is_active, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            // 23505 = unique violation on users.username
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                ApiError::DuplicateUsername
            }
            _ => ApiError::from(e),
        })?;
        Ok(user)
    }

    pub async fn find_by_username(db: &PgPool, username: &str) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, is_admin, is_active, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> ApiResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, is_admin, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn list_all(db: &PgPool) -> ApiResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, is_admin, is_active, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }

    /// Partial update of the admin-managed flags; absent fields keep their value.
    pub async fn update_flags(
        db: &PgPool,
        id: Uuid,
        is_admin: Option<bool>,
        is_active: Option<bool>,
    ) -> ApiResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_admin = COALESCE($2, is_admin),
                is_active = COALESCE($3, is_active)
            WHERE id = $1
            RETURNING id, username, password_hash, is_admin, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(is_admin)
        .bind(is_active)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
        Ok(user)
    }
}
