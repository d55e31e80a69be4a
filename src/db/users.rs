/**
 * User Model and Database Operations
 *
 * This module handles the user record and its database operations. Users
 * are created on signup and read on signin; they are never mutated or
 * deleted here. The stored password field is always the bcrypt output.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// System-assigned identifier (UUID v4)
    pub id: Uuid,
    /// Unique username
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// Username uniqueness is enforced by the UNIQUE column; a collision
/// surfaces as a database error with `is_unique_violation()` set, which
/// the signup handler maps to `DuplicateUser`.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // A single connection keeps the in-memory database alive and shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory pool");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let pool = test_pool().await;

        let created = create_user(&pool, "alice", "hashed").await.unwrap();
        assert_eq!(created.username, "alice");
        assert_eq!(created.password_hash, "hashed");

        let found = get_user_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        let by_id = get_user_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");
    }

    #[tokio::test]
    async fn test_lookup_missing_user_returns_none() {
        let pool = test_pool().await;
        let found = get_user_by_username(&pool, "nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let pool = test_pool().await;

        create_user(&pool, "alice", "hash1").await.unwrap();
        let err = create_user(&pool, "alice", "hash2").await.unwrap_err();

        let db_err = err.as_database_error().expect("expected a database error");
        assert!(db_err.is_unique_violation());
    }
}
