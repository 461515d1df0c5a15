//! Repository functions for user accounts.

use chrono::Utc;
use sqlx::PgPool;

use crate::models::user::User;

pub async fn insert(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, avatar, is_active, \
         is_email_verified, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.avatar)
    .bind(user.is_active)
    .bind(user.is_email_verified)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Lookup restricted to active accounts; the authorizer and profile
/// endpoints must not see soft-deleted users.
pub async fn find_active_by_id(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, avatar, is_active, is_email_verified, \
         created_at, updated_at FROM users WHERE id = $1 AND is_active = TRUE",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Case-insensitive email lookup. Stored emails are lowercased, so
/// lowering the probe side is enough.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, avatar, is_active, is_email_verified, \
         created_at, updated_at FROM users WHERE email = LOWER($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Persists the profile fields touched by the update endpoint.
pub async fn update_profile(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE users SET name = $1, email = $2, avatar = $3, updated_at = $4 WHERE id = $5",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.avatar)
    .bind(user.updated_at)
    .bind(&user.id)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Soft delete. The row stays for audit and foreign keys; the account
/// simply stops authenticating.
pub async fn deactivate(pool: &PgPool, user_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET is_active = FALSE, updated_at = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await
        .map(|_| ())
}
