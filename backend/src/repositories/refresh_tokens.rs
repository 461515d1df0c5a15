//! Repository functions for the refresh-token ledger.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::refresh_token::RefreshTokenRecord;

pub async fn insert(pool: &PgPool, record: &RefreshTokenRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO refresh_tokens (id, token, user_id, expires_at, is_active, \
         ip_address, user_agent, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&record.id)
    .bind(&record.token)
    .bind(&record.user_id)
    .bind(record.expires_at)
    .bind(record.is_active)
    .bind(&record.ip_address)
    .bind(&record.user_agent)
    .bind(record.created_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Fetches the ledger row that makes a presented refresh token usable:
/// matching value, still active, not yet expired.
pub async fn find_active(
    pool: &PgPool,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Option<RefreshTokenRecord>, sqlx::Error> {
    sqlx::query_as::<_, RefreshTokenRecord>(
        "SELECT id, token, user_id, expires_at, is_active, ip_address, user_agent, created_at \
         FROM refresh_tokens WHERE token = $1 AND is_active = TRUE AND expires_at > $2",
    )
    .bind(token)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Soft revocation: flips `is_active` off and reports how many rows
/// changed. Idempotent; revoking an unknown or already-inactive token
/// touches zero rows.
pub async fn deactivate(pool: &PgPool, token: &str) -> Result<u64, sqlx::Error> {
    sqlx::query("UPDATE refresh_tokens SET is_active = FALSE WHERE token = $1 AND is_active = TRUE")
        .bind(token)
        .execute(pool)
        .await
        .map(|result| result.rows_affected())
}

/// Revokes every active token a user holds (account deletion).
pub async fn deactivate_all_for_user(pool: &PgPool, user_id: &str) -> Result<u64, sqlx::Error> {
    sqlx::query(
        "UPDATE refresh_tokens SET is_active = FALSE WHERE user_id = $1 AND is_active = TRUE",
    )
    .bind(user_id)
    .execute(pool)
    .await
    .map(|result| result.rows_affected())
}

/// Physically removes rows already past expiry. Only the cleanup binary
/// calls this; request handlers never delete ledger rows.
pub async fn delete_expired(pool: &PgPool, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= $1")
        .bind(now)
        .execute(pool)
        .await
        .map(|result| result.rows_affected())
}
