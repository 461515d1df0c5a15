//! Ledger entries for issued refresh tokens.

use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted record of an issued refresh token.
///
/// A token is usable only while `is_active` and not past `expires_at`.
/// Logout flips `is_active` to false; rows are never deleted by request
/// handlers so revocations stay auditable. Rows already past expiry are
/// garbage-collected by the `token_cleanup` binary.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenRecord {
    pub id: String,
    /// The signed token value as handed to the client.
    pub token: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    pub fn new(token: String, user_id: String, ttl_days: u64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            token,
            user_id,
            expires_at: now + Duration::days(ttl_days as i64),
            is_active: true,
            ip_address: None,
            user_agent: None,
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_active_with_future_expiry() {
        let record = RefreshTokenRecord::new("token-value".into(), "user-1".into(), 7);
        assert!(record.is_active);
        assert!(!record.is_expired());
        assert!(record.expires_at > Utc::now() + Duration::days(6));
    }

    #[test]
    fn record_with_past_expiry_reports_expired() {
        let mut record = RefreshTokenRecord::new("token-value".into(), "user-1".into(), 7);
        record.expires_at = Utc::now() - Duration::minutes(1);
        assert!(record.is_expired());
    }
}
