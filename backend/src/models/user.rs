//! Models that represent user accounts and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Database representation of a user account.
///
/// Deliberately not `Serialize`: clients only ever see [`UserProfile`],
/// which omits the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, stored lowercased.
    pub email: String,
    /// Bcrypt hash of the user's password.
    pub password_hash: String,
    /// Optional avatar URL.
    pub avatar: Option<String>,
    /// Soft-delete flag; inactive users cannot authenticate.
    pub is_active: bool,
    /// Whether the email address has been verified.
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Constructs a new active user with a freshly generated identifier.
    /// The email is normalized to lowercase so the unique index enforces
    /// uniqueness case-insensitively.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email: email.trim().to_lowercase(),
            password_hash,
            avatar: None,
            is_active: true,
            is_email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public-facing representation of a user returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            is_active: user.is_active,
            is_email_verified: user.is_email_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Payload for creating a new account.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password must be at least 6 characters long"
    ))]
    pub password: String,
}

/// Credentials submitted by a user attempting to authenticate.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

/// Payload for updating portions of the current user's profile.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(max = 500, message = "Avatar URL must be at most 500 characters"))]
    pub avatar: Option<String>,
}

/// Body returned after a successful registration or login. The refresh
/// token travels only in an HttpOnly cookie, never in this body.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Body returned by the refresh endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Aggregate statistics for the current user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_products: i64,
    pub active_products: i64,
    pub member_since: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
