use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub jwt_expiration_minutes: u64,
    pub refresh_token_expiration_days: u64,
    pub bcrypt_cost: u32,
    pub refresh_cookie_name: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost:5432/catalog".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        // Separate secret per token class: a leaked access-token secret must
        // not be enough to forge refresh tokens, and vice versa.
        let jwt_refresh_secret = env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| "your-refresh-secret-change-this-in-production".to_string());

        let jwt_expiration_minutes = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15);

        let refresh_token_expiration_days = env::var("REFRESH_TOKEN_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);

        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "12".to_string())
            .parse()
            .unwrap_or(12);

        let refresh_cookie_name =
            env::var("REFRESH_COOKIE_NAME").unwrap_or_else(|_| "refresh_token".to_string());

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|value| value == "true" || value == "1")
            .unwrap_or(false);

        Ok(Config {
            database_url,
            port,
            jwt_secret,
            jwt_refresh_secret,
            jwt_expiration_minutes,
            refresh_token_expiration_days,
            bcrypt_cost,
            refresh_cookie_name,
            cookie_secure,
        })
    }
}
