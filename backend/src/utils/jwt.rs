use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claim set shared by both token classes. Which secret signed the token
/// is what distinguishes an access token from a refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub exp: i64, // expiration time
    pub iat: i64, // issued at
}

impl Claims {
    pub fn new(user_id: String, email: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            email,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Signs a short-lived access token. Stateless: validity is purely
/// signature plus expiry, no server-side record.
pub fn create_access_token(
    user_id: String,
    email: String,
    secret: &str,
    expiration_minutes: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(user_id, email, Duration::minutes(expiration_minutes as i64));
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

/// Signs a refresh token with the refresh secret and a longer TTL. The
/// caller is responsible for persisting the matching ledger row.
pub fn create_refresh_token(
    user_id: String,
    email: String,
    secret: &str,
    expiration_days: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(user_id, email, Duration::days(expiration_days as i64));
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

/// Verifies signature and expiry against the given secret. Any failure
/// (bad signature, expired, malformed) collapses to `None`; callers treat
/// that as "unauthenticated" rather than an error to propagate.
pub fn verify_token(token: &str, secret: &str) -> Option<Claims> {
    let validation = Validation::default();
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_roundtrip_preserves_claims() {
        let token = create_access_token("user-123".into(), "a@x.com".into(), "secret", 15)
            .expect("create token");
        let claims = verify_token(&token, "secret").expect("verify token");
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let token = create_access_token("user-123".into(), "a@x.com".into(), "secret", 15)
            .expect("create token");
        assert!(verify_token(&token, "other-secret").is_none());
    }

    #[test]
    fn refresh_token_does_not_verify_against_access_secret() {
        let token =
            create_refresh_token("user-123".into(), "a@x.com".into(), "refresh-secret", 7)
                .expect("create token");
        assert!(verify_token(&token, "access-secret").is_none());
        assert!(verify_token(&token, "refresh-secret").is_some());
    }

    #[test]
    fn expired_token_fails_verification() {
        // Signs a claim set that expired well past the default leeway.
        let claims = Claims::new("user-123".into(), "a@x.com".into(), Duration::minutes(-10));
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_ref()),
        )
        .expect("encode");
        assert!(verify_token(&token, "secret").is_none());
    }

    #[test]
    fn garbage_input_fails_verification() {
        assert!(verify_token("not-a-jwt", "secret").is_none());
        assert!(verify_token("", "secret").is_none());
    }
}
