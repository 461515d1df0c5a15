mod support;

use axum::http::{header, HeaderMap, HeaderValue};
use catalog_backend::{
    error::AppError,
    handlers::auth::{ensure_password_matches, refresh_token_from_cookie},
    utils::password::hash_password,
};

use support::test_config;

#[test]
fn login_succeeds_when_password_matches_without_db() {
    let password_hash = hash_password("correct-horse-battery-staple", 4).expect("hash password");
    ensure_password_matches(
        "correct-horse-battery-staple",
        &password_hash,
        "Invalid email or password",
    )
    .expect("passwords should match");
}

#[test]
fn login_rejects_invalid_password_without_db() {
    let password_hash = hash_password("expected-secret", 4).expect("hash password");
    let err = ensure_password_matches("wrong-secret", &password_hash, "Invalid email or password")
        .expect_err("mismatched password should fail");
    match err {
        AppError::Unauthorized(message) => {
            // Identical to the unknown-user message so responses never
            // reveal whether the email exists.
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[test]
fn refresh_token_is_read_from_the_configured_cookie() {
    let config = test_config();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("a=1; refresh_token=tok-123; b=2"),
    );
    assert_eq!(
        refresh_token_from_cookie(&headers, &config).as_deref(),
        Some("tok-123")
    );

    let empty = HeaderMap::new();
    assert!(refresh_token_from_cookie(&empty, &config).is_none());
}

#[test]
fn refresh_token_cookie_name_follows_config() {
    let mut config = test_config();
    config.refresh_cookie_name = "session_refresh".to_string();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("refresh_token=ignored; session_refresh=tok-456"),
    );
    assert_eq!(
        refresh_token_from_cookie(&headers, &config).as_deref(),
        Some("tok-456")
    );
}
