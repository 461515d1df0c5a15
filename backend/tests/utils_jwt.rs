use catalog_backend::utils::jwt::{create_access_token, create_refresh_token, verify_token};

#[test]
fn access_token_roundtrip_preserves_identity() {
    let token = create_access_token("user-1".into(), "a@x.com".into(), "access-secret", 15)
        .expect("create access token");
    let claims = verify_token(&token, "access-secret").expect("verify");
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.email, "a@x.com");
}

#[test]
fn token_classes_use_disjoint_secrets() {
    let access = create_access_token("user-1".into(), "a@x.com".into(), "access-secret", 15)
        .expect("create access token");
    let refresh = create_refresh_token("user-1".into(), "a@x.com".into(), "refresh-secret", 7)
        .expect("create refresh token");

    // Neither token class verifies against the other's secret.
    assert!(verify_token(&access, "refresh-secret").is_none());
    assert!(verify_token(&refresh, "access-secret").is_none());

    assert!(verify_token(&access, "access-secret").is_some());
    assert!(verify_token(&refresh, "refresh-secret").is_some());
}

#[test]
fn tampered_token_fails_verification() {
    let token = create_access_token("user-1".into(), "a@x.com".into(), "access-secret", 15)
        .expect("create access token");

    let mut tampered = token.clone();
    // Flip the last character of the signature segment.
    let last = tampered.pop().expect("non-empty token");
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    assert!(verify_token(&tampered, "access-secret").is_none());
}

#[test]
fn refresh_token_outlives_access_token() {
    let access = create_access_token("user-1".into(), "a@x.com".into(), "s", 15).expect("access");
    let refresh = create_refresh_token("user-1".into(), "a@x.com".into(), "s", 7).expect("refresh");

    let access_claims = verify_token(&access, "s").expect("access claims");
    let refresh_claims = verify_token(&refresh, "s").expect("refresh claims");
    assert!(refresh_claims.exp > access_claims.exp);
}
