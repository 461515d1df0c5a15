use axum::{
    extract::{Extension, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    config::Config,
    error::AppError,
    models::{
        refresh_token::RefreshTokenRecord,
        user::{AuthResponse, LoginRequest, RefreshResponse, RegisterRequest, User, UserProfile},
    },
    repositories::{refresh_tokens, users},
    response,
    state::AppState,
    utils::{
        cookies::{
            build_auth_cookie, build_clear_cookie, extract_cookie_value, CookieOptions, SameSite,
            REFRESH_COOKIE_PATH,
        },
        jwt::{create_access_token, create_refresh_token, verify_token},
        password::{hash_password, verify_password},
    },
    validation::validate_payload,
};

/// Shared by the missing-user and wrong-password paths so responses do
/// not reveal which one happened.
const INVALID_CREDENTIALS: &str = "Invalid email or password";
const REFRESH_TOKEN_INVALID: &str = "Invalid or expired refresh token";

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;

    if users::find_by_email(&state.pool, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("User with this email already exists"));
    }

    let password_hash = hash_password(&payload.password, state.config.bcrypt_cost)?;
    let user = User::new(payload.name, payload.email, password_hash);
    users::insert(&state.pool, &user).await?;

    // No transaction spans the user insert and the ledger insert; a crash
    // in between leaves a registered user with no session, and the caller
    // recovers by logging in.
    let (access_token, refresh_cookie) = issue_session(&state, &user).await?;

    let body = response::success(
        AuthResponse {
            access_token,
            user: UserProfile::from(user),
        },
        "User registered successfully",
    );

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, refresh_cookie)],
        body,
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;

    let user = users::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    if !user.is_active {
        return Err(AppError::unauthorized("Account is deactivated"));
    }

    ensure_password_matches(&payload.password, &user.password_hash, INVALID_CREDENTIALS)?;

    let (access_token, refresh_cookie) = issue_session(&state, &user).await?;

    let body = response::success(
        AuthResponse {
            access_token,
            user: UserProfile::from(user),
        },
        "User logged in successfully",
    );

    Ok((StatusCode::OK, [(header::SET_COOKIE, refresh_cookie)], body))
}

/// Mints a fresh access token from the refresh cookie. The refresh token
/// itself is not rotated: the same value stays valid until its original
/// expiry or an explicit logout.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let token = refresh_token_from_cookie(&headers, &state.config)
        .ok_or_else(|| AppError::unauthorized(REFRESH_TOKEN_INVALID))?;

    let claims = verify_token(&token, &state.config.jwt_refresh_secret)
        .ok_or_else(|| AppError::unauthorized(REFRESH_TOKEN_INVALID))?;

    let record = refresh_tokens::find_active(&state.pool, &token, Utc::now())
        .await?
        .ok_or_else(|| AppError::unauthorized(REFRESH_TOKEN_INVALID))?;

    let access_token = create_access_token(
        record.user_id,
        claims.email,
        &state.config.jwt_secret,
        state.config.jwt_expiration_minutes,
    )?;

    Ok(response::success(
        RefreshResponse { access_token },
        "Token refreshed successfully",
    ))
}

/// Ends the session named by the refresh cookie. Idempotent: a missing,
/// unknown or already-revoked token still yields success, since the
/// caller's intent is satisfied either way.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = refresh_token_from_cookie(&headers, &state.config) {
        refresh_tokens::deactivate(&state.pool, &token).await?;
    }

    let clear_cookie = build_clear_cookie(
        &state.config.refresh_cookie_name,
        REFRESH_COOKIE_PATH,
        cookie_options(&state.config),
    );

    Ok((
        [(header::SET_COOKIE, clear_cookie)],
        response::message_only("User logged out successfully"),
    ))
}

pub async fn me(Extension(user): Extension<User>) -> impl IntoResponse {
    response::success(
        UserProfile::from(user),
        "User profile retrieved successfully",
    )
}

pub fn ensure_password_matches(
    candidate: &str,
    expected_hash: &str,
    unauthorized_message: &'static str,
) -> Result<(), AppError> {
    let matches = verify_password(candidate, expected_hash)?;
    if matches {
        Ok(())
    } else {
        Err(AppError::unauthorized(unauthorized_message))
    }
}

pub fn refresh_token_from_cookie(headers: &HeaderMap, config: &Config) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, &config.refresh_cookie_name))
}

fn cookie_options(config: &Config) -> CookieOptions {
    CookieOptions {
        secure: config.cookie_secure,
        same_site: SameSite::Lax,
    }
}

/// Issues the access/refresh token pair for a user and persists exactly
/// one ledger row for the refresh token. Returns the access token and
/// the Set-Cookie value carrying the refresh token.
async fn issue_session(state: &AppState, user: &User) -> Result<(String, String), AppError> {
    let config = &state.config;

    let access_token = create_access_token(
        user.id.clone(),
        user.email.clone(),
        &config.jwt_secret,
        config.jwt_expiration_minutes,
    )?;

    let refresh_token = create_refresh_token(
        user.id.clone(),
        user.email.clone(),
        &config.jwt_refresh_secret,
        config.refresh_token_expiration_days,
    )?;

    let record = RefreshTokenRecord::new(
        refresh_token.clone(),
        user.id.clone(),
        config.refresh_token_expiration_days,
    );
    refresh_tokens::insert(&state.pool, &record).await?;

    let cookie = build_auth_cookie(
        &config.refresh_cookie_name,
        &refresh_token,
        std::time::Duration::from_secs(config.refresh_token_expiration_days * 24 * 60 * 60),
        REFRESH_COOKIE_PATH,
        cookie_options(config),
    );

    Ok((access_token, cookie))
}
