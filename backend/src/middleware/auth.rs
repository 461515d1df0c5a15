use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, repositories::users, state::AppState, utils::jwt::verify_token};

/// Request authorizer for protected routes.
///
/// Extracts the bearer access token, verifies it against the access
/// secret, resolves the subject to an active user and attaches both the
/// claims and the user to the request extensions. Any failure rejects
/// the request before the downstream handler runs. Runs on every request;
/// nothing is cached across requests.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::unauthorized("Access token not provided"))?;

    let claims = verify_token(token, &state.config.jwt_secret)
        .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))?;

    let user = users::find_active_by_id(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

pub fn parse_bearer_token(header: &str) -> Option<&str> {
    if let Some(rest) = header.strip_prefix("Bearer ") {
        return Some(rest);
    }
    if let Some(rest) = header.strip_prefix("bearer ") {
        return Some(rest);
    }
    if let Some(space_idx) = header.find(' ') {
        let (scheme, rest) = header.split_at(space_idx);
        if scheme.eq_ignore_ascii_case("bearer") {
            return Some(rest.trim_start());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_token_accepts_case_variants() {
        assert_eq!(parse_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("BEARER abc"), Some("abc"));
    }

    #[test]
    fn parse_bearer_token_rejects_other_schemes() {
        assert!(parse_bearer_token("Basic abc").is_none());
        assert!(parse_bearer_token("abc").is_none());
        assert!(parse_bearer_token("").is_none());
    }
}
