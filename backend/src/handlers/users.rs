use axum::{
    extract::{Extension, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    error::AppError,
    models::user::{UpdateUserRequest, User, UserProfile, UserStats},
    repositories::{products, refresh_tokens, users},
    response,
    state::AppState,
    validation::validate_payload,
};

/// Re-reads the profile from storage rather than trusting the extension
/// copy, so a concurrent update or deactivation is reflected.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let user = users::find_active_by_id(&state.pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(response::success(
        UserProfile::from(user),
        "User profile retrieved successfully",
    ))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;

    let mut user = users::find_active_by_id(&state.pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if let Some(email) = &payload.email {
        let normalized = email.trim().to_lowercase();
        if normalized != user.email {
            if users::find_by_email(&state.pool, &normalized)
                .await?
                .is_some()
            {
                return Err(AppError::conflict("User with this email already exists"));
            }
            user.email = normalized;
        }
    }
    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(avatar) = payload.avatar {
        user.avatar = Some(avatar);
    }
    user.updated_at = Utc::now();

    users::update_profile(&state.pool, &user).await?;

    Ok(response::success(
        UserProfile::from(user),
        "User profile updated successfully",
    ))
}

/// Soft-deletes the account and revokes every refresh token the user
/// holds, so no session survives the deletion.
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let user = users::find_active_by_id(&state.pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    users::deactivate(&state.pool, &user.id).await?;
    refresh_tokens::deactivate_all_for_user(&state.pool, &user.id).await?;

    Ok(response::message_only("User account deleted successfully"))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let user = users::find_active_by_id(&state.pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let (total_products, active_products) = products::count_for_user(&state.pool, &user.id).await?;

    Ok(response::success(
        UserStats {
            total_products,
            active_products,
            member_since: user.created_at,
            last_updated: user.updated_at,
        },
        "User statistics retrieved successfully",
    ))
}
