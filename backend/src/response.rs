//! Shared response envelope: `{ success, message, data?, meta? }`.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

pub fn success<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        message: message.into(),
        data: Some(data),
        meta: None,
    })
}

/// Success envelope without a data payload (logout and delete responses).
pub fn message_only(message: impl Into<String>) -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse {
        success: true,
        message: message.into(),
        data: None,
        meta: None,
    })
}

pub fn paginated<T: Serialize>(
    data: Vec<T>,
    page: i64,
    limit: i64,
    total: i64,
    message: impl Into<String>,
) -> Json<ApiResponse<Vec<T>>> {
    let total_pages = if limit > 0 {
        (total + limit - 1) / limit
    } else {
        0
    };
    Json(ApiResponse {
        success: true,
        message: message.into(),
        data: Some(data),
        meta: Some(PageMeta {
            page,
            limit,
            total,
            total_pages,
        }),
    })
}
