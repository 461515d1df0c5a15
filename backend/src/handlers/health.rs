use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::response::{self, ApiResponse};

pub async fn health() -> Json<ApiResponse<Value>> {
    response::success(
        json!({
            "status": "OK",
            "timestamp": Utc::now().to_rfc3339(),
        }),
        "Application is running",
    )
}

pub async fn api_info() -> Json<ApiResponse<Value>> {
    response::success(
        json!({
            "name": "Catalog API",
            "version": "1.0.0",
            "description": "API for account management and product CRUD operations",
            "endpoints": {
                "auth": "/api/v1/auth",
                "users": "/api/v1/users",
                "products": "/api/v1/products",
                "docs": "/api/docs",
                "health": "/health",
            },
        }),
        "Catalog API",
    )
}
