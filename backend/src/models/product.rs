//! Models for products and the listing query surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules;

/// Default page size for product listings.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
/// Hard cap applied to the `limit` query parameter.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Database representation of a product owned by a single user.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub images: Vec<String>,
    /// Soft-delete flag; inactive products are invisible to the API.
    pub is_active: bool,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
        images: Vec<String>,
        user_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            price,
            images,
            is_active: true,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public-facing representation of a product.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub images: Vec<String>,
    pub is_active: bool,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            images: product.images,
            is_active: product.is_active,
            user_id: product.user_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(
        min = 2,
        max = 255,
        message = "Product name must be at least 2 characters long"
    ))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Payload for partially updating an existing product.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(
        min = 2,
        max = 255,
        message = "Product name must be at least 2 characters long"
    ))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be a positive number"))]
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
}

/// Query parameters for the product listing endpoint.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    pub page: i64,
    /// Items per page; values above 100 are clamped.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: i64,
    /// Case-insensitive substring match over name and description.
    pub search: Option<String>,
    /// Sort field: createdAt, updatedAt, name or price.
    #[serde(default = "default_sort_by")]
    #[validate(custom(function = rules::validate_sort_field))]
    pub sort_by: String,
    /// Sort direction: ASC or DESC.
    #[serde(default = "default_sort_order")]
    #[validate(custom(function = rules::validate_sort_order))]
    pub sort_order: String,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

fn default_sort_by() -> String {
    "createdAt".to_string()
}

fn default_sort_order() -> String {
    "DESC".to_string()
}

impl ProductQuery {
    /// Returns the page number, floored at 1.
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    /// Returns a clamped limit value (1..=100).
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// Maps the camelCase API sort field onto its column name. Unknown
    /// fields are rejected by validation before this is reached; the
    /// fallback keeps the mapping total.
    pub fn sort_column(&self) -> &'static str {
        match self.sort_by.as_str() {
            "name" => "name",
            "price" => "price",
            "updatedAt" => "updated_at",
            _ => "created_at",
        }
    }

    pub fn sort_direction(&self) -> &'static str {
        if self.sort_order.eq_ignore_ascii_case("ASC") {
            "ASC"
        } else {
            "DESC"
        }
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
        }
    }
}

/// Per-user product counters for the stats endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: i64,
    pub active_products: i64,
    pub inactive_products: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_to_the_maximum() {
        let query = ProductQuery {
            limit: 500,
            ..ProductQuery::default()
        };
        assert_eq!(query.limit(), MAX_PAGE_LIMIT);

        let query = ProductQuery {
            limit: 25,
            ..ProductQuery::default()
        };
        assert_eq!(query.limit(), 25);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let query = ProductQuery {
            page: 3,
            limit: 10,
            ..ProductQuery::default()
        };
        assert_eq!(query.offset(), 20);

        assert_eq!(ProductQuery::default().offset(), 0);
    }

    #[test]
    fn sort_column_is_whitelisted() {
        let mut query = ProductQuery::default();
        assert_eq!(query.sort_column(), "created_at");

        query.sort_by = "price".into();
        assert_eq!(query.sort_column(), "price");

        query.sort_by = "updatedAt".into();
        assert_eq!(query.sort_column(), "updated_at");

        // Unknown fields fall back rather than reaching the SQL string.
        query.sort_by = "password_hash".into();
        assert_eq!(query.sort_column(), "created_at");
    }

    #[test]
    fn sort_direction_defaults_to_desc() {
        let mut query = ProductQuery::default();
        assert_eq!(query.sort_direction(), "DESC");

        query.sort_order = "asc".into();
        assert_eq!(query.sort_direction(), "ASC");

        query.sort_order = "sideways".into();
        assert_eq!(query.sort_direction(), "DESC");
    }

    #[test]
    fn query_validation_rejects_unknown_sort_field() {
        let query = ProductQuery {
            sort_by: "password_hash".into(),
            ..ProductQuery::default()
        };
        assert!(query.validate().is_err());

        let query = ProductQuery {
            sort_order: "UP".into(),
            ..ProductQuery::default()
        };
        assert!(query.validate().is_err());

        assert!(ProductQuery::default().validate().is_ok());
    }

    #[test]
    fn create_request_rejects_negative_price_and_short_name() {
        let request = CreateProductRequest {
            name: "iPhone 15 Pro".into(),
            description: None,
            price: -1.0,
            images: vec![],
        };
        assert!(request.validate().is_err());

        let request = CreateProductRequest {
            name: "x".into(),
            description: None,
            price: 999.99,
            images: vec![],
        };
        assert!(request.validate().is_err());

        let request = CreateProductRequest {
            name: "iPhone 15 Pro".into(),
            description: Some("Latest iPhone".into()),
            price: 999.99,
            images: vec![],
        };
        assert!(request.validate().is_ok());
    }
}
