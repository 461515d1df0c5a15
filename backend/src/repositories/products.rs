//! Repository functions for products, including the filtered listing.

use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::product::{Product, ProductQuery};

pub async fn insert(pool: &PgPool, product: &Product) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO products (id, name, description, price, images, is_active, user_id, \
         created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.images)
    .bind(product.is_active)
    .bind(&product.user_id)
    .bind(product.created_at)
    .bind(product.updated_at)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Fetches a product regardless of owner; the handler decides between
/// NotFound and Forbidden so the two cases stay distinguishable.
pub async fn find_active_by_id(
    pool: &PgPool,
    product_id: &str,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, images, is_active, user_id, created_at, \
         updated_at FROM products WHERE id = $1 AND is_active = TRUE",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await
}

pub async fn update(pool: &PgPool, product: &Product) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE products SET name = $1, description = $2, price = $3, images = $4, \
         updated_at = $5 WHERE id = $6",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.images)
    .bind(product.updated_at)
    .bind(&product.id)
    .execute(pool)
    .await
    .map(|_| ())
}

/// Soft delete; the row never leaves the table.
pub async fn soft_delete(pool: &PgPool, product_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE products SET is_active = FALSE, updated_at = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(product_id)
        .execute(pool)
        .await
        .map(|_| ())
}

/// Lists a user's active products with optional substring search,
/// whitelisted sorting and pagination. Returns the page plus the total
/// count matching the same filter.
pub async fn list_for_user(
    pool: &PgPool,
    user_id: &str,
    query: &ProductQuery,
) -> Result<(Vec<Product>, i64), sqlx::Error> {
    let pattern = query
        .search
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("%{}%", s.trim()));

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT id, name, description, price, images, is_active, user_id, created_at, \
         updated_at FROM products WHERE user_id = ",
    );
    builder.push_bind(user_id);
    builder.push(" AND is_active = TRUE");
    if let Some(pattern) = &pattern {
        builder.push(" AND (name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(")");
    }
    // sort_column/sort_direction only ever yield whitelisted identifiers,
    // so interpolating them here cannot inject.
    builder.push(format!(
        " ORDER BY {} {}",
        query.sort_column(),
        query.sort_direction()
    ));
    builder.push(" LIMIT ");
    builder.push_bind(query.limit());
    builder.push(" OFFSET ");
    builder.push_bind(query.offset());

    let products = builder
        .build_query_as::<Product>()
        .fetch_all(pool)
        .await?;

    let mut count_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM products WHERE user_id = ");
    count_builder.push_bind(user_id);
    count_builder.push(" AND is_active = TRUE");
    if let Some(pattern) = &pattern {
        count_builder.push(" AND (name ILIKE ");
        count_builder.push_bind(pattern.clone());
        count_builder.push(" OR description ILIKE ");
        count_builder.push_bind(pattern.clone());
        count_builder.push(")");
    }
    let total: i64 = count_builder
        .build_query_scalar()
        .fetch_one(pool)
        .await?;

    Ok((products, total))
}

/// Total and active product counts for a user, in one round trip.
pub async fn count_for_user(pool: &PgPool, user_id: &str) -> Result<(i64, i64), sqlx::Error> {
    let row: (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE is_active = TRUE) \
         FROM products WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
