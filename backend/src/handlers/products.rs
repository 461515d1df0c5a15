use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    error::AppError,
    models::{
        product::{
            CreateProductRequest, Product, ProductQuery, ProductResponse, ProductStats,
            UpdateProductRequest,
        },
        user::User,
    },
    repositories::products,
    response,
    state::AppState,
    validation::validate_payload,
};

pub async fn create_product(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;

    let product = Product::new(
        payload.name,
        payload.description,
        payload.price,
        payload.images,
        user.id,
    );
    products::insert(&state.pool, &product).await?;

    Ok((
        StatusCode::CREATED,
        response::success(
            ProductResponse::from(product),
            "Product created successfully",
        ),
    ))
}

pub async fn list_products(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&query)?;

    let (items, total) = products::list_for_user(&state.pool, &user.id, &query).await?;
    let items: Vec<ProductResponse> = items.into_iter().map(ProductResponse::from).collect();

    Ok(response::paginated(
        items,
        query.page(),
        query.limit(),
        total,
        "Products retrieved successfully",
    ))
}

pub async fn get_product_stats(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let (total_products, active_products) = products::count_for_user(&state.pool, &user.id).await?;

    Ok(response::success(
        ProductStats {
            total_products,
            active_products,
            inactive_products: total_products - active_products,
        },
        "Product statistics retrieved successfully",
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = ensure_owned(products::find_active_by_id(&state.pool, &id).await?, &user.id)?;

    Ok(response::success(
        ProductResponse::from(product),
        "Product retrieved successfully",
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_payload(&payload)?;

    let mut product =
        ensure_owned(products::find_active_by_id(&state.pool, &id).await?, &user.id)?;

    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(description) = payload.description {
        product.description = Some(description);
    }
    if let Some(price) = payload.price {
        product.price = price;
    }
    if let Some(images) = payload.images {
        product.images = images;
    }
    product.updated_at = Utc::now();

    products::update(&state.pool, &product).await?;

    Ok(response::success(
        ProductResponse::from(product),
        "Product updated successfully",
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = ensure_owned(products::find_active_by_id(&state.pool, &id).await?, &user.id)?;

    products::soft_delete(&state.pool, &product.id).await?;

    Ok(response::message_only("Product deleted successfully"))
}

/// Ownership ladder shared by the single-product endpoints: a missing or
/// soft-deleted product is NotFound; a live product owned by someone else
/// is Forbidden. The two stay distinct error kinds.
pub fn ensure_owned(product: Option<Product>, user_id: &str) -> Result<Product, AppError> {
    let product = product.ok_or_else(|| AppError::not_found("Product not found"))?;
    if product.user_id != user_id {
        return Err(AppError::forbidden(
            "You do not have permission to access this product",
        ));
    }
    Ok(product)
}
