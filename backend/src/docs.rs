#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    models::{
        product::{
            CreateProductRequest, ProductQuery, ProductResponse, ProductStats,
            UpdateProductRequest,
        },
        user::{
            AuthResponse, LoginRequest, RefreshResponse, RegisterRequest, UpdateUserRequest,
            UserProfile, UserStats,
        },
    },
    response::PageMeta,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        register_doc,
        login_doc,
        refresh_doc,
        logout_doc,
        me_doc,
        user_profile_doc,
        user_update_doc,
        user_delete_doc,
        user_stats_doc,
        product_create_doc,
        product_list_doc,
        product_stats_doc,
        product_get_doc,
        product_update_doc,
        product_delete_doc,
        health_doc
    ),
    components(
        schemas(
            // auth
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            RefreshResponse,
            // users
            UserProfile,
            UpdateUserRequest,
            UserStats,
            // products
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            ProductStats,
            ProductQuery,
            // envelope
            PageMeta
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Registration, login and token lifecycle"),
        (name = "Users", description = "Profile management"),
        (name = "Products", description = "Ownership-scoped product CRUD"),
        (name = "Application", description = "Health and API info")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 409, description = "Email already exists"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Auth",
    security(())
)]
fn register_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    responses(
        (status = 200, description = "New access token", body = RefreshResponse),
        (status = 401, description = "Invalid or expired refresh token")
    ),
    tag = "Auth",
    security(())
)]
fn refresh_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses((status = 200, description = "Logged out")),
    tag = "Auth"
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses((status = 200, description = "Current user", body = UserProfile)),
    tag = "Auth"
)]
fn me_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses((status = 200, description = "Current user profile", body = UserProfile)),
    tag = "Users"
)]
fn user_profile_doc() {}

#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 409, description = "Email already exists")
    ),
    tag = "Users"
)]
fn user_update_doc() {}

#[utoipa::path(
    delete,
    path = "/api/v1/users/me",
    responses((status = 200, description = "Account deactivated")),
    tag = "Users"
)]
fn user_delete_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/users/me/stats",
    responses((status = 200, description = "User statistics", body = UserStats)),
    tag = "Users"
)]
fn user_stats_doc() {}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 422, description = "Validation failed")
    ),
    tag = "Products"
)]
fn product_create_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductQuery),
    responses((status = 200, description = "Paginated product list", body = [ProductResponse])),
    tag = "Products"
)]
fn product_list_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/products/stats/overview",
    responses((status = 200, description = "Product counters", body = ProductStats)),
    tag = "Products"
)]
fn product_stats_doc() {}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product detail", body = ProductResponse),
        (status = 403, description = "Owned by another user"),
        (status = 404, description = "Not found")
    ),
    tag = "Products"
)]
fn product_get_doc() {}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 403, description = "Owned by another user"),
        (status = 404, description = "Not found")
    ),
    tag = "Products"
)]
fn product_update_doc() {}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product soft-deleted"),
        (status = 403, description = "Owned by another user"),
        (status = 404, description = "Not found")
    ),
    tag = "Products"
)]
fn product_delete_doc() {}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy")),
    tag = "Application",
    security(())
)]
fn health_doc() {}
