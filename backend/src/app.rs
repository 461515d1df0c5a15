//! Router assembly shared by the server binary and the integration tests.

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, handlers, middleware as app_middleware, state::AppState};

pub fn build_app(state: AppState) -> Router {
    // Public routes (no auth)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/v1", get(handlers::health::api_info))
        .route("/api/v1/auth/register", post(handlers::auth::register))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route("/api/v1/auth/refresh", post(handlers::auth::refresh));

    // Protected routes (bearer token required)
    let protected_routes = Router::new()
        .route("/api/v1/auth/logout", post(handlers::auth::logout))
        .route("/api/v1/auth/me", get(handlers::auth::me))
        .route(
            "/api/v1/users/me",
            get(handlers::users::get_profile)
                .put(handlers::users::update_profile)
                .delete(handlers::users::delete_account),
        )
        .route("/api/v1/users/me/stats", get(handlers::users::get_stats))
        .route(
            "/api/v1/products",
            post(handlers::products::create_product).get(handlers::products::list_products),
        )
        .route(
            "/api/v1/products/stats/overview",
            get(handlers::products::get_product_stats),
        )
        .route(
            "/api/v1/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            app_middleware::auth,
        ));

    // Compose app with shared layers (request id/trace/CORS) and state
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(app_middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
