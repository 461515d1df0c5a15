//! Router-level checks that the product surface sits behind the
//! authorizer, plus the public API info endpoint.

mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use support::{response_json, test_app};

#[tokio::test]
async fn product_routes_require_authentication() {
    for (method, uri) in [
        ("GET", "/api/v1/products"),
        ("POST", "/api/v1/products"),
        ("GET", "/api/v1/products/stats/overview"),
        ("GET", "/api/v1/products/some-id"),
        ("PUT", "/api/v1/products/some-id"),
        ("DELETE", "/api/v1/products/some-id"),
    ] {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should be protected"
        );
    }
}

#[tokio::test]
async fn user_routes_require_authentication() {
    for (method, uri) in [
        ("GET", "/api/v1/users/me"),
        ("PUT", "/api/v1/users/me"),
        ("DELETE", "/api/v1/users/me"),
        ("GET", "/api/v1/users/me/stats"),
    ] {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should be protected"
        );
    }
}

#[tokio::test]
async fn api_info_endpoint_is_public() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["endpoints"]["products"], "/api/v1/products");
}
