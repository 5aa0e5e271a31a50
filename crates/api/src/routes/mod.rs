//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                 - Welcome message
//! GET    /health           - Health check
//!
//! # Products
//! GET    /products         - List products
//! POST   /products         - Create product
//! GET    /products/{id}    - Get product
//! PUT    /products/{id}    - Partially update product
//! DELETE /products/{id}    - Delete product (204, empty body)
//!
//! # Users
//! GET    /users            - List users
//! POST   /users            - Create user
//! GET    /users/{id}       - Get user
//! PUT    /users/{id}       - Partially update user
//! DELETE /users/{id}       - Delete user (200, message body)
//! ```

pub mod home;
pub mod products;
pub mod users;

use axum::{Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// A bare `{"message": ...}` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route(
            "/{id}",
            get(users::show).put(users::update).delete(users::delete),
        )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::root))
        .route("/health", get(home::health))
        .nest("/products", product_routes())
        .nest("/users", user_routes())
        .fallback(home::not_found)
        .method_not_allowed_fallback(home::method_not_allowed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::ApiConfig;
    use crate::middleware::REQUEST_ID_HEADER;
    use crate::state::AppState;

    fn app_with(config: ApiConfig) -> axum::Router {
        crate::app(AppState::new(config))
    }

    fn app() -> axum::Router {
        app_with(ApiConfig::default())
    }

    async fn send(
        app: &axum::Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(
        app: &axum::Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let app = app();

        let (status, body) = send_json(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Welcome to the Product CRUD API" }));

        let (status, body) = send_json(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_fresh_instance_listing() {
        let app = app();

        let (status, products) = send_json(&app, Method::GET, "/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(products.as_array().unwrap().len(), 3);
        assert_eq!(products[0]["id"], 1);
        assert_eq!(products[0]["name"], "Wireless Headphones");

        let (status, users) = send_json(&app, Method::GET, "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(users, json!([]));
    }

    #[tokio::test]
    async fn test_unseeded_instance_has_no_products() {
        let app = app_with(ApiConfig {
            seed_sample_data: false,
            ..ApiConfig::default()
        });

        let (_, products) = send_json(&app, Method::GET, "/products", None).await;
        assert_eq!(products, json!([]));
    }

    #[tokio::test]
    async fn test_create_product_applies_defaults() {
        let app = app();

        let (status, product) = send_json(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "X", "description": "Y", "price": 10, "category": "Z" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(product["id"], 4);
        assert_eq!(product["tags"], json!([]));
        assert_eq!(product["in_stock"], true);
        assert_eq!(product["price"], 10.0);
        assert!(product["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let app = app();

        let (_, created) = send_json(
            &app,
            Method::POST,
            "/products",
            Some(json!({
                "name": "Original Product",
                "description": "Original description",
                "price": 25.0,
                "category": "Original",
                "tags": ["original"]
            })),
        )
        .await;
        let uri = format!("/products/{}", created["id"]);

        let (status, fetched) = send_json(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) =
            send_json(&app, Method::PUT, &uri, Some(json!({ "price": 30.0 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["price"], 30.0);
        assert_eq!(updated["name"], created["name"]);
        assert_eq!(updated["tags"], created["tags"]);
        assert_eq!(updated["created_at"], created["created_at"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send_json(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Product not found" }));

        let (status, _) = send_json(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_delete_returns_message() {
        let app = app();

        let (_, user) = send_json(
            &app,
            Method::POST,
            "/users",
            Some(json!({ "name": "Test User", "email": "test@example.com", "password": "password123" })),
        )
        .await;
        assert_eq!(user["id"], 1);
        assert_eq!(user["password"], "password123");

        let uri = format!("/users/{}", user["id"]);
        let (status, body) = send_json(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User deleted successfully" }));

        let (status, body) = send_json(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "User not found" }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_unprocessable() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("invalid json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unprocessable() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/users")
            .body(Body::from(r#"{"name":"a","email":"b","password":"c"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_fields_are_unprocessable() {
        let app = app();
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "Incomplete Product" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    }

    #[tokio::test]
    async fn test_non_integer_path_is_unprocessable() {
        let app = app();
        let (status, body) = send_json(&app, Method::GET, "/products/abc", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["path", "id"]));
    }

    #[tokio::test]
    async fn test_edge_ids_are_not_found() {
        let app = app();
        for uri in ["/products/-1", "/products/0", "/products/999999999"] {
            let (status, _) = send_json(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
        let (status, _) =
            send_json(&app, Method::PUT, "/users/999", Some(json!({ "name": "N" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lenient_mode_accepts_empty_name_and_negative_price() {
        let app = app();
        let (status, _) = send_json(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "", "description": "d", "price": -10, "category": "c" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_before_store() {
        let app = app_with(ApiConfig {
            strict_validation: true,
            ..ApiConfig::default()
        });

        let (status, body) = send_json(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "name": "", "description": "d", "price": -10, "category": "c" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"].as_array().unwrap().len(), 2);

        let (_, products) = send_json(&app, Method::GET, "/products", None).await;
        assert_eq!(products.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_path_has_json_detail() {
        let app = app();
        for uri in ["/products/", "/products/1/", "/nope"] {
            let (status, body) = send_json(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({ "detail": "Not Found" }));
        }
    }

    #[tokio::test]
    async fn test_wrong_method_has_json_detail() {
        let app = app();
        let (status, body) = send_json(&app, Method::PATCH, "/products/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

        let (status, _) = send_json(&app, Method::DELETE, "/users", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_oversized_request_id_is_replaced() {
        let app = app();
        let sent = "a".repeat(200);

        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, sent.as_str())
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let echoed = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_ne!(echoed, sent);
        assert!(uuid::Uuid::parse_str(echoed).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let app = app();

        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "req-123")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }
}
