#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, Response, header::CONTENT_TYPE};
use scorekeeper_web::routes;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use storage::Database;
use tower::ServiceExt;

/// An in-memory store on a single long-lived connection.
pub async fn empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// The full application over an in-memory store with the reference schema.
pub async fn build_test_app() -> Router {
    let pool = empty_pool().await;
    sqlx::raw_sql(include_str!("../../../storage/schema.sql"))
        .execute(&pool)
        .await
        .unwrap();

    routes::configure(Database::from_pool(pool))
}

/// The full application over a store without any tables, so that every
/// query fails.
pub async fn build_broken_app() -> Router {
    routes::configure(Database::from_pool(empty_pool().await))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
