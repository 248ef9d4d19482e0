#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use movies_api::{build_router, ensure_tables, memory_pool, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fresh in-memory database with the tables created.
pub async fn test_pool() -> SqlitePool {
    let pool = memory_pool().await.expect("in-memory pool");
    ensure_tables(&pool).await.expect("tables");
    pool
}

/// Build the same router `main.rs` serves.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_router(AppState { pool })
}

pub async fn insert_director(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO director (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("insert director");
}

pub async fn insert_genre(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO genre (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("insert genre");
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn patch_json(app: Router, uri: &str, json: Value) -> Response {
    send(app, Method::PATCH, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a movie and return the id from the `Location` header.
pub async fn create_movie(pool: &SqlitePool, json: Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/movies/", json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    location.trim_start_matches("/movies/").parse().unwrap()
}
