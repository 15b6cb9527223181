//! Shared helpers for HTTP-level tests. Requests go straight to the router via
//! `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pizza_restaurants::{app, ensure_tables, AppState};
use sqlx::PgPool;
use tower::ServiceExt;

/// Create the schema in the per-test database.
pub async fn setup(pool: &PgPool) {
    ensure_tables(pool).await.unwrap();
}

pub fn build_test_app(pool: PgPool) -> Router {
    app(AppState { pool }, 64 * 1024)
}

pub async fn send(pool: &PgPool, request: Request<Body>) -> Response<Body> {
    build_test_app(pool.clone()).oneshot(request).await.unwrap()
}

pub async fn get(pool: &PgPool, uri: &str) -> Response<Body> {
    send(pool, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(pool: &PgPool, uri: &str) -> Response<Body> {
    send(pool, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(pool: &PgPool, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(pool, uri, body.to_string()).await
}

pub async fn post_raw(pool: &PgPool, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(pool, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn insert_restaurant(pool: &PgPool, name: &str, address: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO restaurants (name, address) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(address)
        .fetch_one(pool)
        .await
        .unwrap();
    id
}

pub async fn insert_pizza(pool: &PgPool, name: &str, ingredients: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("INSERT INTO pizzas (name, ingredients) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(ingredients)
        .fetch_one(pool)
        .await
        .unwrap();
    id
}

pub async fn insert_listing(pool: &PgPool, price: f64, pizza_id: i64, restaurant_id: i64) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(price)
    .bind(pizza_id)
    .bind(restaurant_id)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}
