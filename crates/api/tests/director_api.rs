//! HTTP-level integration tests for the `/directors` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/directors/", json!({"name": "Nolan"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["id"].is_number());
    assert_eq!(body["name"], "Nolan");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_without_name_stores_null(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/directors/", json!({})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_directors_returns_all(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", json!({"name": "Nolan"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", json!({"name": "Villeneuve"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/directors/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let listing = body.as_array().unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0]["name"], "Nolan");
    assert_eq!(listing[1]["name"], "Villeneuve");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_director_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/directors/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Director with id 999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn replace_director_returns_204_and_is_destructive(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/directors/", json!({"name": "Nolan"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/directors/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The omitted name was overwritten with NULL.
    let app = common::build_test_app(pool);
    let body = body_json(get(app, &format!("/directors/{id}")).await).await;
    assert_eq!(body["name"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_director_then_get_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/directors/", json!({"name": "Nolan"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
