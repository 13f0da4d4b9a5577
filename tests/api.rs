//! End-to-end tests driving the full router against an isolated in-memory store.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use camp_signups::{app, connect, ensure_tables, AppState};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn setup() -> (Router, SqlitePool) {
    let pool = connect("sqlite::memory:").await.unwrap();
    ensure_tables(&pool).await.unwrap();
    for (name, difficulty) in [("Archery", 2), ("Canoeing", 3)] {
        sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
            .bind(name)
            .bind(difficulty)
            .execute(&pool)
            .await
            .unwrap();
    }
    (app(AppState::new(pool.clone())), pool)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_camper(app: &Router, name: &str, age: i64) -> (StatusCode, Value) {
    send(app, Method::POST, "/campers", Some(json!({ "name": name, "age": age }))).await
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

fn validation_errors() -> Value {
    json!({ "errors": ["validation errors"] })
}

#[tokio::test]
async fn end_to_end_camper_signup_flow() {
    let (app, _pool) = setup().await;

    let (status, body) = create_camper(&app, "Alex", 10).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "name": "Alex", "age": 10 }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/signups",
        Some(json!({ "camper_id": 1, "activity_id": 1, "time": 14 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "camper_id": 1,
            "activity_id": 1,
            "time": 14,
            "camper": { "id": 1, "name": "Alex", "age": 10 },
            "activity": { "id": 1, "name": "Archery", "difficulty": 2 }
        })
    );

    let (status, body) = send(&app, Method::GET, "/campers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let signups = body["signups"].as_array().unwrap();
    assert_eq!(signups.len(), 1);
    assert_eq!(signups[0]["time"], json!(14));
    assert_eq!(signups[0]["activity"]["name"], json!("Archery"));
    assert!(signups[0].get("camper").is_none());
}

#[tokio::test]
async fn camper_age_bounds() {
    let (app, _pool) = setup().await;
    for age in [8, 18] {
        let (status, _) = create_camper(&app, "Kim", age).await;
        assert_eq!(status, StatusCode::CREATED, "age {}", age);
    }
    for age in [7, 19] {
        let (status, body) = create_camper(&app, "Kim", age).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "age {}", age);
        assert_eq!(body, validation_errors());
    }
}

#[tokio::test]
async fn camper_requires_name() {
    let (app, pool) = setup().await;
    let (status, body) = create_camper(&app, "", 10).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, validation_errors());

    let (status, _) = send(&app, Method::POST, "/campers", Some(json!({ "age": 10 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count(&pool, "campers").await, 0);
}

#[tokio::test]
async fn camper_list_omits_signups() {
    let (app, _pool) = setup().await;
    create_camper(&app, "Alex", 10).await;
    create_camper(&app, "Sam", 12).await;

    let (status, body) = send(&app, Method::GET, "/campers", None).await;
    assert_eq!(status, StatusCode::OK);
    let campers = body.as_array().unwrap();
    assert_eq!(campers.len(), 2);
    for c in campers {
        assert!(c.get("signups").is_none());
    }
    assert_eq!(campers[1], json!({ "id": 2, "name": "Sam", "age": 12 }));
}

#[tokio::test]
async fn camper_detail_always_has_signups() {
    let (app, _pool) = setup().await;
    create_camper(&app, "Alex", 10).await;
    let (_, body) = send(&app, Method::GET, "/campers/1", None).await;
    assert_eq!(body["signups"], json!([]));
}

#[tokio::test]
async fn missing_camper_is_404_with_exact_body() {
    let (app, _pool) = setup().await;
    let (status, body) = send(&app, Method::GET, "/campers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Camper not found" }));
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    let (app, _pool) = setup().await;
    let (status, body) = send(&app, Method::GET, "/campers/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid id" }));
}

#[tokio::test]
async fn patch_updates_supplied_fields() {
    let (app, _pool) = setup().await;
    create_camper(&app, "Alex", 10).await;

    let (status, body) = send(&app, Method::PATCH, "/campers/1", Some(json!({ "age": 11 }))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({ "id": 1, "name": "Alex", "age": 11 }));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/campers/1",
        Some(json!({ "name": "Alexandra", "age": 12 })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({ "id": 1, "name": "Alexandra", "age": 12 }));
}

#[tokio::test]
async fn invalid_patch_leaves_record_unchanged() {
    let (app, _pool) = setup().await;
    create_camper(&app, "Alex", 10).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/campers/1",
        Some(json!({ "name": "Renamed", "age": 19 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, validation_errors());

    let (status, _) = send(&app, Method::PATCH, "/campers/1", Some(json!({ "name": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/campers/1", None).await;
    assert_eq!(body["name"], json!("Alex"));
    assert_eq!(body["age"], json!(10));
}

#[tokio::test]
async fn patch_missing_camper_is_404() {
    let (app, _pool) = setup().await;
    let (status, body) = send(&app, Method::PATCH, "/campers/5", Some(json!({ "age": 12 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Camper not found" }));
}

#[tokio::test]
async fn patch_missing_camper_with_malformed_body_is_404() {
    let (app, _pool) = setup().await;
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/campers/5")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Camper not found" }));
}

#[tokio::test]
async fn activity_list_omits_signups() {
    let (app, _pool) = setup().await;
    let (status, body) = send(&app, Method::GET, "/activities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Archery", "difficulty": 2 },
            { "id": 2, "name": "Canoeing", "difficulty": 3 }
        ])
    );
}

#[tokio::test]
async fn deleting_activity_cascades_to_its_signups() {
    let (app, pool) = setup().await;
    create_camper(&app, "Alex", 10).await;
    create_camper(&app, "Sam", 12).await;
    for (camper_id, activity_id) in [(1, 1), (2, 1), (1, 2)] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/signups",
            Some(json!({ "camper_id": camper_id, "activity_id": activity_id, "time": 9 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::DELETE, "/activities/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signups WHERE activity_id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    assert_eq!(count(&pool, "signups").await, 1);
    assert_eq!(count(&pool, "campers").await, 2);
}

#[tokio::test]
async fn deleting_missing_activity_is_404_and_mutates_nothing() {
    let (app, pool) = setup().await;
    let (status, body) = send(&app, Method::DELETE, "/activities/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Activity not found" }));
    assert_eq!(count(&pool, "activities").await, 2);
}

#[tokio::test]
async fn signup_time_bounds() {
    let (app, pool) = setup().await;
    create_camper(&app, "Alex", 10).await;
    for time in [0, 23] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/signups",
            Some(json!({ "camper_id": 1, "activity_id": 1, "time": time })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "time {}", time);
    }
    for time in [-1, 24] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/signups",
            Some(json!({ "camper_id": 1, "activity_id": 1, "time": time })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "time {}", time);
        assert_eq!(body, validation_errors());
    }
    assert_eq!(count(&pool, "signups").await, 2);
}

#[tokio::test]
async fn dangling_references_are_validation_errors() {
    let (app, pool) = setup().await;
    create_camper(&app, "Alex", 10).await;
    for payload in [
        json!({ "camper_id": 99, "activity_id": 1, "time": 10 }),
        json!({ "camper_id": 1, "activity_id": 99, "time": 10 }),
    ] {
        let (status, body) = send(&app, Method::POST, "/signups", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, validation_errors());
    }
    assert_eq!(count(&pool, "signups").await, 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, _pool) = setup().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/campers")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_ready() {
    let (app, _pool) = setup().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], json!("ok"));

    let (_, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(body["name"], json!("camp-signups"));
}

#[tokio::test]
async fn ready_is_degraded_without_tables() {
    let pool = connect("sqlite::memory:").await.unwrap();
    let app = app(AppState::new(pool));
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "status": "degraded", "database": "unavailable" }));
}
