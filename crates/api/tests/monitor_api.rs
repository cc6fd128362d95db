//! Integration tests for the `/monitor` endpoints.
//!
//! The refresh driver is not running here; before any reading arrives the
//! snapshot exposes the entity catalog with empty state.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn status_lists_all_tracked_entities(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/monitor/status").await;

    let json = expect_json(response, StatusCode::OK).await;
    let entities = json["data"].as_array().expect("data should be an array");

    // 8 blood buckets + 5 organs + 4 operation rooms.
    assert_eq!(entities.len(), 17);

    let blood = entities
        .iter()
        .find(|e| e["id"] == "blood-a+")
        .expect("blood bucket should be tracked");
    assert_eq!(blood["kind"], "blood");
    assert_eq!(blood["range"]["low"], 2.0);
    assert_eq!(blood["range"]["high"], 6.0);
    // No reading yet: no status, cooling inactive.
    assert!(blood["status"].is_null());
    assert!(blood["latest"].is_null());
    assert_eq!(blood["cooling_active"], false);

    let op_room = entities
        .iter()
        .find(|e| e["id"] == "op-room-1")
        .expect("operation room should be tracked");
    assert_eq!(op_room["kind"], "room");
    assert_eq!(op_room["range"]["low"], 18.0);
    assert_eq!(op_room["range"]["high"], 25.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn alerts_start_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/monitor/alerts").await;

    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(0));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cooling_override_defaults_on_and_toggles(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/monitor/cooling-override").await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["enabled"], true);

    let response = put_json(
        app.clone(),
        "/api/v1/monitor/cooling-override",
        serde_json::json!({ "enabled": false }),
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["enabled"], false);

    // The flip is visible to subsequent reads of the same app state.
    let response = get(app, "/api/v1/monitor/cooling-override").await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"]["enabled"], false);
}
