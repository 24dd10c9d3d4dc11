use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::remote_api::in_memory::InMemoryRemoteApi;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn request(path: &str, body: &str) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn creates_a_batch_for_each_variant_through_the_router() {
    let remote = Arc::new(InMemoryRemoteApi::new());
    let app = router(AppState::with_gateway(remote.clone()));

    let calls = [
        (
            "/create-time-entries-of-user-per-project",
            r#"{"project_id": 7, "user_id": 12, "entries": [
                {"spent_on": "2026-08-03", "hours": 2.0, "comments": "planning"}
            ]}"#,
        ),
        (
            "/create-time-entries-of-user-multi-projects",
            r#"{"user_id": 12, "entries": [
                {"project_id": 9, "spent_on": "2026-08-03", "hours": 1.0, "comments": "support"}
            ]}"#,
        ),
        (
            "/create-time-entries-of-users-per-project",
            r#"{"project_id": 7, "entries": [
                {"user_id": 13, "spent_on": "2026-08-03", "hours": 3.0, "comments": "review"}
            ]}"#,
        ),
    ];

    for (path, body) in calls {
        let response = app.clone().oneshot(request(path, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED, "failed for {path}");
    }

    let submitted = remote.submitted().await;
    assert_eq!(submitted.len(), 3);
    assert_eq!(submitted[1].project_id, 9);
    assert_eq!(submitted[2].user_id, 13);
}

#[tokio::test]
async fn a_batch_with_one_invalid_entry_fails_while_earlier_entries_reach_the_remote() {
    let remote = Arc::new(InMemoryRemoteApi::new());
    let app = router(AppState::with_gateway(remote.clone()));

    let body = r#"{"project_id": 7, "entries": [
        {"user_id": 12, "spent_on": "2026-08-03", "hours": 2.0, "comments": "planning"},
        {"user_id": 13, "spent_on": "2026-08-03", "hours": -1.0, "comments": "review"},
        {"user_id": 14, "spent_on": "2026-08-03", "hours": 3.0, "comments": "support"}
    ]}"#;

    let response = app
        .oneshot(request("/create-time-entries-of-users-per-project", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["message"], "Input data validation failed");

    // The submission issued before the invalid entry is not retracted.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let submitted = remote.submitted().await;
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].user_id, 12);
}

#[tokio::test]
async fn a_remote_failure_fails_the_batch_but_sibling_entries_stay_created() {
    let mut remote = InMemoryRemoteApi::new();
    remote.reject_user(13, 500, "internal error");
    let remote = Arc::new(remote);
    let app = router(AppState::with_gateway(remote.clone()));

    let body = r#"{"project_id": 7, "entries": [
        {"user_id": 12, "spent_on": "2026-08-03", "hours": 2.0, "comments": "planning"},
        {"user_id": 13, "spent_on": "2026-08-03", "hours": 1.5, "comments": "review"}
    ]}"#;

    let response = app
        .oneshot(request("/create-time-entries-of-users-per-project", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    // Both submissions were issued; the first created entry remains remotely.
    assert_eq!(remote.submitted().await.len(), 2);
}
