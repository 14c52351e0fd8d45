use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use tempfile::tempdir;
use tower::ServiceExt;

use newsbrief_server::{api::app_router, build_state, config::Config};

fn cleanup_env() {
    for key in ["NB_DB_PATH", "NB_SNAPSHOT_PATH", "NB_STATIC_DIR"] {
        std::env::remove_var(key);
    }
}

#[tokio::test]
async fn serves_persisted_snapshot_verbatim() {
    let dir = tempdir().unwrap();
    let snapshot_path = dir.path().join("cached_index.html");
    std::fs::write(&snapshot_path, "<html>first snapshot</html>").unwrap();

    std::env::set_var("NB_DB_PATH", dir.path().join("test.db"));
    std::env::set_var("NB_SNAPSHOT_PATH", &snapshot_path);
    std::env::set_var("NB_STATIC_DIR", dir.path());

    let config = Config::from_env();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "<html>first snapshot</html>".as_bytes());

    // An out-of-band regeneration is picked up without a restart.
    std::fs::write(&snapshot_path, "<html>second snapshot</html>").unwrap();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "<html>second snapshot</html>".as_bytes());

    // Health stays up regardless of artifact state.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The session hook records the visitor.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/session")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"email":"a@example.com","displayName":"A"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["email"], "a@example.com");

    cleanup_env();
}
