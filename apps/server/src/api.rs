use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

pub async fn healthz() -> &'static str {
    "ok"
}

/// Serves the latest persisted snapshot artifact verbatim.
///
/// The file is read per request so an out-of-band regeneration is picked
/// up without a restart. Generation never happens inline here.
async fn serve_snapshot(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let html = tokio::fs::read_to_string(&state.snapshot_path)
        .await
        .map_err(|e| ApiError::Internal(format!("snapshot artifact unreadable: {}", e)))?;
    Ok(Html(html))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionBody {
    email: String,
    display_name: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    email: String,
    display_name: String,
}

/// Records the visiting user if unseen. Identity is read by the pipeline,
/// never required - this is the login callback's only store effect.
async fn record_session(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SessionBody>,
) -> ApiResult<Json<SessionResponse>> {
    if body.email.is_empty() {
        return Err(ApiError::BadRequest("email is required".to_string()));
    }
    let user = state
        .user_store
        .ensure_user(&body.email, &body.display_name)
        .await?;
    Ok(Json(SessionResponse {
        email: user.email,
        display_name: user.display_name,
    }))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/", get(serve_snapshot))
        .route("/healthz", get(healthz))
        .route("/api/v1/session", post(record_session))
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
