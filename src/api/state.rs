use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::gateway::AppState;

/// GET /api/state - the full world snapshot the dashboard polls.
pub async fn get_state(State(st): State<AppState>) -> impl IntoResponse {
    Json(st.gateway.snapshot().await)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
