//! Weather history and station ingestion endpoints

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Local;

use crate::api::response::OkResponse;
use crate::domain::WeatherUpdate;
use crate::gateway::AppState;

/// GET /api/weather/history - chart points, oldest first.
pub async fn get_history(State(st): State<AppState>) -> impl IntoResponse {
    Json(st.gateway.weather_history().await)
}

/// POST /api/weather/update - partial readings from an external station.
/// Always lands one point in the history, unlike simulator sampling.
pub async fn post_update(
    State(st): State<AppState>,
    Json(update): Json<WeatherUpdate>,
) -> Json<OkResponse> {
    st.gateway.ingest_weather(update, Local::now()).await;
    Json(OkResponse::ok())
}
