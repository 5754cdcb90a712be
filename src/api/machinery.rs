use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::response::OkResponse;
use crate::domain::TractorLocation;
use crate::gateway::AppState;

/// POST /api/conveyor/:action - "on" powers the belt, anything else stops it.
pub async fn set_conveyor(
    State(st): State<AppState>,
    Path(action): Path<String>,
) -> Json<OkResponse> {
    st.gateway.set_conveyor_power(action == "on").await;
    Json(OkResponse::ok())
}

/// POST /api/tractor/goto/:place - any destination string is accepted;
/// the dashboard shows unknown places verbatim.
pub async fn goto_tractor(
    State(st): State<AppState>,
    Path(place): Path<String>,
) -> Json<OkResponse> {
    st.gateway
        .set_tractor_position(TractorLocation::from(place.as_str()))
        .await;
    Json(OkResponse::ok())
}
