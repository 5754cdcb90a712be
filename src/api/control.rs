//! Scenario and simulation toggles plus notification dismissal.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{error::ApiError, parse_flag, response::{OkResponse, ToggleResponse}};
use crate::domain::ScenarioKind;
use crate::gateway::AppState;

/// POST /api/scenario/:name/:enabled
pub async fn set_scenario(
    State(st): State<AppState>,
    Path((name, enabled)): Path<(String, String)>,
) -> Result<Json<OkResponse>, ApiError> {
    let kind: ScenarioKind = name
        .parse()
        .map_err(|_| ApiError::InvalidArgument(format!("unknown scenario '{name}'")))?;
    st.gateway.set_scenario_enabled(kind, parse_flag(&enabled)).await;
    Ok(Json(OkResponse::ok()))
}

/// POST /api/simulation/:enabled - pauses or resumes weather drift.
/// Scenario rules keep running either way.
pub async fn set_simulation(
    State(st): State<AppState>,
    Path(enabled): Path<String>,
) -> Json<ToggleResponse> {
    let on = parse_flag(&enabled);
    st.gateway.set_simulation_enabled(on).await;
    Json(ToggleResponse::enabled(on))
}

/// DELETE /api/notification/:id - dismissing an id that is already gone
/// still acknowledges.
pub async fn delete_notification(
    State(st): State<AppState>,
    Path(id): Path<u64>,
) -> Json<OkResponse> {
    st.gateway.delete_notification(id).await;
    Json(OkResponse::ok())
}
