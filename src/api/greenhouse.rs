//! Greenhouse actuator toggles, lamp control, and the controller-box
//! sensor exchange.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{error::ApiError, parse_flag, response::OkResponse};
use crate::domain::{DesiredActuators, GreenhouseField, LightMode, SensorReport};
use crate::gateway::AppState;

/// POST /api/greenhouse/light/:color
pub async fn set_light(
    State(st): State<AppState>,
    Path(color): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    let mode: LightMode = color
        .parse()
        .map_err(|_| ApiError::InvalidArgument(format!("unknown light color '{color}'")))?;
    st.gateway.set_light_mode(mode).await;
    Ok(Json(OkResponse::ok()))
}

/// POST /api/greenhouse/:param/:value - actuator toggles only; unknown
/// field names are rejected rather than written blindly.
pub async fn set_field(
    State(st): State<AppState>,
    Path((param, value)): Path<(String, String)>,
) -> Result<Json<OkResponse>, ApiError> {
    let field: GreenhouseField = param
        .parse()
        .map_err(|_| ApiError::InvalidArgument(format!("unknown greenhouse field '{param}'")))?;
    st.gateway.set_greenhouse_field(field, parse_flag(&value)).await;
    Ok(Json(OkResponse::ok()))
}

/// POST /json/data - the greenhouse box reports its sensors and receives
/// the desired actuator state in return.
pub async fn sensor_exchange(
    State(st): State<AppState>,
    Json(report): Json<SensorReport>,
) -> Json<DesiredActuators> {
    Json(st.gateway.ingest_greenhouse_sensors(report).await)
}
