use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{error::ApiError, parse_flag, response::OkResponse};
use crate::domain::PenField;
use crate::gateway::AppState;

/// POST /api/pen/:id/:param/:value - unknown field names are a 400,
/// unknown pen ids a silent no-op.
pub async fn set_field(
    State(st): State<AppState>,
    Path((id, param, value)): Path<(u32, String, String)>,
) -> Result<Json<OkResponse>, ApiError> {
    let field: PenField = param
        .parse()
        .map_err(|_| ApiError::InvalidArgument(format!("unknown pen field '{param}'")))?;
    st.gateway.set_pen_field(id, field, parse_flag(&value)).await;
    Ok(Json(OkResponse::ok()))
}
