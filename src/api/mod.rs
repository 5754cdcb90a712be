pub mod control;
pub mod error;
pub mod greenhouse;
pub mod machinery;
pub mod pens;
pub mod response;
pub mod state;
pub mod weather;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, gateway::AppState};

/// Path booleans follow the dashboard's convention: the literal `"true"`
/// is true, anything else is false.
pub(crate) fn parse_flag(value: &str) -> bool {
    value == "true"
}

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .route("/api/state", get(state::get_state))
        .route("/api/weather/history", get(weather::get_history))
        .route("/api/weather/update", post(weather::post_update))
        .route("/json/data", post(greenhouse::sensor_exchange))
        .route("/api/greenhouse/light/:color", post(greenhouse::set_light))
        .route("/api/greenhouse/:param/:value", post(greenhouse::set_field))
        .route("/api/pen/:id/:param/:value", post(pens::set_field))
        .route("/api/conveyor/:action", post(machinery::set_conveyor))
        .route("/api/tractor/goto/:place", post(machinery::goto_tractor))
        .route("/api/scenario/:name/:enabled", post(control::set_scenario))
        .route("/api/simulation/:enabled", post(control::set_simulation))
        .route("/api/notification/:id", delete(control::delete_notification))
        .route("/healthz", get(state::healthz))
        .with_state(state);

    if cfg.server.enable_cors {
        use tower_http::cors::{Any, CorsLayer};
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
