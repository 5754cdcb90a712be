use anyhow::Result;
use axum::Router;
use config::Config;
use farm_monitor::{api, config, gateway, telemetry};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;
    let app_state = gateway::AppState::new(cfg.clone());
    let app: Router = api::router(app_state.clone(), &cfg);

    let addr = cfg.server.socket_addr()?;
    if cfg.server.host == "0.0.0.0" {
        warn!(
            "binding to 0.0.0.0 exposes the dashboard beyond this machine; \
            prefer 127.0.0.1 unless a reverse proxy fronts it"
        );
    }

    info!(%addr, tick_seconds = cfg.simulation.tick_seconds, "starting farm-monitor");

    gateway::spawn_simulation_task(app_state, cfg);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
