use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{
    DesiredActuators, GreenhouseField, LightMode, PenField, ScenarioKind, SensorReport,
    TractorLocation, WeatherHistoryEntry, WeatherUpdate, WorldState,
};
use crate::simulation::Simulation;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub gateway: Arc<StateGateway>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            gateway: Arc::new(StateGateway::new(WorldState::default())),
        }
    }
}

/// Drives the simulation against the shared world on a fixed interval.
pub fn spawn_simulation_task(state: AppState, cfg: Config) {
    let gateway = state.gateway.clone();
    let mut sim = Simulation::from_config(&cfg);
    let tick_seconds = cfg.simulation.tick_seconds.max(1);
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(tick_seconds));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            gateway.tick(&mut sim, Local::now()).await;
        }
    });
    debug!(tick_seconds, "simulation task started");
}

/// The single read/write surface over the world state. Every operation takes
/// the lock for its whole duration and holds no await points inside, so
/// readers never observe a half-applied change.
pub struct StateGateway {
    state: RwLock<WorldState>,
}

impl StateGateway {
    pub fn new(world: WorldState) -> Self {
        Self {
            state: RwLock::new(world),
        }
    }

    pub async fn tick(&self, sim: &mut Simulation, now: DateTime<Local>) {
        let mut world = self.state.write().await;
        sim.tick(&mut world, now);
    }

    pub async fn snapshot(&self) -> WorldState {
        self.state.read().await.clone()
    }

    pub async fn weather_history(&self) -> Vec<WeatherHistoryEntry> {
        self.state
            .read()
            .await
            .weather_history
            .iter()
            .cloned()
            .collect()
    }

    pub async fn set_greenhouse_field(&self, field: GreenhouseField, on: bool) {
        let mut world = self.state.write().await;
        world.greenhouse.set_field(field, on);
    }

    pub async fn set_light_mode(&self, mode: LightMode) {
        let mut world = self.state.write().await;
        world.greenhouse.light_mode = mode;
    }

    /// Unknown pen ids are a silent no-op: the dashboard keeps its fixed pen
    /// set and a stale button must not surface an error.
    pub async fn set_pen_field(&self, id: u32, field: PenField, on: bool) {
        let mut world = self.state.write().await;
        match world.pen_mut(id) {
            Some(pen) => pen.set_field(field, on),
            None => warn!(pen_id = id, "toggle for unknown pen ignored"),
        }
    }

    pub async fn set_conveyor_power(&self, on: bool) {
        let mut world = self.state.write().await;
        world.conveyor.on = on;
    }

    pub async fn set_tractor_position(&self, place: TractorLocation) {
        let mut world = self.state.write().await;
        world.tractor.position = place;
    }

    pub async fn set_scenario_enabled(&self, kind: ScenarioKind, enabled: bool) {
        let mut world = self.state.write().await;
        world.scenarios.set(kind, enabled);
    }

    pub async fn set_simulation_enabled(&self, enabled: bool) {
        let mut world = self.state.write().await;
        world.simulation = enabled;
    }

    /// Deleting an id that is no longer in the log is a no-op.
    pub async fn delete_notification(&self, id: u64) {
        let mut world = self.state.write().await;
        world.delete_notification(id);
    }

    /// Station readings overwrite whatever they carry and always land one
    /// point on the chart, unlike the simulator's probabilistic sampling.
    pub async fn ingest_weather(&self, update: WeatherUpdate, now: DateTime<Local>) {
        let mut world = self.state.write().await;
        world.weather.apply_update(&update);
        let entry = WeatherHistoryEntry::sample(&world.weather, now);
        world.push_history(entry);
    }

    pub async fn ingest_greenhouse_sensors(&self, report: SensorReport) -> DesiredActuators {
        let mut world = self.state.write().await;
        world.greenhouse.apply_sensor_report(&report);
        world.greenhouse.desired_actuators()
    }
}
