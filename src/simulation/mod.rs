//! # Farm Simulation Module
//!
//! Drives everything on the farm that moves by itself.
//!
//! ## Components
//!
//! - **Weather**: bounded random-walk drift of outdoor readings plus chart
//!   history sampling, active only while the simulation toggle is on
//! - **Scenario**: scripted alert rules (storm response, wrong RFID tag)
//!   with per-rule cooldowns, checked on every tick unconditionally
//! - **Simulation**: facade that runs both against the shared world state
//!   with an injected wall-clock instant, so ticks are testable without
//!   real timers

pub mod scenario;
pub mod weather;

pub use scenario::{Cooldown, ScenarioEngine, ScenarioEngineConfig};
pub use weather::{WeatherSimulator, WeatherSimulatorConfig};

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::domain::WorldState;

pub struct Simulation {
    weather: WeatherSimulator,
    scenarios: ScenarioEngine,
}

impl Simulation {
    pub fn new(weather: WeatherSimulatorConfig, scenarios: ScenarioEngineConfig) -> Self {
        Self {
            weather: WeatherSimulator::new(weather),
            scenarios: ScenarioEngine::new(scenarios),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            WeatherSimulatorConfig {
                perturb_probability: cfg.simulation.perturb_probability,
                sample_probability: cfg.simulation.sample_probability,
                random_seed: cfg.simulation.random_seed,
            },
            ScenarioEngineConfig {
                cooldown_seconds: cfg.scenarios.cooldown_seconds,
                wrong_tag_probability: cfg.scenarios.wrong_tag_probability,
                random_seed: cfg.scenarios.random_seed,
            },
        )
    }

    /// One simulation step. Weather drift honors the world's simulation
    /// toggle; scenario rules are evaluated regardless.
    pub fn tick(&mut self, world: &mut WorldState, now: DateTime<Local>) {
        if world.simulation {
            self.weather.tick(world, now);
        }
        self.scenarios.tick(world, now);
    }
}
