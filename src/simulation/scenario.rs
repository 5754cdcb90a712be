//! # Alert Scenarios
//!
//! Scripted farm events checked once per tick: a storm response that opens
//! every pen door, and a wrong RFID tag appearing on the conveyor line.
//! Each rule re-arms a cooldown when it fires so a persistent condition
//! cannot flood the notification log.

use chrono::{DateTime, Duration, Local};
use rand::Rng;
use tracing::info;

use crate::domain::{ScenarioKind, TractorLocation, WorldState};

/// Pen doors open when wind exceeds this while it rains.
const STORM_WIND_MS: f64 = 25.0;

const STORM_MSG: &str = "Strong wind and rain! Pen doors opened automatically.";
const WRONG_TAG_MSG: &str = "Wrong RFID tag! Tractor sent to the conveyor.";

/// Scenario engine configuration
#[derive(Debug, Clone)]
pub struct ScenarioEngineConfig {
    /// Minimum seconds between two firings of the same rule
    pub cooldown_seconds: u64,
    /// Probability per eligible tick of a wrong tag on the line
    pub wrong_tag_probability: f64,
    /// Random seed for reproducibility (None = random)
    pub random_seed: Option<u64>,
}

impl Default for ScenarioEngineConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 60,
            wrong_tag_probability: 0.08,
            random_seed: None,
        }
    }
}

/// Next-eligible-at timer. Starts expired so a rule may fire on the very
/// first tick; not persisted across restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooldown {
    next_eligible_at: Option<DateTime<Local>>,
}

impl Cooldown {
    pub fn ready(&self, now: DateTime<Local>) -> bool {
        match self.next_eligible_at {
            None => true,
            Some(at) => now >= at,
        }
    }

    pub fn arm(&mut self, now: DateTime<Local>, seconds: u64) {
        self.next_eligible_at = Some(now + Duration::seconds(seconds as i64));
    }
}

pub struct ScenarioEngine {
    config: ScenarioEngineConfig,
    rng: rand::rngs::StdRng,
    storm_cooldown: Cooldown,
    wrong_tag_cooldown: Cooldown,
}

impl ScenarioEngine {
    pub fn new(config: ScenarioEngineConfig) -> Self {
        use rand::SeedableRng;

        let rng = match config.random_seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            storm_cooldown: Cooldown::default(),
            wrong_tag_cooldown: Cooldown::default(),
        }
    }

    /// Run both rules, then trim the notification log back to its cap.
    /// Scenarios run on every tick, whether or not weather simulation is on.
    pub fn tick(&mut self, world: &mut WorldState, now: DateTime<Local>) {
        self.check_storm(world, now);
        self.check_wrong_tag(world, now);
        world.truncate_notifications();
    }

    fn check_storm(&mut self, world: &mut WorldState, now: DateTime<Local>) {
        if !world.scenarios.storm || !self.storm_cooldown.ready(now) {
            return;
        }
        if world.weather.wind > STORM_WIND_MS && world.weather.is_raining() {
            for pen in &mut world.pens {
                pen.door = true;
            }
            world.push_notification(now, STORM_MSG);
            self.storm_cooldown.arm(now, self.config.cooldown_seconds);
            info!(
                scenario = %ScenarioKind::Storm,
                wind = world.weather.wind,
                rain_amount = world.weather.rain_amount,
                "storm response fired"
            );
        }
    }

    fn check_wrong_tag(&mut self, world: &mut WorldState, now: DateTime<Local>) {
        if !world.scenarios.wrong_veg || !self.wrong_tag_cooldown.ready(now) {
            return;
        }
        if self.rng.gen_bool(self.config.wrong_tag_probability) {
            world.conveyor.wrong += 1;
            world.conveyor.last_rfid = format!("ERR-{}", self.rng.gen_range(0..999));
            world.tractor.position = TractorLocation::Conveyor;
            world.push_notification(now, WRONG_TAG_MSG);
            self.wrong_tag_cooldown.arm(now, self.config.cooldown_seconds);
            info!(
                scenario = %ScenarioKind::WrongVeg,
                tag = %world.conveyor.last_rfid,
                "wrong tag fired"
            );
        }
    }
}
