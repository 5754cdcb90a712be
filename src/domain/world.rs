use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use strum_macros::{Display, EnumString};

use super::{
    Conveyor, GreenhouseState, Notification, Pen, Tractor, WeatherHistoryEntry, WeatherState,
};

/// Chart ring keeps roughly the last three hours at one point per minute.
pub const WEATHER_HISTORY_CAP: usize = 180;
pub const NOTIFICATION_CAP: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ScenarioKind {
    #[strum(serialize = "storm")]
    Storm,
    #[strum(serialize = "wrongVeg")]
    WrongVeg,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioToggles {
    pub storm: bool,
    #[serde(rename = "wrongVeg")]
    pub wrong_veg: bool,
}

impl Default for ScenarioToggles {
    fn default() -> Self {
        Self {
            storm: true,
            wrong_veg: true,
        }
    }
}

impl ScenarioToggles {
    pub fn set(&mut self, kind: ScenarioKind, enabled: bool) {
        match kind {
            ScenarioKind::Storm => self.storm = enabled,
            ScenarioKind::WrongVeg => self.wrong_veg = enabled,
        }
    }

    pub fn is_enabled(&self, kind: ScenarioKind) -> bool {
        match kind {
            ScenarioKind::Storm => self.storm,
            ScenarioKind::WrongVeg => self.wrong_veg,
        }
    }
}

/// The whole farm in one snapshot. A single instance lives behind the state
/// gateway for the lifetime of the process; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct WorldState {
    pub greenhouse: GreenhouseState,
    pub weather: WeatherState,
    #[serde(rename = "weatherHistory")]
    pub weather_history: VecDeque<WeatherHistoryEntry>,
    pub pens: Vec<Pen>,
    pub conveyor: Conveyor,
    pub tractor: Tractor,
    pub scenarios: ScenarioToggles,
    pub simulation: bool,
    pub notifications: VecDeque<Notification>,
    #[serde(skip)]
    next_notification_id: u64,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            greenhouse: GreenhouseState::default(),
            weather: WeatherState::default(),
            weather_history: VecDeque::new(),
            pens: vec![Pen::new(1, 68.0), Pen::new(2, 45.0)],
            conveyor: Conveyor::default(),
            tractor: Tractor::default(),
            scenarios: ScenarioToggles::default(),
            simulation: true,
            notifications: VecDeque::new(),
            next_notification_id: 1,
        }
    }
}

impl WorldState {
    pub fn pen_mut(&mut self, id: u32) -> Option<&mut Pen> {
        self.pens.iter_mut().find(|p| p.id == id)
    }

    /// Append an alert and return its id. Ids increase monotonically and are
    /// never reused, even after deletion.
    pub fn push_notification(&mut self, now: DateTime<Local>, msg: impl Into<String>) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push_back(Notification::new(id, now, msg));
        id
    }

    /// Drop oldest alerts until the log fits the cap again.
    pub fn truncate_notifications(&mut self) {
        while self.notifications.len() > NOTIFICATION_CAP {
            self.notifications.pop_front();
        }
    }

    /// Returns whether an entry was actually removed.
    pub fn delete_notification(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn push_history(&mut self, entry: WeatherHistoryEntry) {
        self.weather_history.push_back(entry);
        while self.weather_history.len() > WEATHER_HISTORY_CAP {
            self.weather_history.pop_front();
        }
    }
}
