use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Current outdoor conditions. Mutated by the weather simulator while the
/// simulation toggle is on, or overwritten by station ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    pub temp: f64,
    pub wind: f64,
    pub wind_dir: f64,
    pub rain_amount: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub uv: f64,
    pub light: f64,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            temp: 16.0,
            wind: 8.0,
            wind_dir: 180.0,
            rain_amount: 0.0,
            humidity: 55.0,
            pressure: 1013.0,
            uv: 2.0,
            light: 20000.0,
        }
    }
}

impl WeatherState {
    pub fn is_raining(&self) -> bool {
        self.rain_amount > 0.0
    }
}

/// Partial update posted by an external weather station. Absent fields keep
/// their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherUpdate {
    pub temp: Option<f64>,
    pub wind: Option<f64>,
    pub wind_dir: Option<f64>,
    pub rain_amount: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub uv: Option<f64>,
    pub light: Option<f64>,
}

impl WeatherState {
    pub fn apply_update(&mut self, update: &WeatherUpdate) {
        if let Some(v) = update.temp {
            self.temp = v;
        }
        if let Some(v) = update.wind {
            self.wind = v;
        }
        if let Some(v) = update.wind_dir {
            self.wind_dir = v;
        }
        if let Some(v) = update.rain_amount {
            self.rain_amount = v;
        }
        if let Some(v) = update.humidity {
            self.humidity = v;
        }
        if let Some(v) = update.pressure {
            self.pressure = v;
        }
        if let Some(v) = update.uv {
            self.uv = v;
        }
        if let Some(v) = update.light {
            self.light = v;
        }
    }
}

/// One point on the dashboard weather chart. Values are rounded to one
/// decimal and the label is local wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherHistoryEntry {
    pub time: String,
    pub temp: f64,
    pub wind: f64,
    pub rain_amount: f64,
    pub wind_dir: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub uv: f64,
    pub light: f64,
}

impl WeatherHistoryEntry {
    pub fn sample(weather: &WeatherState, now: DateTime<Local>) -> Self {
        Self {
            time: now.format("%H:%M").to_string(),
            temp: round1(weather.temp),
            wind: round1(weather.wind),
            rain_amount: round1(weather.rain_amount),
            wind_dir: round1(weather.wind_dir),
            humidity: round1(weather.humidity),
            pressure: round1(weather.pressure),
            uv: round1(weather.uv),
            light: round1(weather.light),
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, h, m, s).unwrap()
    }

    #[test]
    fn partial_update_keeps_absent_fields() {
        let mut weather = WeatherState::default();
        weather.apply_update(&WeatherUpdate {
            temp: Some(22.0),
            ..Default::default()
        });

        assert_eq!(weather.temp, 22.0);
        assert_eq!(weather.wind, 8.0);
        assert_eq!(weather.pressure, 1013.0);
    }

    #[test]
    fn rain_presence_follows_amount() {
        let mut weather = WeatherState::default();
        assert!(!weather.is_raining());
        weather.rain_amount = 0.4;
        assert!(weather.is_raining());
    }

    #[test]
    fn sample_rounds_and_labels() {
        let mut weather = WeatherState::default();
        weather.temp = 17.248;
        weather.wind = 9.96;

        let entry = WeatherHistoryEntry::sample(&weather, at(14, 5, 33));
        assert_eq!(entry.time, "14:05");
        assert_eq!(entry.temp, 17.2);
        assert_eq!(entry.wind, 10.0);
        assert_eq!(entry.pressure, 1013.0);
    }
}
