use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Lamp color mode for the greenhouse grow light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LightMode {
    Off,
    Red,
    Blue,
    Green,
}

impl Default for LightMode {
    fn default() -> Self {
        Self::Off
    }
}

/// Actuator fields that may be toggled over the wire. Sensor fields are
/// deliberately absent: those only change through ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum GreenhouseField {
    Window,
    Watering,
    Ventilation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenhouseState {
    pub temp: f64,
    pub hum: f64,
    pub press: f64,
    pub soil_temp: f64,
    pub soil_hum: f64,
    pub light_level: f64,
    pub window: bool,
    pub watering: bool,
    pub ventilation: bool,
    #[serde(rename = "lightMode")]
    pub light_mode: LightMode,
}

impl Default for GreenhouseState {
    fn default() -> Self {
        Self {
            temp: 24.0,
            hum: 65.0,
            press: 1013.0,
            soil_temp: 20.0,
            soil_hum: 50.0,
            light_level: 1000.0,
            window: false,
            watering: false,
            ventilation: false,
            light_mode: LightMode::Off,
        }
    }
}

/// Partial sensor readings posted by the greenhouse controller box.
/// Unknown keys (the box echoes back `pump`/`lamp`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorReport {
    pub soil_temp: Option<f64>,
    pub soil_hum: Option<f64>,
    pub light: Option<f64>,
    pub air_temp: Option<f64>,
    pub air_hum: Option<f64>,
    pub air_press: Option<f64>,
}

/// Desired actuator state returned to the controller box after each report.
#[derive(Debug, Clone, Serialize)]
pub struct DesiredActuators {
    pub pump: bool,
    pub lamp: LightMode,
    pub window: bool,
    pub ventilation: bool,
}

impl GreenhouseState {
    pub fn set_field(&mut self, field: GreenhouseField, on: bool) {
        match field {
            GreenhouseField::Window => self.window = on,
            GreenhouseField::Watering => self.watering = on,
            GreenhouseField::Ventilation => self.ventilation = on,
        }
    }

    /// Overwrite whichever sensor readings the report carries. Actuator
    /// state is owned by the server and never written from a report.
    pub fn apply_sensor_report(&mut self, report: &SensorReport) {
        if let Some(v) = report.soil_temp {
            self.soil_temp = v;
        }
        if let Some(v) = report.soil_hum {
            self.soil_hum = v;
        }
        if let Some(v) = report.light {
            self.light_level = v;
        }
        if let Some(v) = report.air_temp {
            self.temp = v;
        }
        if let Some(v) = report.air_hum {
            self.hum = v;
        }
        if let Some(v) = report.air_press {
            self.press = v;
        }
    }

    pub fn desired_actuators(&self) -> DesiredActuators {
        DesiredActuators {
            pump: self.watering,
            lamp: self.light_mode,
            window: self.window,
            ventilation: self.ventilation,
        }
    }
}
