use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Toggleable pen fields. The water level is a sensor reading and cannot be
/// set over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PenField {
    Door,
    Pump,
}

/// A livestock pen. The set of pens is fixed at startup; ids are unique and
/// never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pen {
    pub id: u32,
    pub door: bool,
    pub water: f64,
    pub pump: bool,
}

impl Pen {
    pub fn new(id: u32, water: f64) -> Self {
        Self {
            id,
            door: false,
            water,
            pump: false,
        }
    }

    pub fn set_field(&mut self, field: PenField, on: bool) {
        match field {
            PenField::Door => self.door = on,
            PenField::Pump => self.pump = on,
        }
    }
}
