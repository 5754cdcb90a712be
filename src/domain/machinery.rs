use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conveyor {
    pub on: bool,
    pub count: u32,
    pub wrong: u32,
    #[serde(rename = "lastRfid")]
    pub last_rfid: String,
}

impl Default for Conveyor {
    fn default() -> Self {
        Self {
            on: false,
            count: 13,
            wrong: 0,
            last_rfid: "VEG-001".into(),
        }
    }
}

/// Where the tractor currently is. The four farm locations are known to the
/// dashboard; anything else is kept verbatim and displayed raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TractorLocation {
    Warehouse,
    Greenhouse,
    Pens,
    Conveyor,
    Other(String),
}

impl TractorLocation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Warehouse => "warehouse",
            Self::Greenhouse => "greenhouse",
            Self::Pens => "pens",
            Self::Conveyor => "conveyor",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for TractorLocation {
    fn from(s: &str) -> Self {
        match s {
            "warehouse" => Self::Warehouse,
            "greenhouse" => Self::Greenhouse,
            "pens" => Self::Pens,
            "conveyor" => Self::Conveyor,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TractorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// On the wire a location is a bare string, not a tagged enum.
impl Serialize for TractorLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TractorLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tractor {
    pub position: TractorLocation,
}

impl Default for Tractor {
    fn default() -> Self {
        Self {
            position: TractorLocation::Warehouse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_locations_round_trip() {
        for name in ["warehouse", "greenhouse", "pens", "conveyor"] {
            let loc = TractorLocation::from(name);
            assert!(!matches!(loc, TractorLocation::Other(_)));
            assert_eq!(loc.as_str(), name);
        }
    }

    #[test]
    fn arbitrary_location_passes_through() {
        let loc = TractorLocation::from("repair-bay");
        assert_eq!(loc, TractorLocation::Other("repair-bay".to_string()));
        assert_eq!(loc.to_string(), "repair-bay");
    }

    #[test]
    fn location_serializes_as_plain_string() {
        let json = serde_json::to_string(&Tractor::default()).unwrap();
        assert_eq!(json, r#"{"position":"warehouse"}"#);

        let tractor = Tractor {
            position: TractorLocation::from("field-7"),
        };
        let json = serde_json::to_string(&tractor).unwrap();
        assert_eq!(json, r#"{"position":"field-7"}"#);
    }

    #[test]
    fn conveyor_defaults_match_demo_farm() {
        let conveyor = Conveyor::default();
        assert!(!conveyor.on);
        assert_eq!(conveyor.count, 13);
        assert_eq!(conveyor.wrong, 0);
        assert_eq!(conveyor.last_rfid, "VEG-001");
    }
}
