use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One alert line on the dashboard. Ids are unique for the lifetime of the
/// process; the timestamp is a preformatted local wall-clock label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub time: String,
    pub msg: String,
}

impl Notification {
    pub fn new(id: u64, now: DateTime<Local>, msg: impl Into<String>) -> Self {
        Self {
            id,
            time: now.format("%H:%M:%S").to_string(),
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_label_is_wall_clock() {
        let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 7, 3).unwrap();
        let n = Notification::new(4, now, "pump stuck");
        assert_eq!(n.time, "09:07:03");
        assert_eq!(n.id, 4);
        assert_eq!(n.msg, "pump stuck");
    }
}
