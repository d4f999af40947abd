//! Opening hours from the detail record's JSON-encoded `hours` column.

use serde_json::{Map, Value};

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const CLOSED: &str = "Closed";

/// Shown in place of the hours table when no day parsed.
pub const NO_HOURS: &str = "No hours available";

/// One displayed row of the hours table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub day: &'static str,
    pub time: String,
}

impl DayHours {
    /// Three-letter day label, e.g. `"Mon"`.
    pub fn short_day(&self) -> &'static str {
        &self.day[..3]
    }

    pub fn is_closed(&self) -> bool {
        self.time == CLOSED
    }
}

/// Rows Monday → Sunday for the days present in `raw`.
///
/// Key order in the source is irrelevant. Malformed JSON, or anything other
/// than an object, yields no rows.
pub fn opening_hours(raw: Option<&str>) -> Vec<DayHours> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let Ok(map) = serde_json::from_str::<Map<String, Value>>(raw) else {
        log::debug!("Unparsable hours: {}", raw);
        return Vec::new();
    };

    WEEKDAYS
        .iter()
        .filter_map(|&day| {
            map.get(day).map(|value| DayHours {
                day,
                time: match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            })
        })
        .collect()
}
