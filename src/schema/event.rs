use chrono::NaiveDate;

use crate::schema::geo;

/// Event metadata as the narrator needs it: identity, location, dates.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInfo {
    pub name: String,
    /// Spoken event type, e.g. "Qualifier" or "League Tournament".
    pub type_name: String,
    pub city: String,
    /// Postal state code, e.g. "TX".
    pub stateprov: String,
    /// FIRST region code, when the event belongs to a named region.
    pub region_code: Option<String>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl EventInfo {
    /// Full state name, falling back to the raw code when unknown.
    pub fn state_name(&self) -> &str {
        geo::state_name(&self.stateprov).unwrap_or(&self.stateprov)
    }

    /// Spoken region name, when the region code maps to one.
    pub fn region_name(&self) -> Option<&'static str> {
        self.region_code.as_deref().and_then(geo::region_name)
    }

    /// Whether this event's region ran the remote format this season.
    pub fn is_remote_region(&self) -> bool {
        self.region_code
            .as_deref()
            .map(geo::is_remote_format)
            .unwrap_or(false)
    }

    /// Spoken date range: "June 5, 2021" for a one-day event,
    /// "June 4 to June 5, 2021" otherwise.
    pub fn date_text(&self) -> String {
        let start = self.date_start.format("%B %-d").to_string();
        if self.date_start == self.date_end {
            format!("{}, {}", start, self.date_start.format("%Y"))
        } else {
            format!(
                "{} to {}, {}",
                start,
                self.date_end.format("%B %-d"),
                self.date_end.format("%Y")
            )
        }
    }
}
