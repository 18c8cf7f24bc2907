use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// One row of an exported volunteer schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event date (YYYY-MM-DD)
    pub day: String,
    /// Event title
    pub title: String,
    /// Event type (Session, Tutorial, ...)
    pub event_type: String,
    /// Organizer tag
    pub tag: String,
    /// Venue / room
    pub location: String,
    /// Comma-separated volunteer time ranges, e.g. "9AM-12PM,1PM-5PM"
    pub volunteer: Option<String>,
    /// Attendance marker (non-empty cell when the event is attended)
    pub attend: Option<String>,
    /// Attendance time, e.g. "2024-07-15--09:00-17:00"
    pub time: Option<String>,
}

/// A single calendar event ready for ICS serialization
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEntry {
    /// Event title
    pub title: String,
    /// Event description ("Type - Tag")
    pub description: String,
    /// Venue / room
    pub location: String,
    /// Localized start instant
    pub start: DateTime<Tz>,
    /// Localized end instant
    pub end: DateTime<Tz>,
}

/// ICS generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IcsOptions {
    /// Calendar display name
    pub calendar_name: Option<String>,
    /// Timezone label advertised in the calendar header
    pub timezone: Option<String>,
    /// Whether to emit event descriptions
    pub include_description: bool,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            calendar_name: Some("Volunteer Schedule".to_string()),
            timezone: Some("US/Central".to_string()),
            include_description: true,
        }
    }
}
