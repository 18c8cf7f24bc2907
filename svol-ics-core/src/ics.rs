use chrono::Utc;
use uuid::Uuid;

use crate::{CalendarEntry, IcsOptions, Result};


/// ICS calendar generator
pub struct IcsGenerator {
    options: IcsOptions,
}

impl IcsGenerator {
    pub fn new(options: IcsOptions) -> Self {
        Self { options }
    }

    /// Serialize calendar entries into ICS text
    pub fn generate(&self, entries: &[CalendarEntry]) -> Result<String> {
        let mut ics_content = String::new();

        ics_content.push_str("BEGIN:VCALENDAR\r\n");
        ics_content.push_str("VERSION:2.0\r\n");
        ics_content.push_str("PRODID:-//SVol ICS//Volunteer Schedule Calendar//EN\r\n");
        ics_content.push_str("CALSCALE:GREGORIAN\r\n");
        ics_content.push_str("METHOD:PUBLISH\r\n");

        if let Some(ref name) = self.options.calendar_name {
            ics_content.push_str(&format!("X-WR-CALNAME:{}\r\n", name));
        }

        if let Some(ref timezone) = self.options.timezone {
            ics_content.push_str(&format!("X-WR-TIMEZONE:{}\r\n", timezone));
        }

        for entry in entries {
            self.add_entry_event(&mut ics_content, entry)?;
        }

        ics_content.push_str("END:VCALENDAR\r\n");

        Ok(ics_content)
    }

    /// Append a single VEVENT block
    fn add_entry_event(&self, ics_content: &mut String, entry: &CalendarEntry) -> Result<()> {
        let uid = Uuid::new_v4().to_string();
        let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let dtstart = entry
            .start
            .with_timezone(&Utc)
            .format("%Y%m%dT%H%M%SZ")
            .to_string();
        let dtend = entry
            .end
            .with_timezone(&Utc)
            .format("%Y%m%dT%H%M%SZ")
            .to_string();

        ics_content.push_str("BEGIN:VEVENT\r\n");
        ics_content.push_str(&format!("UID:{}\r\n", uid));
        ics_content.push_str(&format!("DTSTAMP:{}\r\n", dtstamp));
        ics_content.push_str(&format!("DTSTART:{}\r\n", dtstart));
        ics_content.push_str(&format!("DTEND:{}\r\n", dtend));
        ics_content.push_str(&format!("SUMMARY:{}\r\n", self.escape_text(&entry.title)));

        if !entry.location.is_empty() {
            ics_content.push_str(&format!(
                "LOCATION:{}\r\n",
                self.escape_text(&entry.location)
            ));
        }

        if self.options.include_description {
            ics_content.push_str(&format!(
                "DESCRIPTION:{}\r\n",
                self.escape_text(&entry.description)
            ));
        }

        ics_content.push_str("END:VEVENT\r\n");

        Ok(())
    }

    /// Escape ICS text values
    fn escape_text(&self, text: &str) -> String {
        text.replace("\\", "\\\\")
            .replace("\n", "\\n")
            .replace("\r", "\\r")
            .replace(",", "\\,")
            .replace(";", "\\;")
    }
}

impl Default for IcsGenerator {
    fn default() -> Self {
        Self::new(IcsOptions::default())
    }
}
