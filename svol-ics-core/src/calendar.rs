use tracing::warn;

use crate::{CalendarEntry, EventRecord, Result, time::TimeNormalizer};

/// Fans schedule records out into calendar entries.
pub struct CalendarBuilder {
    normalizer: TimeNormalizer,
}

impl CalendarBuilder {
    /// Create a builder using the given time normalizer.
    pub fn new(normalizer: TimeNormalizer) -> Self {
        Self { normalizer }
    }

    /// Build calendar entries for every record, preserving input order.
    ///
    /// Records without a recognized time-bearing field contribute zero
    /// entries and log a warning; any time-parse failure aborts the whole
    /// build.
    pub fn build(&self, records: &[EventRecord]) -> Result<Vec<CalendarEntry>> {
        let mut entries = Vec::new();
        for record in records {
            self.add_record(&mut entries, record)?;
        }
        Ok(entries)
    }

    /// Append the entries for a single record.
    fn add_record(&self, entries: &mut Vec<CalendarEntry>, record: &EventRecord) -> Result<()> {
        let description = format!("{} - {}", record.event_type, record.tag);

        if let Some(ref volunteer) = record.volunteer {
            for slot in volunteer.split(',') {
                let (start, end) = self.normalizer.volunteer_range(slot, &record.day)?;
                entries.push(CalendarEntry {
                    title: sanitize_title(&record.title),
                    description: description.clone(),
                    location: record.location.clone(),
                    start,
                    end,
                });
            }
        } else if let (Some(_), Some(time)) = (&record.attend, &record.time) {
            // Attendance entries embed their own date.
            let (start, end) = self.normalizer.attend_range(time)?;
            entries.push(CalendarEntry {
                title: sanitize_title(&record.title),
                description,
                location: record.location.clone(),
                start,
                end,
            });
        } else {
            warn!(
                "event neither attended nor volunteered for, skipping: {}",
                record.title
            );
        }

        Ok(())
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new(TimeNormalizer::default())
    }
}

/// Drop characters that are not printable ASCII from an event title.
fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .collect()
}
