use std::fs;

use anyhow::Result;
use svol_ics_core::{calendar::CalendarBuilder, ics::IcsGenerator, prelude::*};

/// Convert a schedule export into an ICS calendar file.
pub fn convert_command(schedule_file: &str, calendar_file: &str) -> Result<()> {
    if !calendar_file.ends_with(".ics") {
        tracing::warn!(
            "recommended output calendar file extension is .ics: {}",
            calendar_file
        );
    }

    let schedule = Schedule::from_path(schedule_file)?;
    tracing::info!(
        "read {} schedule records from {}",
        schedule.len(),
        schedule_file
    );

    let builder = CalendarBuilder::new(TimeNormalizer::new(DEFAULT_TIMEZONE));
    let entries = builder.build(schedule.records())?;

    let generator = IcsGenerator::default();
    let ics_content = generator.generate(&entries)?;

    fs::write(calendar_file, ics_content)?;
    println!("✓ saved {} calendar events to {}", entries.len(), calendar_file);

    Ok(())
}
