mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "svol-ics")]
#[command(about = "Convert an exported volunteer schedule into an ICS calendar")]
#[command(version)]
struct Cli {
    /// Exported tab-delimited schedule file
    schedule_file: String,

    /// File to save the ICS calendar to
    calendar_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    commands::convert_command(&cli.schedule_file, &cli.calendar_file)
}
