use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Schedule reading failed: {0}")]
    Schedule(String),

    #[error("Delimited input parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed time range '{0}': expected exactly one '-' between start and end")]
    MalformedTimeRange(String),

    #[error("Unparseable time token '{token}'")]
    TimeToken {
        token: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Local time {time} is ambiguous or nonexistent in timezone {tz}")]
    LocalTime {
        time: chrono::NaiveDateTime,
        tz: chrono_tz::Tz,
    },

    #[error("Time range '{0}' must end after it starts")]
    InvertedRange(String),

    #[error("ICS generation failed: {0}")]
    IcsGeneration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
