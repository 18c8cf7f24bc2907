use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};

use crate::{Error, EventRecord, Result};

/// Columns every export header must carry.
const REQUIRED_COLUMNS: [&str; 5] = ["Day", "Event", "Type", "Tag", "Location"];

/// A parsed schedule export.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    records: Vec<EventRecord>,
}

impl Schedule {
    /// Read a tab-delimited schedule export from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref).map_err(|err| {
            Error::Schedule(format!(
                "cannot open schedule file {}: {}",
                path_ref.display(),
                err
            ))
        })?;
        Self::from_reader(file)
    }

    /// Read a tab-delimited schedule export from any reader.
    ///
    /// The first line names the columns; the line after it is a subtitle
    /// row and is discarded unconditionally before data rows are read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|name| name == column) {
                return Err(Error::Schedule(format!(
                    "header is missing required column '{}'",
                    column
                )));
            }
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            if index == 0 {
                // Second, human-oriented header line.
                continue;
            }
            records.push(parse_record(&headers, &row, index + 2)?);
        }

        tracing::debug!("read {} schedule records", records.len());
        Ok(Self { records })
    }

    /// Parsed records in input order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Number of parsed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the export contained no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(headers: &StringRecord, row: &StringRecord, line: usize) -> Result<EventRecord> {
    let required = |column: &str| -> Result<String> {
        cell(headers, row, column).map(ToString::to_string).ok_or_else(|| {
            Error::Schedule(format!("line {}: missing value for column '{}'", line, column))
        })
    };
    let optional = |column: &str| -> Option<String> {
        cell(headers, row, column)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
    };

    Ok(EventRecord {
        day: required("Day")?,
        title: required("Event")?,
        event_type: required("Type")?,
        tag: required("Tag")?,
        location: required("Location")?,
        volunteer: optional("Volunteer"),
        attend: optional("Attend"),
        time: optional("Time"),
    })
}

/// Look a cell up by column name.
fn cell<'a>(headers: &StringRecord, row: &'a StringRecord, column: &str) -> Option<&'a str> {
    headers
        .iter()
        .position(|name| name == column)
        .and_then(|index| row.get(index))
}
