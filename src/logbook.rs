use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// One send of a route, possibly preceded by failed attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogbookEntry {
    pub route_name: String,
    pub grade: String,
    pub attempts: u32,
}

impl LogbookEntry {
    pub fn new(route_name: impl Into<String>, grade: impl Into<String>, attempts: u32) -> Self {
        Self {
            route_name: route_name.into(),
            grade: grade.into(),
            attempts,
        }
    }

    fn from_record(record: &StringRecord) -> Result<Self> {
        let line = record_line(record);

        if record.len() != 3 {
            return Err(Error::MalformedRow {
                line,
                expected: 3,
                found: record.len(),
            });
        }

        // attempts is always the last column
        let attempts = record[2].trim();
        let attempts = match attempts.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(Error::InvalidAttempts {
                    line,
                    value: attempts.to_string(),
                });
            }
        };

        // route names are kept verbatim, they are compared exactly
        Ok(Self::new(&record[0], record[1].trim(), attempts))
    }
}

/// A route together with the grade it was logged at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradedRoute {
    pub route_name: String,
    pub grade: String,
}

impl From<&LogbookEntry> for GradedRoute {
    fn from(entry: &LogbookEntry) -> Self {
        Self {
            route_name: entry.route_name.clone(),
            grade: entry.grade.clone(),
        }
    }
}

impl std::fmt::Display for GradedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.route_name, self.grade)
    }
}

/// Reads headerless `route,grade,attempts` rows in file order.
pub fn read_logbook<R: Read>(reader: R) -> Result<Vec<LogbookEntry>> {
    let entries = csv_reader(reader, Trim::None)
        .records()
        .map(|record| LogbookEntry::from_record(&record?))
        .collect::<Result<Vec<_>>>()?;

    debug!("loaded {} logbook entries", entries.len());
    Ok(entries)
}

pub fn read_logbook_path(path: impl AsRef<Path>) -> Result<Vec<LogbookEntry>> {
    let file = File::open(path).map_err(csv::Error::from)?;
    read_logbook(file)
}

pub(crate) fn csv_reader<R: Read>(reader: R, trim: Trim) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(trim)
        .from_reader(reader)
}

pub(crate) fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |pos| pos.line())
}
