use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

use crate::core::filters::{ALL_GENDERS, ALL_GYMS, ALL_LOCATIONS, ALL_WEIGHTS, ALL_YEARS};
use crate::core::stats::{distinct_in_order, safe_ratio};
use crate::models::{BoxerOption, FightRecord, FilterOptions, Gender};

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Boxer_Name",
    "Gym",
    "Location",
    "Gender",
    "Weight_Class",
    "Age",
    "Year",
    "Wins",
    "Losses",
];

/// Errors that can occur while reading or writing fight records
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),
}

/// One CSV row before derived columns are computed
#[derive(Debug, Deserialize)]
struct RawFightRecord {
    #[serde(rename = "Boxer_Name")]
    boxer_name: String,
    #[serde(rename = "Gym")]
    gym: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Gender")]
    gender: Gender,
    #[serde(rename = "Weight_Class")]
    weight_class: String,
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Wins")]
    wins: u32,
    #[serde(rename = "Losses")]
    losses: u32,
}

impl From<RawFightRecord> for FightRecord {
    fn from(raw: RawFightRecord) -> Self {
        FightRecord::new(
            raw.boxer_name,
            raw.gym,
            raw.location,
            raw.gender,
            raw.weight_class,
            raw.age,
            raw.year,
            raw.wins,
            raw.losses,
        )
    }
}

/// Read-only, ordered fight-record table
///
/// Row order is the load order and is never changed; "first row" lookups
/// across the crate rely on it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<FightRecord>,
}

impl Dataset {
    /// Build a table from records, computing the derived columns
    pub fn new(mut records: Vec<FightRecord>) -> Self {
        assign_derived_columns(&mut records);
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a CSV file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        let dataset = Self::from_reader(file)?;
        tracing::info!(
            "Loaded {} fight records from {}",
            dataset.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    /// Load a CSV file, degrading to an empty table on any failure
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::warn!(
                    "Failed to load data from {} ({}), continuing with an empty table",
                    path.as_ref().display(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// Parse CSV content; malformed rows are skipped with a warning
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for result in rdr.records() {
            let raw: StringRecord = result?;

            if raw.iter().all(|f| f.is_empty()) {
                continue;
            }

            match raw.deserialize::<RawFightRecord>(Some(&headers)) {
                Ok(row) => records.push(FightRecord::from(row)),
                Err(e) => {
                    tracing::warn!(
                        "Skipping malformed record at line {}: {}",
                        raw.position().map(|p| p.line()).unwrap_or(0),
                        e
                    );
                }
            }
        }

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[FightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct filter values, each list prefixed with its sentinel
    pub fn available_filters(&self) -> FilterOptions {
        if self.records.is_empty() {
            return FilterOptions::default();
        }

        fn with_sentinel<I: IntoIterator<Item = String>>(sentinel: &str, values: I) -> Vec<String> {
            std::iter::once(sentinel.to_string()).chain(values).collect()
        }

        let locations: BTreeSet<&str> = self.records.iter().map(|r| r.location.as_str()).collect();
        let gyms: BTreeSet<&str> = self.records.iter().map(|r| r.gym.as_str()).collect();
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        let weights: BTreeSet<&str> = self.records.iter().map(|r| r.weight_class.as_str()).collect();

        FilterOptions {
            locations: with_sentinel(ALL_LOCATIONS, locations.into_iter().map(String::from)),
            gyms: with_sentinel(ALL_GYMS, gyms.into_iter().map(String::from)),
            years: with_sentinel(ALL_YEARS, years.into_iter().map(|y| y.to_string())),
            weights: with_sentinel(ALL_WEIGHTS, weights.into_iter().map(String::from)),
            genders: vec![
                ALL_GENDERS.to_string(),
                Gender::Male.to_string(),
                Gender::Female.to_string(),
            ],
        }
    }
}

/// Fill win ratio, total fights and the performance score for every row
///
/// performance = 0.6 * win_ratio
///             + 0.2 * wins / (max_wins + 1)
///             + 0.2 * total_fights / (max_total_fights + 1)
fn assign_derived_columns(records: &mut [FightRecord]) {
    let max_wins = records.iter().map(|r| r.wins).max().unwrap_or(0) as f64;
    let max_total = records.iter().map(|r| u64::from(r.wins) + u64::from(r.losses)).max().unwrap_or(0) as f64;

    for record in records.iter_mut() {
        record.total_fights = u64::from(record.wins) + u64::from(record.losses);
        record.win_ratio = safe_ratio(record.wins as f64, record.total_fights as f64);
        record.performance_score = record.win_ratio * 0.6
            + (record.wins as f64 / (max_wins + 1.0)) * 0.2
            + (record.total_fights as f64 / (max_total + 1.0)) * 0.2;
    }
}

/// Boxer dropdown entries, sorted by name
///
/// Each boxer is labelled with the gym and location of its first remaining row.
pub fn boxers_with_gyms(
    records: &[FightRecord],
    selected_gyms: &[String],
    gender: Option<Gender>,
    location: Option<&str>,
) -> Vec<BoxerOption> {
    let remaining: Vec<&FightRecord> = records
        .iter()
        .filter(|r| location.map_or(true, |l| r.location == l))
        .filter(|r| selected_gyms.is_empty() || selected_gyms.contains(&r.gym))
        .filter(|r| gender.map_or(true, |g| r.gender == g))
        .collect();

    let mut names = distinct_in_order(remaining.iter().map(|r| r.boxer_name.as_str()));
    names.sort_unstable();

    names
        .into_iter()
        .filter_map(|name| {
            remaining.iter().find(|r| r.boxer_name == name).map(|first| BoxerOption {
                value: name.to_string(),
                display: format!("{} ({}, {})", name, first.gym, first.location),
            })
        })
        .collect()
}

/// Write rows, derived columns included, as CSV
pub fn write_csv<W: Write>(records: &[FightRecord], writer: W) -> Result<(), DatasetError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
