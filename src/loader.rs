//! CSV loader for historical election records.
//!
//! Rows are deserialized into strictly typed [`Row`]s, augmented with the
//! derived `total_age` column, and held as an immutable [`ElectionTable`].

use crate::config::{LoaderConfig, MissingPolicy};
use crate::error::{DataLoadError, IndexOutOfRangeError};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const YEAR_COLUMN: &str = "election_year";
pub const WINNER_COLUMN: &str = "president";
pub const WINNER_AGE_COLUMN: &str = "president_age";
pub const COMPETITOR_COLUMN: &str = "competitor";
pub const COMPETITOR_AGE_COLUMN: &str = "competitor_age";
/// Derived column: winner age plus competitor age.
pub const TOTAL_AGE_COLUMN: &str = "total_age";

/// Columns every input file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    YEAR_COLUMN,
    WINNER_COLUMN,
    WINNER_AGE_COLUMN,
    COMPETITOR_COLUMN,
    COMPETITOR_AGE_COLUMN,
];

/// One raw record as it appears in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "election_year")]
    pub year: i32,
    #[serde(rename = "president")]
    pub winner: Option<String>,
    #[serde(rename = "president_age")]
    pub winner_age: Option<u32>,
    pub competitor: Option<String>,
    pub competitor_age: Option<u32>,
}

impl Row {
    pub fn new(year: i32, winner: &str, winner_age: u32, competitor: &str, competitor_age: u32) -> Self {
        Self {
            year,
            winner: Some(winner.to_string()),
            winner_age: Some(winner_age),
            competitor: Some(competitor.to_string()),
            competitor_age: Some(competitor_age),
        }
    }

    /// Name of the first required field that is absent, if any.
    fn first_missing(&self) -> Option<&'static str> {
        if self.winner.is_none() {
            Some(WINNER_COLUMN)
        } else if self.winner_age.is_none() {
            Some(WINNER_AGE_COLUMN)
        } else if self.competitor.is_none() {
            Some(COMPETITOR_COLUMN)
        } else if self.competitor_age.is_none() {
            Some(COMPETITOR_AGE_COLUMN)
        } else {
            None
        }
    }
}

/// A [`Row`] plus columns computed once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRow {
    #[serde(flatten)]
    pub row: Row,
    /// Winner age plus competitor age; `None` when either is absent.
    pub total_age: Option<u64>,
}

impl From<Row> for DerivedRow {
    fn from(row: Row) -> Self {
        let total_age = match (row.winner_age, row.competitor_age) {
            (Some(w), Some(c)) => Some(u64::from(w) + u64::from(c)),
            _ => None,
        };
        Self { row, total_age }
    }
}

/// The loaded, immutable table of derived rows in source order.
#[derive(Debug, Clone)]
pub struct ElectionTable {
    rows: Vec<DerivedRow>,
}

impl ElectionTable {
    /// Loads the file named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] when the file is missing or unreadable, lacks
    /// a required column, holds a value that does not coerce to its column
    /// type, has no rows, or (under [`MissingPolicy::Strict`]) has an empty
    /// cell.
    #[tracing::instrument(skip_all, fields(path = %config.path.display()))]
    pub fn load(config: &LoaderConfig) -> Result<Self, DataLoadError> {
        let path = config.path();
        if !path.exists() {
            return Err(DataLoadError::NotFound(path.to_path_buf()));
        }

        debug!("Opening data file");
        let file = File::open(path)?;
        let table = Self::from_reader(file, config.missing)?;

        info!(rows = table.len(), "Election table loaded");
        Ok(table)
    }

    /// Parses CSV from any reader. A header row is required.
    pub fn from_reader<R: Read>(reader: R, missing: MissingPolicy) -> Result<Self, DataLoadError> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let absent: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .map(str::to_string)
            .collect();
        if !absent.is_empty() {
            return Err(DataLoadError::MissingColumns(absent));
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let row: Row = record.deserialize(Some(&headers))?;

            if let Some(column) = row.first_missing() {
                let line = record.position().map_or(0, |p| p.line() as usize);
                match missing {
                    MissingPolicy::Strict => {
                        return Err(DataLoadError::MissingValue { line, column });
                    }
                    MissingPolicy::Lenient => {
                        warn!(line, column, year = row.year, "Row has absent value");
                    }
                }
            }

            rows.push(DerivedRow::from(row));
        }

        if rows.is_empty() {
            return Err(DataLoadError::Empty);
        }

        Ok(Self { rows })
    }

    /// Builds a table directly from rows, keeping their order.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Result<Self, DataLoadError> {
        let rows: Vec<DerivedRow> = rows.into_iter().map(DerivedRow::from).collect();
        if rows.is_empty() {
            return Err(DataLoadError::Empty);
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`.
    pub fn get(&self, index: usize) -> Result<&DerivedRow, IndexOutOfRangeError> {
        self.rows.get(index).ok_or(IndexOutOfRangeError {
            index,
            len: self.rows.len(),
        })
    }

    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivedRow> {
        self.rows.iter()
    }
}

/// Convenience for callers that only have a path.
pub fn load_path(path: impl AsRef<Path>) -> Result<ElectionTable, DataLoadError> {
    ElectionTable::load(&LoaderConfig::new(path.as_ref()))
}
