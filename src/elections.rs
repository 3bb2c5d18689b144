//! Typed per-record view of the table: one [`Election`] with two
//! [`Candidate`]s per row.

use serde::Serialize;

use crate::loader::{DerivedRow, ElectionTable};

/// Placeholder used for an absent candidate name.
pub const PLACEHOLDER_NAME: &str = "name";

/// One participant in an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub age: u32,
    pub name: String,
    pub is_winner: bool,
}

/// One election, candidates ordered `[winner, competitor]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Election {
    pub year: i32,
    pub candidates: [Candidate; 2],
}

impl Election {
    /// Maps a row to an election. Absent ages become `0` and absent names
    /// become [`PLACEHOLDER_NAME`]; rows loaded under the strict policy never
    /// have either.
    pub fn from_row(row: &DerivedRow) -> Self {
        let row = &row.row;
        Election {
            year: row.year,
            candidates: [
                Candidate {
                    age: row.winner_age.unwrap_or(0),
                    name: name_or_placeholder(row.winner.as_deref()),
                    is_winner: true,
                },
                Candidate {
                    age: row.competitor_age.unwrap_or(0),
                    name: name_or_placeholder(row.competitor.as_deref()),
                    is_winner: false,
                },
            ],
        }
    }

    pub fn winner(&self) -> &Candidate {
        &self.candidates[0]
    }

    pub fn competitor(&self) -> &Candidate {
        &self.candidates[1]
    }
}

fn name_or_placeholder(name: Option<&str>) -> String {
    name.unwrap_or(PLACEHOLDER_NAME).to_string()
}

/// Maps every row of `table`, in row order.
pub fn map_elections(table: &ElectionTable) -> Vec<Election> {
    table.iter().map(Election::from_row).collect()
}
