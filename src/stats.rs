//! Summary statistics over a loaded [`ElectionTable`].

use serde::Serialize;
use tracing::info;

use crate::error::DataLoadError;
use crate::loader::{
    COMPETITOR_AGE_COLUMN, DerivedRow, ElectionTable, TOTAL_AGE_COLUMN, WINNER_AGE_COLUMN,
};
use crate::utility::{argmax, argmin, round_half_even};

/// Aggregate figures computed once over the full table.
///
/// Every index is a valid position in the table it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub age_sum: u64,
    pub candidate_count: u64,
    /// `age_sum / candidate_count`, rounded half to even.
    pub average_age: u64,

    pub max_total_age_index: usize,
    pub min_total_age_index: usize,
    pub youngest_winner_index: usize,
    pub oldest_winner_index: usize,
    pub youngest_competitor_index: usize,
    pub oldest_competitor_index: usize,
}

impl SummaryStats {
    /// Computes the summary over the age columns of `table`.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError::NoValues`] when an age column holds no
    /// present value, which also covers the zero-candidate case.
    pub fn from_table(table: &ElectionTable) -> Result<Self, DataLoadError> {
        let rows = table.rows();

        let winner_ages = || rows.iter().map(|r| r.row.winner_age);
        let competitor_ages = || rows.iter().map(|r| r.row.competitor_age);
        let total_ages = || rows.iter().map(|r: &DerivedRow| r.total_age);

        let present: Vec<u32> = winner_ages().chain(competitor_ages()).flatten().collect();
        let age_sum: u64 = present.iter().map(|&age| u64::from(age)).sum();
        let candidate_count = present.len() as u64;

        let average_age = round_half_even(age_sum, candidate_count).ok_or(
            DataLoadError::NoValues {
                column: WINNER_AGE_COLUMN,
            },
        )?;

        let youngest_winner_index = argmin(winner_ages()).ok_or(DataLoadError::NoValues {
            column: WINNER_AGE_COLUMN,
        })?;
        let oldest_winner_index = argmax(winner_ages()).ok_or(DataLoadError::NoValues {
            column: WINNER_AGE_COLUMN,
        })?;
        let youngest_competitor_index =
            argmin(competitor_ages()).ok_or(DataLoadError::NoValues {
                column: COMPETITOR_AGE_COLUMN,
            })?;
        let oldest_competitor_index = argmax(competitor_ages()).ok_or(DataLoadError::NoValues {
            column: COMPETITOR_AGE_COLUMN,
        })?;
        let max_total_age_index = argmax(total_ages()).ok_or(DataLoadError::NoValues {
            column: TOTAL_AGE_COLUMN,
        })?;
        let min_total_age_index = argmin(total_ages()).ok_or(DataLoadError::NoValues {
            column: TOTAL_AGE_COLUMN,
        })?;

        let stats = SummaryStats {
            age_sum,
            candidate_count,
            average_age,
            max_total_age_index,
            min_total_age_index,
            youngest_winner_index,
            oldest_winner_index,
            youngest_competitor_index,
            oldest_competitor_index,
        };

        info!(age_sum, candidate_count, average_age, "Summary statistics computed");
        Ok(stats)
    }

    /// Average over the present ages without rounding.
    pub fn exact_average(&self) -> f64 {
        if self.candidate_count == 0 {
            0.0
        } else {
            self.age_sum as f64 / self.candidate_count as f64
        }
    }
}
