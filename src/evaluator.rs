//! Load, summarize, and map an election table in one step.

use tracing::debug;

use crate::config::LoaderConfig;
use crate::elections::{Election, map_elections};
use crate::error::{DataLoadError, IndexOutOfRangeError};
use crate::loader::{DerivedRow, ElectionTable};
use crate::stats::SummaryStats;

/// An immutable snapshot of one data file and everything derived from it.
#[derive(Debug, Clone)]
pub struct ElectionEvaluator {
    config: LoaderConfig,
    table: ElectionTable,
    summary: SummaryStats,
    elections: Vec<Election>,
}

impl ElectionEvaluator {
    /// Loads the file named by `config` and computes the summary and the
    /// election list eagerly.
    pub fn new(config: LoaderConfig) -> Result<Self, DataLoadError> {
        let table = ElectionTable::load(&config)?;
        Self::from_table(config, table)
    }

    /// Builds an evaluator over an already loaded table.
    pub fn from_table(config: LoaderConfig, table: ElectionTable) -> Result<Self, DataLoadError> {
        let summary = SummaryStats::from_table(&table)?;
        let elections = map_elections(&table);
        debug!(elections = elections.len(), "Elections mapped");

        Ok(Self {
            config,
            table,
            summary,
            elections,
        })
    }

    pub fn get_summary(&self) -> &SummaryStats {
        &self.summary
    }

    pub fn get_elections(&self) -> &[Election] {
        &self.elections
    }

    pub fn table(&self) -> &ElectionTable {
        &self.table
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Returns the row of `table` at `index`.
    pub fn get_loc_from_index(
        table: &ElectionTable,
        index: usize,
    ) -> Result<&DerivedRow, IndexOutOfRangeError> {
        table.get(index)
    }

    /// Shorthand for [`Self::get_loc_from_index`] on this evaluator's table.
    pub fn row(&self, index: usize) -> Result<&DerivedRow, IndexOutOfRangeError> {
        Self::get_loc_from_index(&self.table, index)
    }
}
