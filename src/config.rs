//! Loader configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default data file name used by the CLI when no path is given.
pub const DEFAULT_DATA_FILE: &str = "presidents_election_full.csv";

/// How absent cells in the source data are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Any absent name or age aborts the load.
    #[default]
    Strict,
    /// Absent values are kept as `None`; statistics skip them and the
    /// record mapper substitutes placeholders.
    Lenient,
}

/// Everything the loader needs, passed in at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub path: PathBuf,
    pub missing: MissingPolicy,
}

impl LoaderConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing: MissingPolicy::default(),
        }
    }

    /// Set the missing-value policy.
    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
