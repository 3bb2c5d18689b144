pub mod config;
pub mod elections;
pub mod error;
pub mod evaluator;
pub mod loader;
pub mod output;
pub mod stats;
pub mod utility;

pub use config::{LoaderConfig, MissingPolicy};
pub use elections::{Candidate, Election};
pub use error::{DataLoadError, IndexOutOfRangeError, ReportError};
pub use evaluator::ElectionEvaluator;
pub use loader::{DerivedRow, ElectionTable, Row};
pub use stats::SummaryStats;
