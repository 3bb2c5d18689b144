//! Reporting over a loaded [`ElectionEvaluator`].
//!
//! Supports the fixed text report, JSON documents for the summary, the
//! election list and single rows, and CSV export of the derived table.

use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::MissingPolicy;
use crate::elections::{Candidate, Election};
use crate::error::ReportError;
use crate::evaluator::ElectionEvaluator;
use crate::loader::{DerivedRow, ElectionTable};
use crate::stats::SummaryStats;

/// Renders the human-readable report, one line per fact.
///
/// Candidates are read through [`Election::from_row`], so absent names show
/// the same placeholder as the election list.
pub fn render_details(ev: &ElectionEvaluator) -> Result<Vec<String>, ReportError> {
    let summary = ev.get_summary();
    let election =
        |index| ElectionEvaluator::get_loc_from_index(ev.table(), index).map(Election::from_row);

    let oldest_election = election(summary.max_total_age_index)?;
    let oldest_competitor = election(summary.oldest_competitor_index)?;
    let oldest_winner = election(summary.oldest_winner_index)?;
    let youngest_winner = election(summary.youngest_winner_index)?;
    let youngest_competitor = election(summary.youngest_competitor_index)?;

    Ok(vec![
        format!("Oldest Election Year: {}", oldest_election.year),
        candidate_line("Oldest Competitor", oldest_competitor.competitor()),
        candidate_line("Oldest President", oldest_winner.winner()),
        candidate_line("Youngest President", youngest_winner.winner()),
        candidate_line("Youngest Competitor", youngest_competitor.competitor()),
        format!("Average Candidate Age: {}", summary.average_age),
    ])
}

fn candidate_line(label: &str, candidate: &Candidate) -> String {
    format!("{label}: {} - Age: {}", candidate.name, candidate.age)
}

/// Writes the report lines to `out`.
pub fn write_details<W: Write>(ev: &ElectionEvaluator, mut out: W) -> Result<(), ReportError> {
    for line in render_details(ev)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Prints the report lines to stdout.
pub fn print_details(ev: &ElectionEvaluator) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    write_details(ev, stdout.lock())
}

/// Summary document emitted by the `summary` command.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub missing_policy: MissingPolicy,
    pub rows: usize,
    pub exact_average_age: f64,
    #[serde(flatten)]
    pub summary: SummaryStats,
}

impl SummaryReport {
    pub fn from_evaluator(ev: &ElectionEvaluator) -> Self {
        let summary = *ev.get_summary();
        SummaryReport {
            generated_at: Utc::now(),
            source: ev.config().path.display().to_string(),
            missing_policy: ev.config().missing,
            rows: ev.table().len(),
            exact_average_age: summary.exact_average(),
            summary,
        }
    }
}

/// Pretty JSON for the summary document.
pub fn summary_json(ev: &ElectionEvaluator) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&SummaryReport::from_evaluator(ev))?)
}

/// Pretty JSON for the full election list.
pub fn elections_json(ev: &ElectionEvaluator) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(ev.get_elections())?)
}

/// Pretty JSON for a single derived row.
pub fn row_json(ev: &ElectionEvaluator, index: usize) -> Result<String, ReportError> {
    let row = ev.row(index)?;
    Ok(serde_json::to_string_pretty(row)?)
}

/// One output CSV record: the source columns plus `total_age`.
#[derive(Serialize)]
struct DerivedRecord<'a> {
    election_year: i32,
    president: Option<&'a str>,
    president_age: Option<u32>,
    competitor: Option<&'a str>,
    competitor_age: Option<u32>,
    total_age: Option<u64>,
}

impl<'a> From<&'a DerivedRow> for DerivedRecord<'a> {
    fn from(d: &'a DerivedRow) -> Self {
        DerivedRecord {
            election_year: d.row.year,
            president: d.row.winner.as_deref(),
            president_age: d.row.winner_age,
            competitor: d.row.competitor.as_deref(),
            competitor_age: d.row.competitor_age,
            total_age: d.total_age,
        }
    }
}

/// Serializes every derived row as CSV into `writer` and hands it back.
pub fn write_derived<W: Write>(table: &ElectionTable, writer: W) -> Result<W, ReportError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);

    for row in table.iter() {
        wtr.serialize(DerivedRecord::from(row))?;
    }
    wtr.flush()?;

    wtr.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}

/// Writes the derived table to `path`, gzip-compressed when `gzip` is set.
///
/// An existing file at `path` is replaced.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), gzip))]
pub fn write_derived_csv(
    table: &ElectionTable,
    path: impl AsRef<Path>,
    gzip: bool,
) -> Result<(), ReportError> {
    let file = File::create(path.as_ref())?;

    if gzip {
        let encoder = write_derived(table, GzEncoder::new(file, Compression::default()))?;
        encoder.finish()?;
    } else {
        write_derived(table, file)?.sync_all()?;
    }

    info!(rows = table.len(), gzip, "Derived table exported");
    Ok(())
}
