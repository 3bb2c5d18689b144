//! CLI entry point for the election age statistics tool.
//!
//! Loads an election CSV and prints the text report, the summary or
//! election list as JSON, a single row, or an export of the derived table.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use election_ages::config::{DEFAULT_DATA_FILE, LoaderConfig, MissingPolicy};
use election_ages::evaluator::ElectionEvaluator;
use election_ages::output::{
    elections_json, print_details, row_json, summary_json, write_derived_csv,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "election_ages")]
#[command(about = "Age statistics over historical election results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// CSV with election_year, president, president_age, competitor, competitor_age
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Keep rows with empty cells instead of rejecting the file
    #[arg(long, default_value_t = false)]
    lenient: bool,
}

impl DataArgs {
    fn loader_config(&self) -> LoaderConfig {
        let missing = if self.lenient {
            MissingPolicy::Lenient
        } else {
            MissingPolicy::Strict
        };
        LoaderConfig::new(&self.file).with_missing_policy(missing)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the oldest/youngest candidates and the average age
    Report {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Print summary statistics as JSON
    Summary {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Print every election with its two candidates as JSON
    Elections {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Print one row, including its total age, as JSON
    Row {
        /// Zero-based row position
        index: usize,

        #[command(flatten)]
        data: DataArgs,
    },
    /// Write the table with the derived total_age column to a CSV file
    Export {
        #[command(flatten)]
        data: DataArgs,

        /// CSV file to write
        #[arg(short, long, default_value = "derived.csv")]
        output: PathBuf,

        /// Gzip compress the output
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/election_ages.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("election_ages.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { data } => {
            let ev = ElectionEvaluator::new(data.loader_config())?;
            debug!(summary = ?ev.get_summary(), "Summary statistics");
            print_details(&ev)?;
        }
        Commands::Summary { data } => {
            let ev = ElectionEvaluator::new(data.loader_config())?;
            println!("{}", summary_json(&ev)?);
        }
        Commands::Elections { data } => {
            let ev = ElectionEvaluator::new(data.loader_config())?;
            info!(count = ev.get_elections().len(), "Writing elections");
            println!("{}", elections_json(&ev)?);
        }
        Commands::Row { index, data } => {
            let ev = ElectionEvaluator::new(data.loader_config())?;
            println!("{}", row_json(&ev, index)?);
        }
        Commands::Export { data, output, gzip } => {
            let ev = ElectionEvaluator::new(data.loader_config())?;
            write_derived_csv(ev.table(), &output, gzip)?;
        }
    }

    Ok(())
}
