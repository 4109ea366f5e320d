#![warn(missing_docs)]
//! Shiftbench Report - Raw Data and Summary Output
//!
//! Covers both ends of the persisted trial data:
//! - the raw-data line format (one line per input size, `T` count/time
//!   pairs per line), writer and parser
//! - summary rows per size and their rendering as a fixed-width terminal
//!   table or machine-readable JSON

mod format;
mod json;
mod raw;
mod report;

pub use format::format_summary_table;
pub use json::generate_json_report;
pub use raw::{parse_raw_file, RawDataError, RawDataWriter, RawTrialLine};
pub use report::{Report, ReportMeta, SizeSummary};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal table
    Human,
    /// Pretty-printed JSON with report metadata
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
