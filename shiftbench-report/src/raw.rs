//! Raw Trial Data Format
//!
//! One file per sort variant, one line per input size, in processing
//! order. Line layout: the integer size, then exactly `T` pairs of
//! `(count, time)` values, all single-space separated, newline terminated:
//!
//! ```text
//! 500 731.0 102345.0 705.0 99871.0
//! ```
//!
//! Counts hold integral values but are written and parsed as floats for
//! downstream arithmetic; times are nanoseconds.

use shiftbench_core::RunResult;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing raw trial data
#[derive(Debug, Error)]
pub enum RawDataError {
    /// Underlying file I/O failure
    #[error("raw data io error")]
    Io(#[from] std::io::Error),

    /// A line that does not follow the size-then-pairs layout
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// A structurally valid line with the wrong number of trial pairs
    #[error("line {line}: expected {expected} trial pairs, got {got}")]
    WrongTrialCount {
        /// 1-based line number
        line: usize,
        /// Configured trial count
        expected: usize,
        /// Pairs actually present
        got: usize,
    },
}

/// One parsed raw-data line: all trials for one input size
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrialLine {
    /// Input size the line describes
    pub size: usize,
    /// Critical operation counts, in trial order
    pub counts: Vec<f64>,
    /// Elapsed times in nanoseconds, in trial order
    pub times: Vec<f64>,
}

/// Appends one raw line per completed input size.
///
/// Each line is written and flushed as a unit, so a failure while
/// processing a later size cannot corrupt lines already on disk.
pub struct RawDataWriter {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl RawDataWriter {
    /// Create (or truncate) the raw data file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RawDataError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Path this writer appends to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the line for one input size: the size, then every trial's
    /// `(count, time)` pair in trial order.
    pub fn append_line(&mut self, size: usize, results: &[RunResult]) -> Result<(), RawDataError> {
        let mut line = String::new();
        let _ = write!(line, "{}", size);
        for r in results {
            let _ = write!(line, " {:.1} {:.1}", r.shift_count as f64, r.elapsed_ns as f64);
        }
        line.push('\n');

        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Parse a whole raw data file, validating every line against the
/// configured trial count. Blank lines are not permitted mid-file; a
/// trailing newline is.
pub fn parse_raw_file(content: &str, trials: usize) -> Result<Vec<RawTrialLine>, RawDataError> {
    let mut lines = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() {
            return Err(RawDataError::Malformed {
                line: line_no,
                reason: "empty line".to_string(),
            });
        }
        lines.push(parse_line(raw, line_no, trials)?);
    }
    Ok(lines)
}

fn parse_line(raw: &str, line_no: usize, trials: usize) -> Result<RawTrialLine, RawDataError> {
    let mut fields = raw.split_whitespace();

    let size_field = fields.next().ok_or_else(|| RawDataError::Malformed {
        line: line_no,
        reason: "missing size field".to_string(),
    })?;
    let size: usize = size_field.parse().map_err(|_| RawDataError::Malformed {
        line: line_no,
        reason: format!("invalid size field {:?}", size_field),
    })?;

    let values: Vec<f64> = fields
        .map(|field| {
            field.parse::<f64>().map_err(|_| RawDataError::Malformed {
                line: line_no,
                reason: format!("invalid value {:?}", field),
            })
        })
        .collect::<Result<_, _>>()?;

    if values.len() % 2 != 0 {
        return Err(RawDataError::Malformed {
            line: line_no,
            reason: format!("odd value count {}, expected count/time pairs", values.len()),
        });
    }
    let pairs = values.len() / 2;
    if pairs != trials {
        return Err(RawDataError::WrongTrialCount {
            line: line_no,
            expected: trials,
            got: pairs,
        });
    }

    let mut counts = Vec::with_capacity(pairs);
    let mut times = Vec::with_capacity(pairs);
    for pair in values.chunks_exact(2) {
        counts.push(pair[0]);
        times.push(pair[1]);
    }

    Ok(RawTrialLine { size, counts, times })
}
