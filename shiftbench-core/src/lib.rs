#![warn(missing_docs)]
//! Shiftbench Core - Instrumented Sorting
//!
//! This crate provides the measured part of the harness:
//! - iterative and recursive insertion sort with critical-operation
//!   (element shift) counting
//! - wall-clock timing around the sort itself
//! - post-sort verification that rejects out-of-order output
//! - CPU affinity pinning for uncontended measurement

mod measure;
mod sort;
mod verify;

pub use measure::{pin_to_cpu, Timer};
pub use sort::{max_shift_count, sort_iterative, sort_recursive};
pub use sort::{RunResult, SortVariant, UnsortedError};
pub use verify::is_sorted;
