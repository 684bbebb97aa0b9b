//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ArcMetricRow, InstanceSummaryRow, OutputResult};

/// Trait implemented by CSV, SQLite, and Parquet writers.
pub trait OutputWriter {
    /// Write a batch of flattened arc metric rows.
    fn write_arc_metrics(&mut self, rows: &[ArcMetricRow]) -> OutputResult<()>;

    /// Write one per-instance summary row.
    fn write_instance_summary(&mut self, row: &InstanceSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
