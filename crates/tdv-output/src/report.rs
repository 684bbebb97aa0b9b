//! Bridges a finished [`CorpusReport`] to any [`OutputWriter`] backend.

use tdv_analysis::CorpusReport;

use crate::row::{ArcMetricRow, InstanceSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Write every analyzed instance's rows — flat arc metrics plus the
/// per-instance summary — and finish the writer.
///
/// Skipped instances have no rows to write; they are recorded in
/// `report.skipped` for the caller to surface however it likes.
pub fn write_report<W: OutputWriter>(writer: &mut W, report: &CorpusReport) -> OutputResult<()> {
    for analysis in &report.analyses {
        let rows: Vec<ArcMetricRow> = analysis
            .records
            .iter()
            .map(|r| ArcMetricRow::from_record(&analysis.summary, r))
            .collect();
        writer.write_arc_metrics(&rows)?;
        writer.write_instance_summary(&InstanceSummaryRow::from_summary(&analysis.summary))?;
    }
    writer.finish()
}
