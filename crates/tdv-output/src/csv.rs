//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `arc_metrics.csv`
//! - `instance_summaries.csv`
//!
//! Undefined ratios are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ArcMetricRow, InstanceSummaryRow, OutputResult};

/// Writes analysis output to two CSV files.
pub struct CsvWriter {
    arc_metrics: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut arc_metrics = Writer::from_path(dir.join("arc_metrics.csv"))?;
        arc_metrics.write_record([
            "instance_name",
            "instance_type",
            "route_idx",
            "arc_idx",
            "node_from",
            "node_to",
            "departure_time",
            "actual_travel_time",
            "fastest_feasible_time",
            "slowest_feasible_time",
            "actual_distance",
            "shortest_feasible_distance",
            "longest_feasible_distance",
            "ratio_to_min",
            "ratio_to_max",
            "ratio_to_min_dist",
            "ratio_to_max_dist",
            "decile_rank",
            "decile_rank_distance",
            "proximity_category",
            "proximity_category_distance",
            "num_feasible_arcs",
        ])?;

        let mut summaries = Writer::from_path(dir.join("instance_summaries.csv"))?;
        summaries.write_record([
            "instance_name",
            "instance_type",
            "total_arcs",
            "total_routes",
            "avg_feasible_arcs",
            "total_travel_time",
            "near_optimal_pct",
            "far_pct",
            "avg_decile",
            "avg_ratio_to_min",
            "avg_ratio_to_max",
            "near_optimal_pct_dist",
            "far_pct_dist",
            "avg_decile_dist",
            "avg_ratio_to_min_dist",
            "avg_ratio_to_max_dist",
        ])?;

        Ok(Self {
            arc_metrics,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_arc_metrics(&mut self, rows: &[ArcMetricRow]) -> OutputResult<()> {
        for row in rows {
            self.arc_metrics.write_record(&[
                row.instance_name.clone(),
                row.instance_type.clone(),
                row.route_idx.to_string(),
                row.arc_idx.to_string(),
                row.node_from.to_string(),
                row.node_to.to_string(),
                row.departure_time.to_string(),
                row.actual_travel_time.to_string(),
                row.fastest_feasible_time.to_string(),
                row.slowest_feasible_time.to_string(),
                row.actual_distance.to_string(),
                row.shortest_feasible_distance.to_string(),
                row.longest_feasible_distance.to_string(),
                opt(row.ratio_to_min),
                opt(row.ratio_to_max),
                opt(row.ratio_to_min_dist),
                opt(row.ratio_to_max_dist),
                row.decile_rank.to_string(),
                row.decile_rank_distance.to_string(),
                row.proximity_category.clone(),
                row.proximity_category_distance.clone(),
                row.num_feasible_arcs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_instance_summary(&mut self, row: &InstanceSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.instance_name.clone(),
            row.instance_type.clone(),
            row.total_arcs.to_string(),
            row.total_routes.to_string(),
            row.avg_feasible_arcs.to_string(),
            row.total_travel_time.to_string(),
            row.near_optimal_pct.to_string(),
            row.far_pct.to_string(),
            row.avg_decile.to_string(),
            opt(row.avg_ratio_to_min),
            opt(row.avg_ratio_to_max),
            row.near_optimal_pct_dist.to_string(),
            row.far_pct_dist.to_string(),
            row.avg_decile_dist.to_string(),
            opt(row.avg_ratio_to_min_dist),
            opt(row.avg_ratio_to_max_dist),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.arc_metrics.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
