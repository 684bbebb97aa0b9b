//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `arc_metrics.parquet`
//! - `instance_summaries.parquet`
//!
//! Undefined ratios become nulls in the (nullable) ratio columns.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt8Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{ArcMetricRow, InstanceSummaryRow, OutputResult};

fn arc_metric_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("instance_name",               DataType::Utf8,    false),
        Field::new("instance_type",               DataType::Utf8,    false),
        Field::new("route_idx",                   DataType::UInt32,  false),
        Field::new("arc_idx",                     DataType::UInt32,  false),
        Field::new("node_from",                   DataType::UInt32,  false),
        Field::new("node_to",                     DataType::UInt32,  false),
        Field::new("departure_time",              DataType::Float64, false),
        Field::new("actual_travel_time",          DataType::Float64, false),
        Field::new("fastest_feasible_time",       DataType::Float64, false),
        Field::new("slowest_feasible_time",       DataType::Float64, false),
        Field::new("actual_distance",             DataType::Float64, false),
        Field::new("shortest_feasible_distance",  DataType::Float64, false),
        Field::new("longest_feasible_distance",   DataType::Float64, false),
        Field::new("ratio_to_min",                DataType::Float64, true),
        Field::new("ratio_to_max",                DataType::Float64, true),
        Field::new("ratio_to_min_dist",           DataType::Float64, true),
        Field::new("ratio_to_max_dist",           DataType::Float64, true),
        Field::new("decile_rank",                 DataType::UInt8,   false),
        Field::new("decile_rank_distance",        DataType::UInt8,   false),
        Field::new("proximity_category",          DataType::Utf8,    false),
        Field::new("proximity_category_distance", DataType::Utf8,    false),
        Field::new("num_feasible_arcs",           DataType::UInt64,  false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("instance_name",         DataType::Utf8,    false),
        Field::new("instance_type",         DataType::Utf8,    false),
        Field::new("total_arcs",            DataType::UInt64,  false),
        Field::new("total_routes",          DataType::UInt64,  false),
        Field::new("avg_feasible_arcs",     DataType::Float64, false),
        Field::new("total_travel_time",     DataType::Float64, false),
        Field::new("near_optimal_pct",      DataType::Float64, false),
        Field::new("far_pct",               DataType::Float64, false),
        Field::new("avg_decile",            DataType::Float64, false),
        Field::new("avg_ratio_to_min",      DataType::Float64, true),
        Field::new("avg_ratio_to_max",      DataType::Float64, true),
        Field::new("near_optimal_pct_dist", DataType::Float64, false),
        Field::new("far_pct_dist",          DataType::Float64, false),
        Field::new("avg_decile_dist",       DataType::Float64, false),
        Field::new("avg_ratio_to_min_dist", DataType::Float64, true),
        Field::new("avg_ratio_to_max_dist", DataType::Float64, true),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes analysis output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    arc_metrics:    Option<ArrowWriter<File>>,
    summaries:      Option<ArrowWriter<File>>,
    metric_schema:  Arc<Schema>,
    summary_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let metric_schema = arc_metric_schema();
        let summary_schema = summary_schema();

        let metric_file = File::create(dir.join("arc_metrics.parquet"))?;
        let arc_metrics = ArrowWriter::try_new(
            metric_file,
            Arc::clone(&metric_schema),
            Some(snappy_props()),
        )?;

        let summary_file = File::create(dir.join("instance_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summary_file,
            Arc::clone(&summary_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            arc_metrics: Some(arc_metrics),
            summaries: Some(summaries),
            metric_schema,
            summary_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_arc_metrics(&mut self, rows: &[ArcMetricRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.arc_metrics.as_mut() else {
            return Ok(());
        };

        let mut instance_names  = StringBuilder::new();
        let mut instance_types  = StringBuilder::new();
        let mut route_idxs      = UInt32Builder::new();
        let mut arc_idxs        = UInt32Builder::new();
        let mut nodes_from      = UInt32Builder::new();
        let mut nodes_to        = UInt32Builder::new();
        let mut departures      = Float64Builder::new();
        let mut actual_times    = Float64Builder::new();
        let mut fastest_times   = Float64Builder::new();
        let mut slowest_times   = Float64Builder::new();
        let mut actual_dists    = Float64Builder::new();
        let mut shortest_dists  = Float64Builder::new();
        let mut longest_dists   = Float64Builder::new();
        let mut ratios_min      = Float64Builder::new();
        let mut ratios_max      = Float64Builder::new();
        let mut ratios_min_dist = Float64Builder::new();
        let mut ratios_max_dist = Float64Builder::new();
        let mut deciles         = UInt8Builder::new();
        let mut deciles_dist    = UInt8Builder::new();
        let mut proximities     = StringBuilder::new();
        let mut proximities_d   = StringBuilder::new();
        let mut feasible_counts = UInt64Builder::new();

        for row in rows {
            instance_names.append_value(&row.instance_name);
            instance_types.append_value(&row.instance_type);
            route_idxs.append_value(row.route_idx);
            arc_idxs.append_value(row.arc_idx);
            nodes_from.append_value(row.node_from);
            nodes_to.append_value(row.node_to);
            departures.append_value(row.departure_time);
            actual_times.append_value(row.actual_travel_time);
            fastest_times.append_value(row.fastest_feasible_time);
            slowest_times.append_value(row.slowest_feasible_time);
            actual_dists.append_value(row.actual_distance);
            shortest_dists.append_value(row.shortest_feasible_distance);
            longest_dists.append_value(row.longest_feasible_distance);
            ratios_min.append_option(row.ratio_to_min);
            ratios_max.append_option(row.ratio_to_max);
            ratios_min_dist.append_option(row.ratio_to_min_dist);
            ratios_max_dist.append_option(row.ratio_to_max_dist);
            deciles.append_value(row.decile_rank);
            deciles_dist.append_value(row.decile_rank_distance);
            proximities.append_value(&row.proximity_category);
            proximities_d.append_value(&row.proximity_category_distance);
            feasible_counts.append_value(row.num_feasible_arcs);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.metric_schema),
            vec![
                Arc::new(instance_names.finish()),
                Arc::new(instance_types.finish()),
                Arc::new(route_idxs.finish()),
                Arc::new(arc_idxs.finish()),
                Arc::new(nodes_from.finish()),
                Arc::new(nodes_to.finish()),
                Arc::new(departures.finish()),
                Arc::new(actual_times.finish()),
                Arc::new(fastest_times.finish()),
                Arc::new(slowest_times.finish()),
                Arc::new(actual_dists.finish()),
                Arc::new(shortest_dists.finish()),
                Arc::new(longest_dists.finish()),
                Arc::new(ratios_min.finish()),
                Arc::new(ratios_max.finish()),
                Arc::new(ratios_min_dist.finish()),
                Arc::new(ratios_max_dist.finish()),
                Arc::new(deciles.finish()),
                Arc::new(deciles_dist.finish()),
                Arc::new(proximities.finish()),
                Arc::new(proximities_d.finish()),
                Arc::new(feasible_counts.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_instance_summary(&mut self, row: &InstanceSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut names           = StringBuilder::new();
        let mut types           = StringBuilder::new();
        let mut total_arcs      = UInt64Builder::new();
        let mut total_routes    = UInt64Builder::new();
        let mut avg_feasible    = Float64Builder::new();
        let mut total_time      = Float64Builder::new();
        let mut near_pct        = Float64Builder::new();
        let mut far_pct         = Float64Builder::new();
        let mut avg_decile      = Float64Builder::new();
        let mut avg_rmin        = Float64Builder::new();
        let mut avg_rmax        = Float64Builder::new();
        let mut near_pct_dist   = Float64Builder::new();
        let mut far_pct_dist    = Float64Builder::new();
        let mut avg_decile_dist = Float64Builder::new();
        let mut avg_rmin_dist   = Float64Builder::new();
        let mut avg_rmax_dist   = Float64Builder::new();

        names.append_value(&row.instance_name);
        types.append_value(&row.instance_type);
        total_arcs.append_value(row.total_arcs);
        total_routes.append_value(row.total_routes);
        avg_feasible.append_value(row.avg_feasible_arcs);
        total_time.append_value(row.total_travel_time);
        near_pct.append_value(row.near_optimal_pct);
        far_pct.append_value(row.far_pct);
        avg_decile.append_value(row.avg_decile);
        avg_rmin.append_option(row.avg_ratio_to_min);
        avg_rmax.append_option(row.avg_ratio_to_max);
        near_pct_dist.append_value(row.near_optimal_pct_dist);
        far_pct_dist.append_value(row.far_pct_dist);
        avg_decile_dist.append_value(row.avg_decile_dist);
        avg_rmin_dist.append_option(row.avg_ratio_to_min_dist);
        avg_rmax_dist.append_option(row.avg_ratio_to_max_dist);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summary_schema),
            vec![
                Arc::new(names.finish()),
                Arc::new(types.finish()),
                Arc::new(total_arcs.finish()),
                Arc::new(total_routes.finish()),
                Arc::new(avg_feasible.finish()),
                Arc::new(total_time.finish()),
                Arc::new(near_pct.finish()),
                Arc::new(far_pct.finish()),
                Arc::new(avg_decile.finish()),
                Arc::new(avg_rmin.finish()),
                Arc::new(avg_rmax.finish()),
                Arc::new(near_pct_dist.finish()),
                Arc::new(far_pct_dist.finish()),
                Arc::new(avg_decile_dist.finish()),
                Arc::new(avg_rmin_dist.finish()),
                Arc::new(avg_rmax_dist.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.arc_metrics.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
