//! Plain data row types written by output backends.

use tdv_analysis::InstanceSummary;
use tdv_metrics::ArcMetricRecord;

/// One chosen arc's evaluation, flattened for tabular export.
///
/// `None` ratios mean "undefined" (the relevant feasible extreme was 0) and
/// surface as NULL/empty depending on the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcMetricRow {
    pub instance_name: String,
    pub instance_type: String,
    pub route_idx: u32,
    pub arc_idx: u32,
    pub node_from: u32,
    pub node_to: u32,
    pub departure_time: f64,
    pub actual_travel_time: f64,
    pub fastest_feasible_time: f64,
    pub slowest_feasible_time: f64,
    pub actual_distance: f64,
    pub shortest_feasible_distance: f64,
    pub longest_feasible_distance: f64,
    pub ratio_to_min: Option<f64>,
    pub ratio_to_max: Option<f64>,
    pub ratio_to_min_dist: Option<f64>,
    pub ratio_to_max_dist: Option<f64>,
    pub decile_rank: u8,
    pub decile_rank_distance: u8,
    pub proximity_category: String,
    pub proximity_category_distance: String,
    pub num_feasible_arcs: u64,
}

impl ArcMetricRow {
    /// Flatten one record, tagging it with its instance's name and type.
    pub fn from_record(summary: &InstanceSummary, record: &ArcMetricRecord) -> Self {
        Self {
            instance_name: summary.name.clone(),
            instance_type: summary.instance_type.clone(),
            route_idx: record.route.0,
            arc_idx: record.arc_index as u32,
            node_from: record.from.0,
            node_to: record.to.0,
            departure_time: record.departure_time,
            actual_travel_time: record.time.actual,
            fastest_feasible_time: record.time.min_feasible,
            slowest_feasible_time: record.time.max_feasible,
            actual_distance: record.distance.actual,
            shortest_feasible_distance: record.distance.min_feasible,
            longest_feasible_distance: record.distance.max_feasible,
            ratio_to_min: record.time.ratio_to_min,
            ratio_to_max: record.time.ratio_to_max,
            ratio_to_min_dist: record.distance.ratio_to_min,
            ratio_to_max_dist: record.distance.ratio_to_max,
            decile_rank: record.time.decile,
            decile_rank_distance: record.distance.decile,
            proximity_category: record.time.proximity.to_string(),
            proximity_category_distance: record.distance.proximity.to_string(),
            num_feasible_arcs: record.feasible_count as u64,
        }
    }
}

/// Roll-up row for one analyzed instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceSummaryRow {
    pub instance_name: String,
    pub instance_type: String,
    pub total_arcs: u64,
    pub total_routes: u64,
    pub avg_feasible_arcs: f64,
    pub total_travel_time: f64,
    pub near_optimal_pct: f64,
    pub far_pct: f64,
    pub avg_decile: f64,
    pub avg_ratio_to_min: Option<f64>,
    pub avg_ratio_to_max: Option<f64>,
    pub near_optimal_pct_dist: f64,
    pub far_pct_dist: f64,
    pub avg_decile_dist: f64,
    pub avg_ratio_to_min_dist: Option<f64>,
    pub avg_ratio_to_max_dist: Option<f64>,
}

impl InstanceSummaryRow {
    pub fn from_summary(summary: &InstanceSummary) -> Self {
        Self {
            instance_name: summary.name.clone(),
            instance_type: summary.instance_type.clone(),
            total_arcs: summary.total_arcs as u64,
            total_routes: summary.total_routes as u64,
            avg_feasible_arcs: summary.avg_feasible_arcs,
            total_travel_time: summary.total_travel_time,
            near_optimal_pct: summary.time.near_optimal_pct,
            far_pct: summary.time.far_pct,
            avg_decile: summary.time.avg_decile,
            avg_ratio_to_min: summary.time.avg_ratio_to_min,
            avg_ratio_to_max: summary.time.avg_ratio_to_max,
            near_optimal_pct_dist: summary.distance.near_optimal_pct,
            far_pct_dist: summary.distance.far_pct,
            avg_decile_dist: summary.distance.avg_decile,
            avg_ratio_to_min_dist: summary.distance.avg_ratio_to_min,
            avg_ratio_to_max_dist: summary.distance.avg_ratio_to_max,
        }
    }
}
