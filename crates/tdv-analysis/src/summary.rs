//! Aggregated statistics over arc metric records.

use tdv_instance::instance_type_of;
use tdv_metrics::{ArcMetricRecord, DimensionMetrics, ProximityCategory};

/// Deciles 0–2 count as "near-optimal", 7–9 as "far".
const NEAR_OPTIMAL_MAX_DECILE: u8 = 2;
const FAR_MIN_DECILE: u8 = 7;

/// Pooled statistics for one dimension (time or distance) over a set of
/// arc records.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionSummary {
    /// Arcs whose decile is in 0–2.
    pub near_optimal_count: usize,
    pub near_optimal_pct: f64,
    /// Arcs whose decile is in 7–9.
    pub far_count: usize,
    pub far_pct: f64,
    /// Arcs classified closer to the feasible minimum.
    pub near_minimum_count: usize,
    pub avg_decile: f64,
    /// Mean over defined ratios only; `None` when no arc had one.
    pub avg_ratio_to_min: Option<f64>,
    pub avg_ratio_to_max: Option<f64>,
}

impl DimensionSummary {
    /// Summarize one dimension across `records`, selected by `dim`.
    pub fn collect<'a, I, F>(records: I, dim: F) -> Self
    where
        I: IntoIterator<Item = &'a ArcMetricRecord>,
        F: Fn(&ArcMetricRecord) -> &DimensionMetrics,
    {
        let mut total = 0usize;
        let mut near_optimal = 0usize;
        let mut far = 0usize;
        let mut near_minimum = 0usize;
        let mut decile_sum = 0u64;
        let mut min_ratios = (0.0, 0usize);
        let mut max_ratios = (0.0, 0usize);

        for d in records.into_iter().map(|r| dim(r)) {
            total += 1;
            if d.decile <= NEAR_OPTIMAL_MAX_DECILE {
                near_optimal += 1;
            }
            if d.decile >= FAR_MIN_DECILE {
                far += 1;
            }
            if d.proximity == ProximityCategory::NearMinimum {
                near_minimum += 1;
            }
            decile_sum += d.decile as u64;
            if let Some(r) = d.ratio_to_min {
                min_ratios = (min_ratios.0 + r, min_ratios.1 + 1);
            }
            if let Some(r) = d.ratio_to_max {
                max_ratios = (max_ratios.0 + r, max_ratios.1 + 1);
            }
        }

        let pct = |count: usize| {
            if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            }
        };
        let mean_of = |(sum, count): (f64, usize)| (count > 0).then(|| sum / count as f64);

        Self {
            near_optimal_count: near_optimal,
            near_optimal_pct: pct(near_optimal),
            far_count: far,
            far_pct: pct(far),
            near_minimum_count: near_minimum,
            avg_decile: if total > 0 {
                decile_sum as f64 / total as f64
            } else {
                0.0
            },
            avg_ratio_to_min: mean_of(min_ratios),
            avg_ratio_to_max: mean_of(max_ratios),
        }
    }
}

/// Roll-up of one instance's analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceSummary {
    pub name: String,
    /// Name-prefix type (`C`/`R`/`RC` in Solomon-style corpora).
    pub instance_type: String,
    pub total_arcs: usize,
    pub total_routes: usize,
    pub avg_feasible_arcs: f64,
    /// Sum of the chosen arcs' replayed durations.
    pub total_travel_time: f64,
    pub time: DimensionSummary,
    pub distance: DimensionSummary,
}

impl InstanceSummary {
    pub fn from_records(name: &str, records: &[ArcMetricRecord], total_routes: usize) -> Self {
        let total_arcs = records.len();
        let avg_feasible_arcs = if total_arcs > 0 {
            records.iter().map(|r| r.feasible_count as f64).sum::<f64>() / total_arcs as f64
        } else {
            0.0
        };

        Self {
            name: name.to_string(),
            instance_type: instance_type_of(name),
            total_arcs,
            total_routes,
            avg_feasible_arcs,
            total_travel_time: records.iter().map(|r| r.time.actual).sum(),
            time: DimensionSummary::collect(records, |r| &r.time),
            distance: DimensionSummary::collect(records, |r| &r.distance),
        }
    }
}
