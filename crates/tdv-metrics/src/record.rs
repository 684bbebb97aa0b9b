//! Per-arc metric records: how good was the chosen arc, in time and in
//! distance, against everything feasible at that moment?

use tdv_core::{NodeId, RouteId};
use tdv_feasible::FeasibleSet;
use tdv_instance::Instance;
use tdv_sim::{LegDeparture, RouteTrace};
use tdv_tau::TauCache;

use crate::sampler::{sample_arc, ArcSample, SamplerConfig};
use crate::stats::{decile_rank, proximity, ratio_to, ProximityCategory};

/// One dimension (travel time or distance) of an arc's evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMetrics {
    /// The chosen arc's value in this dimension.
    pub actual: f64,
    /// Extremes and mean of the feasible distribution; all zero when the
    /// distribution was empty.
    pub min_feasible: f64,
    pub max_feasible: f64,
    pub mean_feasible: f64,
    /// `actual / min_feasible`; `None` when the minimum is 0.
    pub ratio_to_min: Option<f64>,
    /// `actual / max_feasible`; `None` when the maximum is 0.
    pub ratio_to_max: Option<f64>,
    /// Decile (0–9) of `actual` within the feasible distribution; 5 when
    /// the distribution was empty.
    pub decile: u8,
    pub proximity: ProximityCategory,
}

/// The finished evaluation of one chosen arc at one interval.  Immutable
/// once produced; aggregation and export only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcMetricRecord {
    pub route: RouteId,
    /// Leg position within the route (equals the interval index).
    pub arc_index: usize,
    pub from: NodeId,
    pub to: NodeId,
    /// When the vehicle actually left `from`.
    pub departure_time: f64,
    pub time: DimensionMetrics,
    pub distance: DimensionMetrics,
    /// How many alternatives were feasible at this interval.
    pub feasible_count: usize,
}

impl DimensionMetrics {
    /// Score `actual` against a feasible distribution (already filtered to
    /// usable values; empty means "nothing to compare against").
    fn score(actual: f64, distribution: &[f64]) -> Self {
        let (min, max) = match distribution.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        }) {
            Some(extremes) => extremes,
            None => (0.0, 0.0),
        };
        let mean = if distribution.is_empty() {
            0.0
        } else {
            distribution.iter().sum::<f64>() / distribution.len() as f64
        };

        Self {
            actual,
            min_feasible: min,
            max_feasible: max,
            mean_feasible: mean,
            ratio_to_min: ratio_to(actual, min),
            ratio_to_max: ratio_to(actual, max),
            decile: decile_rank(actual, distribution),
            proximity: proximity(actual, min, max),
        }
    }
}

/// Evaluate the chosen leg against one interval's feasible set.
///
/// The feasible-**duration** distribution holds the per-arc mean of the τ
/// samples, one value per feasible arc, dropping non-finite means
/// (infeasible arcs) and non-positive ones.  The feasible-**distance**
/// distribution holds the raw positive arc distances; when the set is
/// non-empty but yields no positive distance, the chosen arc's own distance
/// stands in so the comparison stays meaningful.  An empty feasible set
/// scores neutral in both dimensions: deciles 5, ratios `None`.
pub fn arc_metric_record(
    instance: &Instance,
    tau: &mut TauCache<'_>,
    leg: &LegDeparture,
    set: &FeasibleSet,
    route: RouteId,
    arc_index: usize,
    config: &SamplerConfig,
) -> ArcMetricRecord {
    let samples: Vec<ArcSample> = set
        .arcs
        .iter()
        .map(|&arc| sample_arc(tau, arc, set.interval.start, config))
        .collect();

    let durations: Vec<f64> = samples
        .iter()
        .map(|s| s.mean)
        .filter(|m| m.is_finite() && *m > 0.0)
        .collect();

    let actual_distance = instance.distance(leg.from, leg.to);
    let mut distances: Vec<f64> = set
        .arcs
        .iter()
        .map(|&(p, q)| instance.distance(p, q))
        .filter(|d| *d > 0.0)
        .collect();
    if !set.arcs.is_empty() && distances.is_empty() && actual_distance > 0.0 {
        distances.push(actual_distance);
    }

    ArcMetricRecord {
        route,
        arc_index,
        from: leg.from,
        to: leg.to,
        departure_time: leg.departure_time,
        time: DimensionMetrics::score(leg.duration, &durations),
        distance: DimensionMetrics::score(actual_distance, &distances),
        feasible_count: set.arcs.len(),
    }
}

/// Evaluate every interval of a replayed route.
///
/// `sets[k]` must be the feasible set of interval `k`; the record for
/// interval `k` scores leg `k` (the final leg bounds no interval and is not
/// scored).
pub fn records_for_trace(
    instance: &Instance,
    tau: &mut TauCache<'_>,
    trace: &RouteTrace,
    sets: &[FeasibleSet],
    config: &SamplerConfig,
) -> Vec<ArcMetricRecord> {
    trace
        .legs
        .iter()
        .zip(sets)
        .enumerate()
        .map(|(k, (leg, set))| {
            arc_metric_record(instance, tau, leg, set, trace.route, k, config)
        })
        .collect()
}
