//! τ sampling across a small window around an interval start.
//!
//! A feasible arc's duration is not one number — it depends on the exact
//! departure within the interval.  The sampler probes τ at evenly spaced
//! departures across `[center − ε, center + ε]` and keeps five summary
//! values per arc; the per-arc **mean** is what enters the feasible-duration
//! distribution downstream.

use tdv_core::NodeId;
use tdv_tau::TauCache;

/// Sampling window configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Half-width of the sampling window around the interval start.
    pub epsilon: f64,
    /// Number of evenly spaced sample departures (minimum 2, so the window
    /// edges are always probed).
    pub samples: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            samples: 10,
        }
    }
}

/// Summary of τ over the sampling window for one feasible arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    pub arc: (NodeId, NodeId),
    /// τ at the window start (`center − ε`).
    pub start: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// τ at the window end (`center + ε`).
    pub end: f64,
}

/// Probe τ of `arc` at `config.samples` evenly spaced departures centered
/// on `center`.
///
/// Sample `m` departs at `center − ε + m · 2ε/(N−1)`.  Departures before
/// time 0 or beyond the period are fine — τ is periodic and the memoized
/// PWL function reduces them.  An infeasible stretch (τ = +∞) propagates
/// into `mean`/`max` as +∞; the distribution builder filters those out.
pub fn sample_arc(
    tau: &mut TauCache<'_>,
    arc: (NodeId, NodeId),
    center: f64,
    config: &SamplerConfig,
) -> ArcSample {
    let n = config.samples.max(2);
    let lo = center - config.epsilon;
    let hi = center + config.epsilon;
    let step = (hi - lo) / (n - 1) as f64;

    let pwl = tau.arc(arc.0, arc.1);
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut first = 0.0;
    let mut last = 0.0;

    for m in 0..n {
        let value = pwl.evaluate(lo + m as f64 * step);
        if m == 0 {
            first = value;
        }
        last = value;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }

    ArcSample {
        arc,
        start: first,
        mean: sum / n as f64,
        min,
        max,
        end: last,
    }
}
