//! Exact travel-time computation under piecewise-constant zone speeds.
//!
//! # Design
//!
//! An arc's travel duration τ(x) depends on its departure time `x`: the
//! vehicle drives at the speed of whichever zone the clock is in, and a
//! journey spanning a zone boundary changes speed mid-arc.  Within one cyclic
//! period τ is piecewise linear in `x`, and its slope can only change at a
//! **breakpoint**: a zone start, or a departure time from which the vehicle
//! reaches a zone start exactly (the preimage of a zone start under the
//! distance).
//!
//! [`forward`] computes τ(x) exactly by walking zones in time order;
//! [`backward`] inverts it (which departure lands at a given time);
//! [`ArcTau`] materializes the full PWL function over one period by
//! evaluating [`forward`] at every breakpoint.
//!
//! All walks are bounded to `4 × zone_count + 10` iterations.  Malformed zone
//! data (zero-speed cycles, tilings that never absorb the remaining
//! distance) therefore produces a sentinel — `+∞` from [`forward`], NaN from
//! [`backward`] — instead of a hang.  Callers rely on the exact caps and
//! sentinels; neither is tunable.

use tdv_core::SpeedZones;

/// Slack when comparing remaining distance against a zone's capacity.
const CAP_EPS: f64 = 1e-12;

/// Two breakpoints closer than this are considered the same point.
const BREAKPOINT_EPS: f64 = 1e-9;

/// Walk bound for [`forward`] and [`backward`].
#[inline]
fn iteration_bound(zones: &SpeedZones) -> usize {
    zones.zone_count() * 4 + 10
}

/// Exact duration to cover `distance` departing at time `x`.
///
/// Walks zones in time order: in the current zone `(a, b)` with speed `v`,
/// at most `v·(b − t)` distance fits before the boundary.  If the remainder
/// fits, the walk ends inside this zone; otherwise the whole zone is
/// consumed and the clock wraps to `b mod P`.
///
/// Returns `0.0` for any `distance ≤ 0`, and `+∞` when a zone with speed
/// ≤ 0 is reached (the arc is infeasible from that zone onward) or the walk
/// exceeds its iteration bound.
pub fn forward(zones: &SpeedZones, speeds: &[f64], distance: f64, x: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    let p = zones.period();
    let mut t = x;
    let mut rem = distance;
    let mut total = 0.0;

    for _ in 0..iteration_bound(zones) {
        let zone = zones.zone_index(t);
        let (_, b) = zones.bounds(zone);
        let v = speeds[zone.index()];

        if v <= 0.0 {
            return f64::INFINITY;
        }

        let cap = v * (b - t);
        if rem <= cap + CAP_EPS {
            return total + rem / v;
        }
        total += b - t;
        rem -= cap;
        t = b.rem_euclid(p);
    }
    f64::INFINITY
}

/// Departure time `x` such that covering `distance` from `x` lands exactly
/// at `arrival`.
///
/// Walks zones backward from `arrival`: each zone contributes up to
/// `v · span` recoverable distance, where `span` is the time available back
/// to the zone start (wrapping through the period when the walk crosses 0).
/// Returns the departure in `[0, P)`, or NaN when the distance is not
/// absorbed within the iteration bound (e.g. zero-speed zones on the way).
pub fn backward(zones: &SpeedZones, speeds: &[f64], arrival: f64, distance: f64) -> f64 {
    let p = zones.period();
    let mut t = arrival;
    let mut rem = distance;

    for _ in 0..iteration_bound(zones) {
        // Nudge below t so an arrival exactly on a zone start resolves to
        // the zone *ending* there.
        let zone = zones.zone_index(t - CAP_EPS);
        let (a, _) = zones.bounds(zone);
        let v = speeds[zone.index()];

        let span = if t >= a { t - a } else { (t + p) - a };
        let cap = v * span;
        if rem <= cap + CAP_EPS {
            return (t - rem / v).rem_euclid(p);
        }
        rem -= cap;
        t = if a > 0.0 { a } else { p };
    }
    f64::NAN
}

/// All departure times in `[0, P]` where τ's slope can change, for an arc of
/// the given distance: every zone start, every defined preimage of a zone
/// start under [`backward`], and 0 — deduplicated at 1e-9 tolerance, sorted,
/// and closed with `P` itself.
pub fn breakpoints(zones: &SpeedZones, speeds: &[f64], distance: f64) -> Vec<f64> {
    let p = zones.period();
    let mut points: Vec<f64> = Vec::with_capacity(zones.zone_count() * 2 + 2);

    for &(a, _) in zones.zones() {
        points.push(a.rem_euclid(p));
        let x = backward(zones, speeds, a, distance);
        if !x.is_nan() {
            // Mirror of a decimal round to 9 places, so preimages that
            // differ only in float noise collapse to one breakpoint.
            points.push((x * 1e9).round() / 1e9);
        }
    }
    points.push(0.0);

    points = points.into_iter().map(|x| x.rem_euclid(p)).collect();
    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup_by(|a, b| (*a - *b).abs() <= BREAKPOINT_EPS);

    if (points[points.len() - 1] - p).abs() > BREAKPOINT_EPS {
        points.push(p);
    }
    points
}

// ── ArcTau ────────────────────────────────────────────────────────────────────

/// The piecewise-linear travel-duration function of one arc over one period.
///
/// Stored as ordered `(x, τ(x))` pairs with `x` covering `[0, P]`; τ is
/// linear between consecutive points and periodic with period P.  A pure
/// function of the instance's static data, so it is safe to memoize per arc
/// (see [`TauCache`][crate::TauCache]).
#[derive(Clone, Debug, PartialEq)]
pub struct ArcTau {
    points: Vec<(f64, f64)>,
    period: f64,
}

impl ArcTau {
    /// Evaluate [`forward`] at every breakpoint of the arc.
    pub fn build(zones: &SpeedZones, speeds: &[f64], distance: f64) -> Self {
        let points = breakpoints(zones, speeds, distance)
            .into_iter()
            .map(|x| (x, forward(zones, speeds, distance, x)))
            .collect();
        Self {
            points,
            period: zones.period(),
        }
    }

    /// τ at departure time `t`, reduced into the period first (τ is
    /// periodic), then linearly interpolated between the bracketing
    /// breakpoints.
    ///
    /// A bracket with a non-finite endpoint (infeasible stretch) evaluates
    /// to `+∞` rather than interpolating into a sentinel.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = if (0.0..=self.period).contains(&t) {
            t
        } else {
            t.rem_euclid(self.period)
        };

        let last = self.points.len() - 1;
        if t <= self.points[0].0 {
            return self.points[0].1;
        }
        if t >= self.points[last].0 {
            return self.points[last].1;
        }

        // points are sorted; find the first breakpoint at or beyond t.
        let hi = self.points.partition_point(|&(x, _)| x < t);
        let (x1, y1) = self.points[hi];
        if (x1 - t).abs() <= BREAKPOINT_EPS {
            return y1;
        }
        let (x0, y0) = self.points[hi - 1];

        if !y0.is_finite() || !y1.is_finite() {
            return f64::INFINITY;
        }
        y0 + (y1 - y0) * (t - x0) / (x1 - x0)
    }

    /// The ordered `(x, τ(x))` breakpoint list.
    #[inline]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }
}
