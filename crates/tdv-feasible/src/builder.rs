//! Enumeration of the arcs a route *could* have used at each interval.

use tdv_core::NodeId;
use tdv_instance::Instance;
use tdv_sim::{Interval, RouteTrace};
use tdv_tau::TauCache;

/// Which arcs count as usable alternatives at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeasibilityPolicy {
    /// All ordered pairs `(p, q)`, `p ≠ q`, where both endpoints' time
    /// windows contain the interval start and departing `p` at its earliest
    /// service completion reaches `q` within `q`'s due time.
    #[default]
    SymmetricPairs,

    /// `p` is pinned to the predecessor the route actually used; only the
    /// destination varies.  Checks only the due-time arrival condition —
    /// deliberately looser than [`SymmetricPairs`], which also requires
    /// both windows to contain the interval start.
    FixedOrigin,
}

/// The feasible alternatives for one interval of a replayed route.
#[derive(Debug, Clone, PartialEq)]
pub struct FeasibleSet {
    pub interval: Interval,
    /// Ordered `(p, q)` arcs usable at `interval.start`.
    pub arcs: Vec<(NodeId, NodeId)>,
}

/// Enumerate feasible arcs for every interval of `trace` under `policy`.
///
/// Output is positional: entry `k` belongs to interval `k` of the trace.
/// The departure used for the due-time check is `ready[p] + service[p]` —
/// the earliest a vehicle could leave `p` — evaluated through the memoized
/// τ of the arc, so the quadratic scan costs one PWL interpolation per pair
/// rather than a zone walk.
pub fn feasible_arcs_for_trace(
    instance: &Instance,
    tau: &mut TauCache<'_>,
    trace: &RouteTrace,
    policy: FeasibilityPolicy,
) -> Vec<FeasibleSet> {
    trace
        .intervals()
        .into_iter()
        .enumerate()
        .map(|(k, interval)| {
            let arcs = match policy {
                FeasibilityPolicy::SymmetricPairs => {
                    symmetric_pairs(instance, tau, interval.start)
                }
                FeasibilityPolicy::FixedOrigin => {
                    fixed_origin(instance, tau, trace.legs[k].from)
                }
            };
            FeasibleSet { interval, arcs }
        })
        .collect()
}

fn symmetric_pairs(
    instance: &Instance,
    tau: &mut TauCache<'_>,
    at: f64,
) -> Vec<(NodeId, NodeId)> {
    let n = instance.vertex_count();
    let mut arcs = Vec::new();

    for p in (0..n).map(|i| NodeId(i as u32)) {
        let (ready_p, due_p) = instance.time_window(p);
        if !(ready_p <= at && due_p > at) {
            continue;
        }
        let departure = ready_p + instance.service_time(p);

        for q in (0..n).map(|j| NodeId(j as u32)) {
            if q == p {
                continue;
            }
            let (ready_q, due_q) = instance.time_window(q);
            if !(ready_q <= at && due_q > at) {
                continue;
            }
            if departure + tau.arc(p, q).evaluate(departure) <= due_q {
                arcs.push((p, q));
            }
        }
    }
    arcs
}

fn fixed_origin(
    instance: &Instance,
    tau: &mut TauCache<'_>,
    p: NodeId,
) -> Vec<(NodeId, NodeId)> {
    let n = instance.vertex_count();
    let departure = instance.ready(p) + instance.service_time(p);

    (0..n)
        .map(|j| NodeId(j as u32))
        .filter(|&q| q != p)
        .filter(|&q| departure + tau.arc(p, q).evaluate(departure) <= instance.due(q))
        .map(|q| (p, q))
        .collect()
}
