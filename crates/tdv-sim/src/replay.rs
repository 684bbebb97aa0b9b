//! The route replay walk.

use tdv_core::RouteId;
use tdv_instance::{Instance, Route, Solution};
use tdv_tau::arc_duration;

use crate::trace::{LegDeparture, ReplayWarning, RouteTrace};
use crate::{SimError, SimResult};

/// Allowed disagreement between replayed and declared route duration before
/// a [`ReplayWarning::DurationMismatch`] is attached.
pub const DURATION_TOLERANCE: f64 = 0.1;

/// Replay one route through the instance's time windows and service times.
///
/// The walk over consecutive nodes `(u, v)`:
///
/// ```text
/// departure(u) = max(current, ready[u]) + service[u]
/// duration     = τ(u→v) at departure(u)
/// current      = departure(u) + duration
/// ```
///
/// Waiting for a window to open is free; the due-time upper bound is *not*
/// enforced — a late arrival is a property of the solution being analyzed,
/// not a replay failure.  An infeasible arc (τ = +∞) poisons the remaining
/// departures the same way it would in reality; the declared-duration check
/// then reports the disagreement.
///
/// Fails only on structural problems: a path with fewer than two nodes, or
/// a node outside the instance.
pub fn replay_route(instance: &Instance, route: &Route, id: RouteId) -> SimResult<RouteTrace> {
    if route.path.len() < 2 {
        return Err(SimError::EmptyRoute(id));
    }
    if let Some(&node) = route.path.iter().find(|n| !instance.contains(**n)) {
        return Err(SimError::NodeOutOfRange { route: id, node });
    }

    let mut legs = Vec::with_capacity(route.leg_count());
    let mut current = route.t0;

    for (u, v) in route.arcs() {
        let departure = current.max(instance.ready(u)) + instance.service_time(u);
        let duration = arc_duration(instance, u, v, departure);
        legs.push(LegDeparture {
            from: u,
            to: v,
            departure_time: departure,
            duration,
        });
        current = departure + duration;
    }

    let total_duration = current - route.t0;
    let deviation = (total_duration - route.duration).abs();
    let warning = if deviation < DURATION_TOLERANCE {
        None
    } else {
        Some(ReplayWarning::DurationMismatch {
            simulated: total_duration,
            declared: route.duration,
        })
    };

    Ok(RouteTrace {
        route: id,
        legs,
        total_duration,
        warning,
    })
}

/// Replay every route of a solution, in document order.
pub fn replay_solution(instance: &Instance, solution: &Solution) -> SimResult<Vec<RouteTrace>> {
    solution
        .routes
        .iter()
        .enumerate()
        .map(|(idx, route)| replay_route(instance, route, RouteId(idx as u32)))
        .collect()
}
