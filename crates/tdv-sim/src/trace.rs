//! Replay output records.

use tdv_core::{NodeId, RouteId};

/// One replayed leg: the arc actually driven, when the vehicle left, and how
/// long the arc took under the τ model at that departure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegDeparture {
    pub from: NodeId,
    pub to: NodeId,
    pub departure_time: f64,
    pub duration: f64,
}

/// A half-open span `[start, end)` between two consecutive leg departures.
///
/// Intervals are always carried positionally (index `k` spans departures
/// `k` and `k+1`) — never as float-valued map keys, which would make
/// lookups depend on float equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

/// Non-fatal observations produced while replaying a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayWarning {
    /// The replayed elapsed time disagrees with the duration the solution
    /// document declared — the solver's travel-time model and the τ model
    /// do not line up for this route.
    DurationMismatch { simulated: f64, declared: f64 },
}

/// The full replay of one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTrace {
    /// Position of the route within its solution document.
    pub route: RouteId,
    /// One entry per arc of the path, in driving order.
    pub legs: Vec<LegDeparture>,
    /// Replayed elapsed time from `t0` to the final arrival.
    pub total_duration: f64,
    /// Set when the replay disagrees with the declared duration.
    pub warning: Option<ReplayWarning>,
}

impl RouteTrace {
    /// Spans between consecutive departures — one fewer than there are legs.
    ///
    /// The final leg has no successor departure and therefore bounds no
    /// interval; feasibility and metrics operate on these spans.
    pub fn intervals(&self) -> Vec<Interval> {
        self.legs
            .windows(2)
            .map(|w| Interval {
                start: w[0].departure_time,
                end: w[1].departure_time,
            })
            .collect()
    }
}
