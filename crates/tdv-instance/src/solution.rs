//! Solution documents: the routes whose arc choices are being evaluated.

use serde::Deserialize;

use tdv_core::NodeId;

/// One route of a solution: a node path with a declared start time and total
/// duration.
///
/// The declared `duration` is *not* trusted — the simulator replays the path
/// through the τ model and reports a warning when the two disagree.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Route {
    /// Departure time from the first node of `path`.
    pub t0: f64,
    /// Ordered node path, depot to depot.
    pub path: Vec<NodeId>,
    /// Total route duration as declared by the solver that produced it.
    pub duration: f64,
}

/// One solution document: all routes driven on a named instance, plus solver
/// metadata that is carried through untouched.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Solution {
    /// Exact-match key pairing this solution with its instance.
    pub instance_name: String,
    pub routes: Vec<Route>,
    /// Objective value reported by the solver (metadata only).
    #[serde(default)]
    pub value: f64,
    /// Free-form solver tags (metadata only).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Route {
    /// Arcs actually driven, in path order.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of legs (arcs) in the route.
    #[inline]
    pub fn leg_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
