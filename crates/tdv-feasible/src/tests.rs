//! Unit tests for feasibility enumeration.

use tdv_core::{NodeId, RouteId, SpeedZones};
use tdv_instance::{Instance, Route};
use tdv_sim::replay_route;
use tdv_tau::TauCache;

use crate::builder::{feasible_arcs_for_trace, FeasibilityPolicy};

/// Flat speed 1 → τ equals distance.  Node 1's tight due time (45) makes
/// arc (0,1) infeasible: leaving node 0 at its earliest (t=0) arrives at 50.
fn open_instance() -> Instance {
    Instance::new(
        vec![
            vec![0.0, 50.0, 80.0],
            vec![50.0, 0.0, 30.0],
            vec![80.0, 30.0, 0.0],
        ],
        vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
        vec![vec![1.0]],
        SpeedZones::new(vec![(0.0, 1000.0)], None).unwrap(),
        vec![(0.0, 1000.0), (0.0, 45.0), (0.0, 900.0)],
        vec![0.0, 10.0, 10.0],
    )
    .unwrap()
}

/// Windows that are all still closed at t=0 except the depot's.
fn gated_instance() -> Instance {
    Instance::new(
        vec![
            vec![0.0, 50.0, 80.0],
            vec![50.0, 0.0, 30.0],
            vec![80.0, 30.0, 0.0],
        ],
        vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
        vec![vec![1.0]],
        SpeedZones::new(vec![(0.0, 1000.0)], None).unwrap(),
        vec![(0.0, 1000.0), (100.0, 500.0), (400.0, 900.0)],
        vec![0.0, 10.0, 10.0],
    )
    .unwrap()
}

fn arcs(pairs: &[(u32, u32)]) -> Vec<(NodeId, NodeId)> {
    pairs.iter().map(|&(p, q)| (NodeId(p), NodeId(q))).collect()
}

#[cfg(test)]
mod symmetric_pairs {
    use super::*;

    #[test]
    fn respects_windows_and_due_times() {
        let inst = open_instance();
        let route = Route {
            t0: 0.0,
            path: vec![NodeId(0), NodeId(1), NodeId(2), NodeId(0)],
            duration: 180.0,
        };
        let trace = replay_route(&inst, &route, RouteId(0)).unwrap();
        let mut tau = TauCache::new(&inst);
        let sets =
            feasible_arcs_for_trace(&inst, &mut tau, &trace, FeasibilityPolicy::SymmetricPairs);

        assert_eq!(sets.len(), 2);

        // Interval 0 starts at t=0: every window is open, but (0,1) cannot
        // arrive before node 1's due time of 45.
        assert_eq!(sets[0].interval.start, 0.0);
        assert_eq!(
            sets[0].arcs,
            arcs(&[(0, 2), (1, 0), (1, 2), (2, 0), (2, 1)])
        );

        // Interval 1 starts at t=60: node 1's window has closed, leaving
        // only pairs over {0, 2}.
        assert_eq!(sets[1].interval.start, 60.0);
        assert_eq!(sets[1].arcs, arcs(&[(0, 2), (2, 0)]));
    }

    #[test]
    fn closed_windows_empty_the_set() {
        // At t=0 only the depot's window is open, so no ordered pair has
        // both endpoints available — the set is empty, not an error.
        let inst = gated_instance();
        let route = Route {
            t0: 0.0,
            path: vec![NodeId(0), NodeId(1), NodeId(2)],
            duration: 140.0,
        };
        let trace = replay_route(&inst, &route, RouteId(0)).unwrap();
        let mut tau = TauCache::new(&inst);
        let sets =
            feasible_arcs_for_trace(&inst, &mut tau, &trace, FeasibilityPolicy::SymmetricPairs);

        assert_eq!(sets.len(), 1);
        assert!(sets[0].arcs.is_empty());
    }
}

#[cfg(test)]
mod fixed_origin {
    use super::*;

    #[test]
    fn varies_destination_only() {
        let inst = open_instance();
        let route = Route {
            t0: 0.0,
            path: vec![NodeId(0), NodeId(1), NodeId(2), NodeId(0)],
            duration: 180.0,
        };
        let trace = replay_route(&inst, &route, RouteId(0)).unwrap();
        let mut tau = TauCache::new(&inst);
        let sets =
            feasible_arcs_for_trace(&inst, &mut tau, &trace, FeasibilityPolicy::FixedOrigin);

        // Interval 0: origin pinned to node 0; (0,1) misses the due time.
        assert_eq!(sets[0].arcs, arcs(&[(0, 2)]));
        // Interval 1: origin pinned to node 1; window containment is not
        // checked under this policy, so both destinations qualify.
        assert_eq!(sets[1].arcs, arcs(&[(1, 0), (1, 2)]));
    }

    #[test]
    fn default_policy_is_symmetric() {
        assert_eq!(
            FeasibilityPolicy::default(),
            FeasibilityPolicy::SymmetricPairs
        );
    }
}
