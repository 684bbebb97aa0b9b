//! Unit tests for the τ engine.

use tdv_core::SpeedZones;

fn zones(tiling: &[(f64, f64)]) -> SpeedZones {
    SpeedZones::new(tiling.to_vec(), None).unwrap()
}

#[cfg(test)]
mod forward {
    use super::*;
    use crate::pwl::forward;

    #[test]
    fn non_positive_distance_is_free() {
        let zs = zones(&[(0.0, 100.0)]);
        for x in [0.0, 37.0, 99.9] {
            assert_eq!(forward(&zs, &[1.0], 0.0, x), 0.0);
            assert_eq!(forward(&zs, &[1.0], -5.0, x), 0.0);
        }
    }

    #[test]
    fn flat_speed_is_distance_over_speed() {
        // Single zone [0,100) at speed 1: covering 100 takes exactly 100.
        let zs = zones(&[(0.0, 100.0)]);
        assert_eq!(forward(&zs, &[1.0], 100.0, 0.0), 100.0);
        assert_eq!(forward(&zs, &[2.0], 100.0, 10.0), 50.0);
    }

    #[test]
    fn covered_within_first_zone() {
        // Zone [0,50) at speed 2 absorbs the full 100 right at its boundary.
        let zs = zones(&[(0.0, 50.0), (50.0, 100.0)]);
        assert_eq!(forward(&zs, &[2.0, 1.0], 100.0, 0.0), 50.0);
    }

    #[test]
    fn crosses_zone_boundary() {
        // 50 of the 100 fit in [0,25) at speed 2 (25 time units); the
        // remaining 50 run at speed 1 (50 time units).
        let zs = zones(&[(0.0, 25.0), (25.0, 100.0)]);
        assert_eq!(forward(&zs, &[2.0, 1.0], 100.0, 0.0), 75.0);
    }

    #[test]
    fn wraps_through_the_period() {
        let zs = zones(&[(0.0, 50.0), (50.0, 100.0)]);
        // From x=90: 20 in the tail of zone 1, 50 across zone 0, the last
        // 80 at speed 2 → 10 + 50 + 40 time units.
        let tau = forward(&zs, &[1.0, 2.0], 150.0, 90.0);
        assert!((tau - 100.0).abs() < 1e-9, "got {tau}");
    }

    #[test]
    fn zero_speed_zone_is_infeasible() {
        let zs = zones(&[(0.0, 50.0), (50.0, 100.0)]);
        let tau = forward(&zs, &[1.0, 0.0], 100.0, 0.0);
        assert!(tau.is_infinite() && tau > 0.0);
    }

    #[test]
    fn iteration_bound_caps_malformed_tilings() {
        // Zones end at 100 but the horizon stretches to 1000: time beyond
        // 100 falls back to the last zone with zero usable width, so the
        // walk can never absorb the distance and must hit its bound.
        let zs = SpeedZones::new(vec![(0.0, 50.0), (50.0, 100.0)], Some((0.0, 1000.0))).unwrap();
        let tau = forward(&zs, &[1.0, 1.0], 1000.0, 60.0);
        assert!(tau.is_infinite());
    }
}

#[cfg(test)]
mod backward {
    use super::*;
    use crate::pwl::{backward, forward};

    #[test]
    fn round_trips_to_zone_starts() {
        let zs = zones(&[(0.0, 25.0), (25.0, 100.0)]);
        let speeds = [2.0, 1.0];
        let distance = 60.0;
        let p = zs.period();

        for &(start, _) in zs.zones() {
            let x = backward(&zs, &speeds, start, distance);
            assert!(!x.is_nan(), "preimage of zone start {start} undefined");
            let arrival = (x + forward(&zs, &speeds, distance, x)).rem_euclid(p);
            let target = start.rem_euclid(p);
            assert!(
                (arrival - target).abs() < 1e-6,
                "departing {x} lands at {arrival}, wanted {target}"
            );
        }
    }

    #[test]
    fn wraps_backward_through_period() {
        let zs = zones(&[(0.0, 25.0), (25.0, 100.0)]);
        // Landing at 25 with 60 to cover: 50 fit in [0,25) at speed 2, the
        // remaining 10 come from the tail of the previous period.
        let x = backward(&zs, &[2.0, 1.0], 25.0, 60.0);
        assert!((x - 90.0).abs() < 1e-9, "got {x}");
    }

    #[test]
    fn unresolvable_distance_is_nan() {
        let zs = zones(&[(0.0, 50.0), (50.0, 100.0)]);
        assert!(backward(&zs, &[0.0, 0.0], 50.0, 10.0).is_nan());
    }
}

#[cfg(test)]
mod pwl_function {
    use super::*;
    use crate::pwl::{breakpoints, forward, ArcTau};

    fn crossing_setup() -> (SpeedZones, [f64; 2], f64) {
        (zones(&[(0.0, 25.0), (25.0, 100.0)]), [2.0, 1.0], 100.0)
    }

    #[test]
    fn breakpoints_sorted_deduplicated_closed() {
        let (zs, speeds, d) = crossing_setup();
        let bps = breakpoints(&zs, &speeds, d);

        assert_eq!(bps[0], 0.0);
        assert_eq!(bps[bps.len() - 1], zs.period());
        assert!(bps.windows(2).all(|w| w[0] < w[1]), "not strictly sorted: {bps:?}");

        // Zone starts plus the preimages of zone starts under distance 100.
        for expected in [0.0, 12.5, 25.0, 50.0, 100.0] {
            assert!(
                bps.iter().any(|x| (x - expected).abs() < 1e-9),
                "missing breakpoint {expected} in {bps:?}"
            );
        }
    }

    #[test]
    fn evaluate_agrees_with_forward_at_breakpoints() {
        let (zs, speeds, d) = crossing_setup();
        let tau = ArcTau::build(&zs, &speeds, d);
        for &(x, _) in tau.points() {
            let direct = forward(&zs, &speeds, d, x);
            let interp = tau.evaluate(x);
            assert!(
                (interp - direct).abs() < 1e-6,
                "evaluate({x}) = {interp}, forward = {direct}"
            );
        }
    }

    #[test]
    fn evaluate_agrees_with_forward_between_breakpoints() {
        // τ is linear between breakpoints, so interpolation must reproduce
        // the exact walk anywhere in the period.
        let (zs, speeds, d) = crossing_setup();
        let tau = ArcTau::build(&zs, &speeds, d);
        for w in tau.points().windows(2) {
            let mid = (w[0].0 + w[1].0) / 2.0;
            let direct = forward(&zs, &speeds, d, mid);
            let interp = tau.evaluate(mid);
            assert!(
                (interp - direct).abs() < 1e-6,
                "evaluate({mid}) = {interp}, forward = {direct}"
            );
        }
    }

    #[test]
    fn evaluate_reduces_into_period() {
        let (zs, speeds, d) = crossing_setup();
        let tau = ArcTau::build(&zs, &speeds, d);
        assert!((tau.evaluate(112.5) - tau.evaluate(12.5)).abs() < 1e-9);
        assert!((tau.evaluate(-87.5) - tau.evaluate(12.5)).abs() < 1e-9);
    }

    #[test]
    fn infeasible_bracket_evaluates_to_infinity() {
        let zs = zones(&[(0.0, 50.0), (50.0, 100.0)]);
        let tau = ArcTau::build(&zs, &[1.0, 0.0], 10.0);
        assert!(tau.evaluate(45.0).is_infinite());
        assert_eq!(tau.evaluate(20.0), 10.0);
    }
}

#[cfg(test)]
mod cache {
    use tdv_core::NodeId;
    use tdv_instance::Instance;

    use super::*;
    use crate::cache::{arc_duration, TauCache};
    use crate::pwl::forward;

    fn flat_instance() -> Instance {
        Instance::new(
            vec![
                vec![0.0, 30.0, 80.0],
                vec![30.0, 0.0, 40.0],
                vec![80.0, 40.0, 0.0],
            ],
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]],
            vec![vec![1.0]],
            zones(&[(0.0, 1000.0)]),
            vec![(0.0, 1000.0), (0.0, 1000.0), (0.0, 1000.0)],
            vec![0.0, 0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn memoizes_per_arc() {
        let inst = flat_instance();
        let mut cache = TauCache::new(&inst);
        assert!(cache.is_empty());

        cache.arc(NodeId(0), NodeId(1));
        cache.arc(NodeId(0), NodeId(1));
        assert_eq!(cache.len(), 1);

        cache.arc(NodeId(1), NodeId(0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cached_tau_matches_scalar_duration() {
        let inst = flat_instance();
        let mut cache = TauCache::new(&inst);
        for t in [0.0, 123.4, 999.0] {
            let cached = cache.arc(NodeId(0), NodeId(2)).evaluate(t);
            let scalar = arc_duration(&inst, NodeId(0), NodeId(2), t);
            assert!((cached - scalar).abs() < 1e-6);
        }
    }

    #[test]
    fn scalar_duration_uses_arc_cluster() {
        let inst = flat_instance();
        let direct = forward(inst.zones(), inst.speeds(tdv_core::ClusterId(0)), 30.0, 5.0);
        assert_eq!(arc_duration(&inst, NodeId(0), NodeId(1), 5.0), direct);
    }
}
