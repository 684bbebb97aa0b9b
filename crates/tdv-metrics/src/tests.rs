//! Unit tests for sampling and metric assembly.

use tdv_core::{NodeId, SpeedZones};
use tdv_instance::Instance;

fn node(n: u32) -> NodeId {
    NodeId(n)
}

/// Flat speed 1 everywhere → τ equals distance at any departure.
fn flat_instance() -> Instance {
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

#[cfg(test)]
mod stats {
    use crate::stats::{decile_rank, percentile, proximity, ratio_to, ProximityCategory};

    #[test]
    fn percentile_interpolates_linearly() {
        let sorted: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(percentile(&sorted, 100.0), 10.0);
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert!((percentile(&sorted, 50.0) - 5.5).abs() < 1e-12);
        assert!((percentile(&sorted, 10.0) - 1.9).abs() < 1e-12);
    }

    #[test]
    fn decile_of_extremes() {
        let dist: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(decile_rank(0.5, &dist), 0);
        assert_eq!(decile_rank(1.0, &dist), 0);
        assert_eq!(decile_rank(10.0, &dist), 9);
        assert_eq!(decile_rank(11.0, &dist), 9);
    }

    #[test]
    fn decile_of_median() {
        let dist: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(decile_rank(5.5, &dist), 4);
    }

    #[test]
    fn decile_is_always_in_range() {
        let dist = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        for v in [-10.0, 0.0, 1.0, 3.5, 9.0, 100.0] {
            assert!(decile_rank(v, &dist) <= 9);
        }
    }

    #[test]
    fn empty_distribution_is_neutral() {
        assert_eq!(decile_rank(42.0, &[]), 5);
    }

    #[test]
    fn ratio_is_none_iff_denominator_zero() {
        assert_eq!(ratio_to(5.0, 0.0), None);
        assert_eq!(ratio_to(5.0, 2.0), Some(2.5));
        assert_eq!(ratio_to(0.0, 2.0), Some(0.0));
    }

    #[test]
    fn proximity_classification() {
        assert_eq!(proximity(3.0, 0.0, 10.0), ProximityCategory::NearMinimum);
        assert_eq!(proximity(7.0, 0.0, 10.0), ProximityCategory::NearMaximum);
        assert_eq!(proximity(5.0, 0.0, 10.0), ProximityCategory::NearMaximum);
        assert_eq!(proximity(4.0, 4.0, 4.0), ProximityCategory::Degenerate);
        // Out-of-range values clamp instead of escaping [0, 1].
        assert_eq!(proximity(-3.0, 0.0, 10.0), ProximityCategory::NearMinimum);
        assert_eq!(proximity(99.0, 0.0, 10.0), ProximityCategory::NearMaximum);
    }

    #[test]
    fn category_labels() {
        assert_eq!(ProximityCategory::NearMinimum.to_string(), "near minimum");
        assert_eq!(ProximityCategory::Degenerate.to_string(), "degenerate");
    }
}

#[cfg(test)]
mod sampler {
    use tdv_tau::TauCache;

    use super::*;
    use crate::sampler::{sample_arc, SamplerConfig};

    /// Two zones, fast then slow, so τ varies across the sampling window.
    fn two_speed_instance() -> Instance {
        Instance::new(
            vec![vec![0.0, 60.0], vec![60.0, 0.0]],
            vec![vec![0, 0], vec![0, 0]],
            vec![vec![2.0, 1.0]],
            SpeedZones::new(vec![(0.0, 50.0), (50.0, 100.0)], None).unwrap(),
            vec![(0.0, 100.0), (0.0, 100.0)],
            vec![0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn flat_tau_gives_constant_samples() {
        let inst = flat_instance();
        let mut tau = TauCache::new(&inst);
        let s = sample_arc(
            &mut tau,
            (node(0), node(1)),
            30.0,
            &SamplerConfig::default(),
        );
        assert_eq!((s.start, s.mean, s.min, s.max, s.end), (50.0, 50.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn window_spans_center_plus_minus_epsilon() {
        // ε=10, N=5 around center 50 probes τ at 40, 45, 50, 55, 60.
        // Hand-walked: τ = 50, 55, 55, 52.5, 50.
        let inst = two_speed_instance();
        let mut tau = TauCache::new(&inst);
        let cfg = SamplerConfig {
            epsilon: 10.0,
            samples: 5,
        };
        let s = sample_arc(&mut tau, (node(0), node(1)), 50.0, &cfg);
        assert_eq!(s.start, 50.0);
        assert_eq!(s.end, 50.0);
        assert_eq!(s.min, 50.0);
        assert_eq!(s.max, 55.0);
        assert_eq!(s.mean, 52.5);
    }

    #[test]
    fn negative_departures_wrap_through_the_period() {
        // Center 0 with ε=0.1 probes τ slightly before time 0; periodicity
        // makes that the tail of the previous day, not an error.
        let inst = flat_instance();
        let mut tau = TauCache::new(&inst);
        let s = sample_arc(
            &mut tau,
            (node(1), node(2)),
            0.0,
            &SamplerConfig::default(),
        );
        assert_eq!(s.mean, 30.0);
    }

    #[test]
    fn degenerate_sample_count_still_probes_edges() {
        let inst = flat_instance();
        let mut tau = TauCache::new(&inst);
        let cfg = SamplerConfig {
            epsilon: 1.0,
            samples: 1,
        };
        let s = sample_arc(&mut tau, (node(0), node(2)), 10.0, &cfg);
        assert_eq!(s.start, 80.0);
        assert_eq!(s.end, 80.0);
    }
}

#[cfg(test)]
mod records {
    use tdv_core::RouteId;
    use tdv_feasible::{feasible_arcs_for_trace, FeasibilityPolicy, FeasibleSet};
    use tdv_instance::Route;
    use tdv_sim::{replay_route, Interval, LegDeparture};
    use tdv_tau::TauCache;

    use super::*;
    use crate::record::{arc_metric_record, records_for_trace};
    use crate::sampler::SamplerConfig;
    use crate::stats::ProximityCategory;

    #[test]
    fn scores_chosen_arc_against_feasible_distribution() {
        let inst = flat_instance();
        let route = Route {
            t0: 0.0,
            path: vec![node(0), node(1), node(2), node(0)],
            duration: 180.0,
        };
        let trace = replay_route(&inst, &route, RouteId(0)).unwrap();
        let mut tau = TauCache::new(&inst);
        let sets =
            feasible_arcs_for_trace(&inst, &mut tau, &trace, FeasibilityPolicy::SymmetricPairs);
        let records =
            records_for_trace(&inst, &mut tau, &trace, &sets, &SamplerConfig::default());

        // Three legs but only two intervals → two records.
        assert_eq!(records.len(), 2);

        // Interval 0: feasible arcs (0,2),(1,0),(1,2),(2,0),(2,1) with flat
        // τ = distance → duration distribution [80,50,30,80,30].
        let r = &records[0];
        assert_eq!((r.from, r.to), (node(0), node(1)));
        assert_eq!(r.feasible_count, 5);
        assert_eq!(r.time.actual, 50.0);
        assert_eq!(r.time.min_feasible, 30.0);
        assert_eq!(r.time.max_feasible, 80.0);
        assert_eq!(r.time.mean_feasible, 54.0);
        assert_eq!(r.time.ratio_to_min, Some(50.0 / 30.0));
        assert_eq!(r.time.ratio_to_max, Some(50.0 / 80.0));
        assert_eq!(r.time.decile, 4);
        assert_eq!(r.time.proximity, ProximityCategory::NearMinimum);

        // Distances coincide with durations under flat speed 1.
        assert_eq!(r.distance.actual, 50.0);
        assert_eq!(r.distance.decile, 4);
        assert_eq!(r.distance.min_feasible, 30.0);
        assert_eq!(r.distance.max_feasible, 80.0);
    }

    #[test]
    fn empty_feasible_set_scores_neutral() {
        let inst = flat_instance();
        let leg = LegDeparture {
            from: node(0),
            to: node(1),
            departure_time: 0.0,
            duration: 50.0,
        };
        let set = FeasibleSet {
            interval: Interval {
                start: 0.0,
                end: 60.0,
            },
            arcs: vec![],
        };
        let mut tau = TauCache::new(&inst);
        let r = arc_metric_record(
            &inst,
            &mut tau,
            &leg,
            &set,
            RouteId(0),
            0,
            &SamplerConfig::default(),
        );

        assert_eq!(r.feasible_count, 0);
        for dim in [&r.time, &r.distance] {
            assert_eq!(dim.decile, 5);
            assert_eq!(dim.ratio_to_min, None);
            assert_eq!(dim.ratio_to_max, None);
            assert_eq!((dim.min_feasible, dim.max_feasible), (0.0, 0.0));
            assert_eq!(dim.proximity, ProximityCategory::Degenerate);
        }
    }

    /// Arc (1,2) uses a zero-speed cluster: τ = +∞ at every departure.
    fn half_infeasible_instance() -> Instance {
        Instance::new(
            vec![
                vec![0.0, 50.0, 80.0],
                vec![50.0, 0.0, 30.0],
                vec![80.0, 30.0, 0.0],
            ],
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 0, 0]],
            vec![vec![1.0], vec![0.0]],
            SpeedZones::new(vec![(0.0, 1000.0)], None).unwrap(),
            vec![(0.0, 1000.0), (0.0, 1000.0), (0.0, 1000.0)],
            vec![0.0, 10.0, 10.0],
        )
        .unwrap()
    }

    #[test]
    fn infeasible_arcs_drop_out_of_duration_distribution() {
        let inst = half_infeasible_instance();
        let leg = LegDeparture {
            from: node(0),
            to: node(1),
            departure_time: 0.0,
            duration: 50.0,
        };
        let set = FeasibleSet {
            interval: Interval {
                start: 10.0,
                end: 60.0,
            },
            arcs: vec![(node(0), node(2)), (node(1), node(2))],
        };
        let mut tau = TauCache::new(&inst);
        let r = arc_metric_record(
            &inst,
            &mut tau,
            &leg,
            &set,
            RouteId(0),
            0,
            &SamplerConfig::default(),
        );

        // Duration distribution keeps only the finite arc (0,2): τ = 80.
        assert_eq!((r.time.min_feasible, r.time.max_feasible), (80.0, 80.0));
        assert_eq!(r.time.decile, 0);
        assert_eq!(r.time.proximity, ProximityCategory::Degenerate);
        // Distances are raw data, so the infeasible arc still contributes.
        assert_eq!((r.distance.min_feasible, r.distance.max_feasible), (30.0, 80.0));
        assert_eq!(r.distance.proximity, ProximityCategory::NearMinimum);
    }

    #[test]
    fn all_infeasible_set_zeroes_duration_extremes() {
        let inst = half_infeasible_instance();
        let leg = LegDeparture {
            from: node(0),
            to: node(1),
            departure_time: 0.0,
            duration: 50.0,
        };
        let set = FeasibleSet {
            interval: Interval {
                start: 10.0,
                end: 60.0,
            },
            arcs: vec![(node(1), node(2))],
        };
        let mut tau = TauCache::new(&inst);
        let r = arc_metric_record(
            &inst,
            &mut tau,
            &leg,
            &set,
            RouteId(0),
            0,
            &SamplerConfig::default(),
        );

        assert_eq!((r.time.min_feasible, r.time.max_feasible), (0.0, 0.0));
        assert_eq!(r.time.ratio_to_min, None);
        assert_eq!(r.time.ratio_to_max, None);
        assert_eq!(r.time.decile, 5);
        // The distance dimension still sees the arc's raw 30.
        assert_eq!((r.distance.min_feasible, r.distance.max_feasible), (30.0, 30.0));
        assert_eq!(r.distance.decile, 9);
    }

    #[test]
    fn non_empty_set_has_a_defined_ratio_unless_all_zero() {
        let inst = flat_instance();
        let route = Route {
            t0: 0.0,
            path: vec![node(0), node(1), node(2), node(0)],
            duration: 180.0,
        };
        let trace = replay_route(&inst, &route, RouteId(0)).unwrap();
        let mut tau = TauCache::new(&inst);
        let sets =
            feasible_arcs_for_trace(&inst, &mut tau, &trace, FeasibilityPolicy::SymmetricPairs);
        let records =
            records_for_trace(&inst, &mut tau, &trace, &sets, &SamplerConfig::default());

        for r in &records {
            assert!(r.time.decile <= 9 && r.distance.decile <= 9);
            if r.feasible_count > 0 {
                assert!(
                    r.time.ratio_to_min.is_some() || r.time.ratio_to_max.is_some(),
                    "non-empty feasible set left both time ratios undefined"
                );
            }
        }
    }
}
