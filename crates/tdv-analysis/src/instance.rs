//! Full analysis of one instance/solution pair.

use tdv_core::RouteId;
use tdv_feasible::{feasible_arcs_for_trace, FeasibilityPolicy};
use tdv_instance::PairedCase;
use tdv_metrics::{records_for_trace, ArcMetricRecord, SamplerConfig};
use tdv_sim::{replay_route, ReplayWarning};
use tdv_tau::TauCache;

use crate::summary::InstanceSummary;
use crate::{AnalysisError, AnalysisResult};

/// Knobs for one analysis run, applied uniformly to every instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisConfig {
    pub sampler: SamplerConfig,
    pub policy: FeasibilityPolicy,
}

/// Non-fatal observations collected while analyzing an instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisWarning {
    /// The replayed route duration disagrees with the declared one.
    DurationMismatch {
        route: RouteId,
        simulated: f64,
        declared: f64,
    },
}

/// Everything produced for one instance: the flat per-arc records, their
/// roll-up, and any warnings picked up along the way.
#[derive(Debug, Clone)]
pub struct InstanceAnalysis {
    pub name: String,
    pub records: Vec<ArcMetricRecord>,
    pub summary: InstanceSummary,
    pub warnings: Vec<AnalysisWarning>,
}

/// Replay, enumerate, sample, and score every route of one paired case.
///
/// The τ memo cache lives for exactly this call: arcs repeat heavily across
/// a route's intervals (and across routes), so the per-instance cache is
/// where the PWL construction cost is actually amortized.
pub fn analyze_case(case: &PairedCase, config: &AnalysisConfig) -> AnalysisResult<InstanceAnalysis> {
    if case.solution.routes.is_empty() {
        return Err(AnalysisError::EmptySolution(case.name.clone()));
    }

    let mut tau = TauCache::new(&case.instance);
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (idx, route) in case.solution.routes.iter().enumerate() {
        let trace = replay_route(&case.instance, route, RouteId(idx as u32))?;
        if let Some(ReplayWarning::DurationMismatch {
            simulated,
            declared,
        }) = trace.warning
        {
            warnings.push(AnalysisWarning::DurationMismatch {
                route: trace.route,
                simulated,
                declared,
            });
        }

        let sets = feasible_arcs_for_trace(&case.instance, &mut tau, &trace, config.policy);
        records.extend(records_for_trace(
            &case.instance,
            &mut tau,
            &trace,
            &sets,
            &config.sampler,
        ));
    }

    let summary = InstanceSummary::from_records(&case.name, &records, case.solution.routes.len());
    Ok(InstanceAnalysis {
        name: case.name.clone(),
        records,
        summary,
        warnings,
    })
}
