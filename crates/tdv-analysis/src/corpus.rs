//! Corpus-wide runs: every paired instance, independently, with pooled
//! statistics and the hypothesis verdict.

use std::collections::BTreeMap;

use tdv_instance::PairedCase;
use tdv_metrics::ArcMetricRecord;

use crate::instance::{analyze_case, AnalysisConfig, InstanceAnalysis};
use crate::summary::DimensionSummary;

/// Outcome of the "solutions pick near-optimal arcs" hypothesis for one
/// dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HypothesisVerdict {
    /// More than 60 % of arcs fall in deciles 0–2.
    Validated,
    /// Between 40 % and 60 %.
    Partial,
    /// Under 40 %.
    NotValidated,
}

impl HypothesisVerdict {
    /// Classify a pooled near-optimal percentage.
    pub fn from_near_optimal_pct(pct: f64) -> Self {
        if pct > 60.0 {
            HypothesisVerdict::Validated
        } else if pct >= 40.0 {
            HypothesisVerdict::Partial
        } else {
            HypothesisVerdict::NotValidated
        }
    }
}

/// Pooled statistics for one instance type (name prefix).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeBreakdown {
    pub instance_type: String,
    pub instance_count: usize,
    pub total_arcs: usize,
    pub time: DimensionSummary,
    pub distance: DimensionSummary,
}

/// Corpus-level roll-up across all analyzed instances.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSummary {
    pub total_instances: usize,
    pub total_routes: usize,
    pub total_arcs: usize,
    pub avg_feasible_arcs: f64,
    pub time: DimensionSummary,
    pub distance: DimensionSummary,
    /// One entry per instance type, in lexicographic order.
    pub by_type: Vec<TypeBreakdown>,
    /// Verdicts are evaluated independently per dimension.
    pub time_verdict: HypothesisVerdict,
    pub distance_verdict: HypothesisVerdict,
}

impl CorpusSummary {
    pub fn build(analyses: &[InstanceAnalysis]) -> Self {
        let pooled: Vec<&ArcMetricRecord> = analyses.iter().flat_map(|a| &a.records).collect();

        let time = DimensionSummary::collect(pooled.iter().copied(), |r| &r.time);
        let distance = DimensionSummary::collect(pooled.iter().copied(), |r| &r.distance);
        let time_verdict = HypothesisVerdict::from_near_optimal_pct(time.near_optimal_pct);
        let distance_verdict = HypothesisVerdict::from_near_optimal_pct(distance.near_optimal_pct);

        let mut groups: BTreeMap<&str, Vec<&InstanceAnalysis>> = BTreeMap::new();
        for analysis in analyses {
            groups
                .entry(analysis.summary.instance_type.as_str())
                .or_default()
                .push(analysis);
        }
        let by_type = groups
            .into_iter()
            .map(|(ty, members)| {
                let records: Vec<&ArcMetricRecord> =
                    members.iter().flat_map(|a| &a.records).collect();
                TypeBreakdown {
                    instance_type: ty.to_string(),
                    instance_count: members.len(),
                    total_arcs: records.len(),
                    time: DimensionSummary::collect(records.iter().copied(), |r| &r.time),
                    distance: DimensionSummary::collect(records.iter().copied(), |r| &r.distance),
                }
            })
            .collect();

        let avg_feasible_arcs = if pooled.is_empty() {
            0.0
        } else {
            pooled.iter().map(|r| r.feasible_count as f64).sum::<f64>() / pooled.len() as f64
        };

        Self {
            total_instances: analyses.len(),
            total_routes: analyses.iter().map(|a| a.summary.total_routes).sum(),
            total_arcs: pooled.len(),
            avg_feasible_arcs,
            time,
            distance,
            by_type,
            time_verdict,
            distance_verdict,
        }
    }
}

/// Result of a corpus run: the per-instance analyses that succeeded, the
/// instances that were skipped (with the reason), and the pooled summary.
#[derive(Debug, Clone)]
pub struct CorpusReport {
    pub analyses: Vec<InstanceAnalysis>,
    /// `(instance name, error description)` for every skipped instance.
    pub skipped: Vec<(String, String)>,
    pub summary: CorpusSummary,
}

/// Analyze every paired case, skipping failures.
///
/// One instance failing — malformed route, empty solution — never aborts
/// the rest: the failure is logged and recorded in
/// [`CorpusReport::skipped`].  With the `parallel` feature the per-instance
/// analyses run on Rayon's thread pool; each analysis touches only its own
/// immutable case, and results are collected back in input order, so the
/// two modes produce identical reports.
pub fn run_corpus(cases: &[PairedCase], config: &AnalysisConfig) -> CorpusReport {
    let outcomes = analyze_all(cases, config);

    let mut analyses = Vec::with_capacity(cases.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(analysis) => analyses.push(analysis),
            Err((name, reason)) => {
                tracing::warn!(instance = %name, %reason, "skipping instance analysis");
                skipped.push((name, reason));
            }
        }
    }

    let summary = CorpusSummary::build(&analyses);
    CorpusReport {
        analyses,
        skipped,
        summary,
    }
}

type Outcome = Result<InstanceAnalysis, (String, String)>;

fn analyze_one(case: &PairedCase, config: &AnalysisConfig) -> Outcome {
    analyze_case(case, config).map_err(|e| (case.name.clone(), e.to_string()))
}

#[cfg(not(feature = "parallel"))]
fn analyze_all(cases: &[PairedCase], config: &AnalysisConfig) -> Vec<Outcome> {
    cases.iter().map(|c| analyze_one(c, config)).collect()
}

#[cfg(feature = "parallel")]
fn analyze_all(cases: &[PairedCase], config: &AnalysisConfig) -> Vec<Outcome> {
    use rayon::prelude::*;

    cases.par_iter().map(|c| analyze_one(c, config)).collect()
}
