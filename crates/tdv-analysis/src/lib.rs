//! `tdv-analysis` — the orchestration layer tying the pipeline together.
//!
//! # One instance
//!
//! ```text
//! for each route of the solution:
//!   ① replay      — reconstruct departures (tdv-sim)
//!   ② enumerate   — feasible arcs per interval (tdv-feasible)
//!   ③ sample+score— ArcMetricRecord per interval (tdv-metrics)
//! then roll records into an InstanceSummary.
//! ```
//!
//! # Corpus
//!
//! [`run_corpus`] maps the per-instance analysis over every paired case —
//! sequentially, or on Rayon's thread pool with the `parallel` feature —
//! and pools the records into a [`CorpusSummary`] with a per-type breakdown
//! and the hypothesis verdicts (time and distance judged independently).
//! A failing instance is logged, recorded, and skipped; it never takes the
//! corpus down with it.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs per-instance analyses on Rayon's thread pool.     |

pub mod corpus;
pub mod error;
pub mod instance;
pub mod summary;


pub use corpus::{run_corpus, CorpusReport, CorpusSummary, HypothesisVerdict, TypeBreakdown};
pub use error::{AnalysisError, AnalysisResult};
pub use instance::{analyze_case, AnalysisConfig, AnalysisWarning, InstanceAnalysis};
pub use summary::{DimensionSummary, InstanceSummary};
