//! `tdv-sim` — route replay against the exact τ model.
//!
//! # Replay walk
//!
//! ```text
//! current = t0
//! for each consecutive (u, v) in path:
//!   departure = max(current, ready[u]) + service[u]
//!   duration  = τ(u→v) at departure        (exact forward walk)
//!   current   = departure + duration
//! ```
//!
//! The output trace is the ground truth every later stage builds on: the
//! spans between consecutive departures are the intervals over which
//! feasible alternatives are enumerated and sampled.
//!
//! The replayed elapsed time is checked against the duration the solution
//! document declared; disagreement beyond 0.1 time units attaches a
//! non-fatal [`ReplayWarning`] — it signals that the solver's travel-time
//! model and this τ model diverge, without halting analysis.

pub mod error;
pub mod replay;
pub mod trace;


pub use error::{SimError, SimResult};
pub use replay::{replay_route, replay_solution, DURATION_TOLERANCE};
pub use trace::{Interval, LegDeparture, ReplayWarning, RouteTrace};
