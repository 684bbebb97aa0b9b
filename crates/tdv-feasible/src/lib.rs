//! `tdv-feasible` — which arcs could the route have used instead?
//!
//! For every interval of a replayed route, this crate enumerates the arcs
//! that would have respected node time windows at that point in time.  Two
//! enumeration policies exist because the question has two defensible
//! readings:
//!
//! | Policy           | Alternatives considered                             |
//! |------------------|-----------------------------------------------------|
//! | `SymmetricPairs` | Any arc whose endpoints are both "open" right now   |
//! | `FixedOrigin`    | Any destination from the predecessor actually used  |
//!
//! `SymmetricPairs` is the default; `FixedOrigin` is an explicit opt-in for
//! analyses that only want to second-guess the destination choice.
//!
//! Feasible sets are returned positionally per interval — an ordered `Vec`,
//! never a float-keyed map.

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::{feasible_arcs_for_trace, FeasibilityPolicy, FeasibleSet};
