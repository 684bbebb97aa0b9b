//! `tdv-tau` — the exact time-dependent travel-time engine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`pwl`]   | `forward`, `backward`, `breakpoints`, `ArcTau`             |
//! | [`cache`] | `TauCache` (per-instance memo), `arc_duration` scalar helper |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the arc memo cache.        |

pub mod cache;
pub mod pwl;

#[cfg(test)]
mod tests;

pub use cache::{arc_duration, TauCache};
pub use pwl::{backward, breakpoints, forward, ArcTau};
