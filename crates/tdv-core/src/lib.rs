//! `tdv-core` — foundational types for the `rust_tdva` TDVRP analysis
//! framework.
//!
//! This crate is a dependency of every other `tdv-*` crate.  It intentionally
//! has no `tdv-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `NodeId`, `ClusterId`, `ZoneId`, `RouteId`              |
//! | [`zones`] | `SpeedZones` — cyclic zone tiling, `period`, `zone_index` |
//! | [`error`] | `TdvError`, `TdvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `tdv-instance`.                                |

pub mod error;
pub mod ids;
pub mod zones;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TdvError, TdvResult};
pub use ids::{ClusterId, NodeId, RouteId, ZoneId};
pub use zones::SpeedZones;
