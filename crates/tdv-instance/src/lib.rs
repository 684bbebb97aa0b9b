//! `tdv-instance` — validated TDVRP instance/solution documents and JSON
//! loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`document`] | `Instance` — validated, immutable instance record        |
//! | [`solution`] | `Route`, `Solution` — the routes under evaluation        |
//! | [`loader`]   | `load_instance_json`, `load_solutions_json` + `Read` variants |
//! | [`pairing`]  | `pair_by_name`, `instance_type_of`                       |
//!
//! Documents are parsed with serde, validated once, and immutable afterwards
//! — all analysis code downstream assumes a well-shaped instance and never
//! re-checks.  Errors use `tdv_core::TdvError` (`Parse` for malformed JSON,
//! `Document`/`ClusterNotFound` for shape violations).

pub mod document;
pub mod loader;
pub mod pairing;
pub mod solution;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use document::Instance;
pub use loader::{
    load_instance_json, load_instance_reader, load_solutions_json, load_solutions_reader,
};
pub use pairing::{instance_type_of, pair_by_name, PairedCase};
pub use solution::{Route, Solution};
