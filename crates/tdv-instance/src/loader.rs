//! JSON document loaders.
//!
//! # Instance document format
//!
//! ```json
//! {
//!   "distances":      [[0.0, 5.0], [5.0, 0.0]],
//!   "clusters":       [[0, 1], [1, 0]],
//!   "cluster_speeds": [[1.0, 0.5], [2.0, 1.0]],
//!   "speed_zones":    [[0.0, 50.0], [50.0, 100.0]],
//!   "horizon":        [0.0, 100.0],
//!   "time_windows":   [[0.0, 100.0], [10.0, 60.0]],
//!   "service_times":  [0.0, 5.0]
//! }
//! ```
//!
//! `horizon` is optional; without it the period is the end of the last zone.
//!
//! # Solution document format
//!
//! A JSON array of solutions, one per instance:
//!
//! ```json
//! [{"instance_name": "C101",
//!   "routes": [{"t0": 0.0, "path": [0, 3, 1, 0], "duration": 87.2}],
//!   "value": 87.2, "tags": ["best-known"]}]
//! ```
//!
//! Loaders parse into raw serde records, then hand the fields to
//! [`Instance::new`] for shape validation.  Archive extraction and filename
//! handling stay with the caller — these functions consume already-located
//! byte streams.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tdv_core::{SpeedZones, TdvError, TdvResult};

use crate::document::Instance;
use crate::solution::Solution;

// ── Raw document records ──────────────────────────────────────────────────────

#[derive(Deserialize)]
struct InstanceRecord {
    distances:      Vec<Vec<f64>>,
    clusters:       Vec<Vec<u32>>,
    cluster_speeds: Vec<Vec<f64>>,
    speed_zones:    Vec<(f64, f64)>,
    #[serde(default)]
    horizon:        Option<(f64, f64)>,
    time_windows:   Vec<(f64, f64)>,
    service_times:  Vec<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate one instance document from a JSON file.
pub fn load_instance_json(path: &Path) -> TdvResult<Instance> {
    let file = std::fs::File::open(path).map_err(TdvError::Io)?;
    load_instance_reader(file)
}

/// Like [`load_instance_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for documents pulled out
/// of an archive by the caller.
pub fn load_instance_reader<R: Read>(reader: R) -> TdvResult<Instance> {
    let record: InstanceRecord =
        serde_json::from_reader(reader).map_err(|e| TdvError::Parse(e.to_string()))?;

    let zones = SpeedZones::new(record.speed_zones, record.horizon)?;
    Instance::new(
        record.distances,
        record.clusters,
        record.cluster_speeds,
        zones,
        record.time_windows,
        record.service_times,
    )
}

/// Load all solution documents from a JSON file.
pub fn load_solutions_json(path: &Path) -> TdvResult<Vec<Solution>> {
    let file = std::fs::File::open(path).map_err(TdvError::Io)?;
    load_solutions_reader(file)
}

/// Like [`load_solutions_json`] but accepts any `Read` source.
pub fn load_solutions_reader<R: Read>(reader: R) -> TdvResult<Vec<Solution>> {
    serde_json::from_reader(reader).map_err(|e| TdvError::Parse(e.to_string()))
}
