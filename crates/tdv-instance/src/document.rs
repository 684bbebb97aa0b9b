//! The validated, immutable instance document.

use tdv_core::{ClusterId, NodeId, SpeedZones, TdvError, TdvResult};

/// One TDVRP instance, validated once at the load boundary and read-only for
/// the rest of the analysis.
///
/// All fields are private: the shape invariants below are established by
/// [`Instance::new`] and every accessor may rely on them afterwards.
///
/// # Shape invariants
///
/// - `distances` and `clusters` are `n × n` matrices, `n = vertex_count`.
/// - Every entry of `clusters` indexes a row of `cluster_speeds`.
/// - Every `cluster_speeds` row has one speed per zone.
/// - `time_windows` and `service_times` have one entry per vertex.
/// - All distances are finite and ≥ 0.
#[derive(Clone, Debug)]
pub struct Instance {
    vertex_count:   usize,
    distances:      Vec<Vec<f64>>,
    clusters:       Vec<Vec<ClusterId>>,
    cluster_speeds: Vec<Vec<f64>>,
    zones:          SpeedZones,
    time_windows:   Vec<(f64, f64)>,
    service_times:  Vec<f64>,
}

impl Instance {
    /// Validate raw document fields and build the immutable instance.
    ///
    /// The zone tiling itself is validated by [`SpeedZones::new`] (non-empty,
    /// positive period); gaps in the tiling are a data-quality assumption and
    /// are not checked.
    pub fn new(
        distances:      Vec<Vec<f64>>,
        clusters:       Vec<Vec<u32>>,
        cluster_speeds: Vec<Vec<f64>>,
        zones:          SpeedZones,
        time_windows:   Vec<(f64, f64)>,
        service_times:  Vec<f64>,
    ) -> TdvResult<Self> {
        let n = distances.len();
        if n == 0 {
            return Err(TdvError::Document("distance matrix is empty".into()));
        }

        for (i, row) in distances.iter().enumerate() {
            if row.len() != n {
                return Err(TdvError::Document(format!(
                    "distances row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(d) = row.iter().find(|d| !d.is_finite() || **d < 0.0) {
                return Err(TdvError::Document(format!(
                    "distances row {i} contains invalid entry {d}"
                )));
            }
        }

        if clusters.len() != n {
            return Err(TdvError::Document(format!(
                "clusters matrix has {} rows, expected {n}",
                clusters.len()
            )));
        }
        let cluster_count = cluster_speeds.len();
        for (i, row) in clusters.iter().enumerate() {
            if row.len() != n {
                return Err(TdvError::Document(format!(
                    "clusters row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(&c) = row.iter().find(|&&c| c as usize >= cluster_count) {
                return Err(TdvError::ClusterNotFound(ClusterId(c)));
            }
        }

        let zone_count = zones.zone_count();
        for (c, speeds) in cluster_speeds.iter().enumerate() {
            if speeds.len() != zone_count {
                return Err(TdvError::Document(format!(
                    "cluster {c} has {} speeds, expected one per zone ({zone_count})",
                    speeds.len()
                )));
            }
        }

        if time_windows.len() != n {
            return Err(TdvError::Document(format!(
                "time_windows has {} entries, expected {n}",
                time_windows.len()
            )));
        }
        if service_times.len() != n {
            return Err(TdvError::Document(format!(
                "service_times has {} entries, expected {n}",
                service_times.len()
            )));
        }

        let clusters = clusters
            .into_iter()
            .map(|row| row.into_iter().map(ClusterId).collect())
            .collect();

        Ok(Self {
            vertex_count: n,
            distances,
            clusters,
            cluster_speeds,
            zones,
            time_windows,
            service_times,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Travel distance of arc `(i, j)`.
    #[inline]
    pub fn distance(&self, i: NodeId, j: NodeId) -> f64 {
        self.distances[i.index()][j.index()]
    }

    /// Speed cluster of arc `(i, j)`.
    #[inline]
    pub fn cluster(&self, i: NodeId, j: NodeId) -> ClusterId {
        self.clusters[i.index()][j.index()]
    }

    /// Per-zone speeds of `cluster` (one entry per zone, in zone order).
    #[inline]
    pub fn speeds(&self, cluster: ClusterId) -> &[f64] {
        &self.cluster_speeds[cluster.index()]
    }

    #[inline]
    pub fn zones(&self) -> &SpeedZones {
        &self.zones
    }

    /// `[ready, due]` window of `node`.
    #[inline]
    pub fn time_window(&self, node: NodeId) -> (f64, f64) {
        self.time_windows[node.index()]
    }

    #[inline]
    pub fn ready(&self, node: NodeId) -> f64 {
        self.time_windows[node.index()].0
    }

    #[inline]
    pub fn due(&self, node: NodeId) -> f64 {
        self.time_windows[node.index()].1
    }

    #[inline]
    pub fn service_time(&self, node: NodeId) -> f64 {
        self.service_times[node.index()]
    }

    /// `true` when `node` indexes a vertex of this instance.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.vertex_count
    }
}
