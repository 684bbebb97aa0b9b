//! Per-instance memoization of arc τ functions.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

use tdv_core::NodeId;
use tdv_instance::Instance;

use crate::pwl::{forward, ArcTau};

#[cfg(feature = "fx-hash")]
type ArcMap = rustc_hash::FxHashMap<(NodeId, NodeId), ArcTau>;
#[cfg(not(feature = "fx-hash"))]
type ArcMap = HashMap<(NodeId, NodeId), ArcTau>;

/// Memoized τ functions for the arcs of one instance.
///
/// `ArcTau` is a pure function of the instance's static data, and the
/// instance is immutable after load, so entries never invalidate.  The cache
/// borrows the instance for its whole lifetime, which also pins the cache to
/// the instance it was built for.
pub struct TauCache<'i> {
    instance: &'i Instance,
    arcs: ArcMap,
}

impl<'i> TauCache<'i> {
    pub fn new(instance: &'i Instance) -> Self {
        Self {
            instance,
            arcs: ArcMap::default(),
        }
    }

    /// The PWL τ function of arc `(i, j)`, built on first access.
    pub fn arc(&mut self, i: NodeId, j: NodeId) -> &ArcTau {
        let instance = self.instance;
        self.arcs.entry((i, j)).or_insert_with(|| {
            let cluster = instance.cluster(i, j);
            ArcTau::build(
                instance.zones(),
                instance.speeds(cluster),
                instance.distance(i, j),
            )
        })
    }

    /// Number of distinct arcs materialized so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Exact τ for arc `(i, j)` at departure `t`, straight from [`forward`]
/// without materializing the PWL function.
///
/// This is the scalar workhorse for single evaluations (the route replay);
/// use [`TauCache`] when the same arc will be evaluated many times.
pub fn arc_duration(instance: &Instance, i: NodeId, j: NodeId, t: f64) -> f64 {
    let cluster = instance.cluster(i, j);
    forward(
        instance.zones(),
        instance.speeds(cluster),
        instance.distance(i, j),
        t,
    )
}
