//! Cyclic speed-zone model.
//!
//! # Design
//!
//! Travel speed varies by time of day.  The planning horizon is tiled by an
//! ordered list of zones `[start, end)`, and the tiling repeats cyclically
//! with period `P`:
//!
//!   P = horizon[1] − horizon[0]   (when a horizon is configured)
//!   P = end of the last zone      (otherwise)
//!
//! A departure at time `t` therefore experiences the speeds of zone
//! `zone_index(t)`, and a journey that outlasts the day wraps back into the
//! first zone.  Zones are assumed to tile `[0, P)` without gaps; that is a
//! data-quality assumption on the instance document and is not checked here.
//!
//! The per-cluster speed values themselves live in the instance document
//! (`cluster_speeds[cluster][zone]`) — this type only answers "which zone is
//! time `t` in" and "how long is one period".

use crate::{TdvError, TdvResult, ZoneId};

/// The ordered zone tiling of one cyclic period.
///
/// `SpeedZones` is built once per instance at the load boundary and is
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedZones {
    /// Ordered `(start, end)` pairs tiling `[0, P)`.
    zones: Vec<(f64, f64)>,
    /// Optional explicit horizon `[h0, h1]`.  When absent, the period is the
    /// end of the last zone.
    horizon: Option<(f64, f64)>,
}

impl SpeedZones {
    /// Build the zone model, rejecting an empty tiling or a non-positive
    /// period.
    pub fn new(zones: Vec<(f64, f64)>, horizon: Option<(f64, f64)>) -> TdvResult<Self> {
        if zones.is_empty() {
            return Err(TdvError::Document("speed_zones is empty".into()));
        }
        let model = Self { zones, horizon };
        let p = model.period();
        if !(p > 0.0) {
            return Err(TdvError::Document(format!(
                "horizon period must be positive, got {p}"
            )));
        }
        Ok(model)
    }

    /// Length of one cyclic period: the configured horizon length, or the
    /// end of the last zone if no horizon was given.
    #[inline]
    pub fn period(&self) -> f64 {
        match self.horizon {
            Some((h0, h1)) => h1 - h0,
            None => self.zones[self.zones.len() - 1].1,
        }
    }

    /// The zone whose `[start, end)` contains `t mod P`.
    ///
    /// `t` exactly equal to `P` falls in the *last* zone (closed-right edge
    /// case): the scan finds no half-open zone containing `P`, and the last
    /// zone is the fallback.
    pub fn zone_index(&self, t: f64) -> ZoneId {
        let p = self.period();
        let t = if (0.0..=p).contains(&t) { t } else { t.rem_euclid(p) };
        for (i, &(a, b)) in self.zones.iter().enumerate() {
            if a <= t && t < b {
                return ZoneId(i as u32);
            }
        }
        ZoneId(self.zones.len() as u32 - 1)
    }

    /// `(start, end)` bounds of zone `z`.
    #[inline]
    pub fn bounds(&self, z: ZoneId) -> (f64, f64) {
        self.zones[z.index()]
    }

    #[inline]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// The ordered zone tiling, as stored.
    #[inline]
    pub fn zones(&self) -> &[(f64, f64)] {
        &self.zones
    }
}
