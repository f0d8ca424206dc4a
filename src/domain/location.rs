//! Location and vehicle wire types.

use serde::{Deserialize, Serialize};

fn default_time_window_end() -> i64 {
    1440
}

/// A single stop candidate: the depot or a customer.
///
/// Mirrors `vrp.models.schema_v2.LocationV2` field-for-field, including
/// defaults (`service_time`, `pickup`, `delivery` default to zero,
/// `time_window_end` defaults to 1440 — end of day in minutes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub pickup: i64,
    #[serde(default)]
    pub delivery: i64,
    #[serde(default)]
    pub service_time: i64,
    #[serde(default)]
    pub time_window_start: i64,
    #[serde(default = "default_time_window_end")]
    pub time_window_end: i64,

    /// Set => optional stop; skipping it costs this many objective units.
    /// Unset => required, infeasibility results if it cannot be routed.
    #[serde(default)]
    pub unserved_penalty: Option<i64>,

    /// Set => the upper time window bound is soft, at this cost per minute late.
    #[serde(default)]
    pub late_penalty: Option<i64>,

    /// Set => only these vehicle ids may visit this location.
    #[serde(default)]
    pub allowed_vehicle_ids: Option<Vec<i64>>,
}

impl Location {
    /// Net effect on vehicle load when visiting this node: pickup adds,
    /// delivery removes.
    pub fn demand(&self) -> i64 {
        self.pickup - self.delivery
    }
}

/// A vehicle available to serve routes.
///
/// Mirrors `vrp.models.schema_v2.VehicleV2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub capacity: i64,
    #[serde(default)]
    pub fixed_cost: i64,
    /// Set => caps the vehicle's end-of-route cumulative time.
    #[serde(default)]
    pub max_duration_minutes: Option<i64>,
}
