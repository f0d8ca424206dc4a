//! Response wire types delivered to the webhook (and returned inline by
//! the integration tests that bypass HTTP).

use serde::Serialize;

/// A single visited stop within a vehicle's route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stop {
    pub location_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub arrival_time: i64,
    pub pickup: i64,
    pub delivery: i64,
}

/// One vehicle's route: depot-to-depot sequence of stops plus its
/// aggregates. `total_distance` is read straight from the distance matrix
/// and never includes the vehicle's `fixed_cost`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Route {
    pub vehicle_id: i64,
    pub stops: Vec<Stop>,
    pub total_distance: i64,
    pub total_pickup: i64,
    pub total_delivery: i64,
}

/// A location that was modeled as optional and left unvisited.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UnservedLocation {
    pub location_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The payload delivered to the webhook (and, in tests, inspected directly).
/// `total_distance` is the sum of every route's `total_distance`, again
/// excluding fixed costs.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Payload {
    Success {
        compute_id: i64,
        elapsed_seconds: f64,
        total_distance: i64,
        routes: Vec<Route>,
        unserved_locations: Vec<UnservedLocation>,
    },
    Error {
        compute_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        elapsed_seconds: Option<f64>,
        message: String,
    },
}

impl Payload {
    pub fn compute_id(&self) -> i64 {
        match self {
            Payload::Success { compute_id, .. } => *compute_id,
            Payload::Error { compute_id, .. } => *compute_id,
        }
    }
}
