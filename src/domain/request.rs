//! Request wire type and the request-shape invariants checked at intake.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::location::{Location, Vehicle};

fn default_depot_index() -> usize {
    0
}

fn default_time_limit_seconds() -> u64 {
    30
}

/// A solve request, shared verbatim by the `/vrp/solve` (v1) and
/// `/vrp/v2/solve` handlers. v1 traffic simply never populates the v2-only
/// optional fields on [`Location`]/[`Vehicle`] (`unserved_penalty`,
/// `late_penalty`, `allowed_vehicle_ids`, `max_duration_minutes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub compute_id: i64,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_depot_index")]
    pub depot_index: usize,
    pub locations: Vec<Location>,
    pub vehicles: Vec<Vehicle>,
    pub distance_matrix: Vec<Vec<i64>>,
    pub time_matrix: Vec<Vec<i64>>,
    #[serde(default = "default_time_limit_seconds")]
    pub time_limit_seconds: u64,
}

/// Request-shape errors (error kind 1 in the error model): caught
/// synchronously at intake, before any solver construction, and surfaced as
/// a 422 response. None of these ever reach the engine or the webhook.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("at least one depot and one customer location are required")]
    TooFewLocations,
    #[error("at least one vehicle is required")]
    NoVehicles,
    #[error("depot_index {depot_index} is out of range for {location_count} locations")]
    DepotOutOfRange {
        depot_index: usize,
        location_count: usize,
    },
    #[error("distance_matrix must be {expected}x{expected}, found {rows} rows")]
    DistanceMatrixRows { expected: usize, rows: usize },
    #[error("distance_matrix row {row} must have {expected} entries, found {actual}")]
    DistanceMatrixRowLen {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("time_matrix must be {expected}x{expected}, found {rows} rows")]
    TimeMatrixRows { expected: usize, rows: usize },
    #[error("time_matrix row {row} must have {expected} entries, found {actual}")]
    TimeMatrixRowLen {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("location ids must be unique, found duplicate id {0}")]
    DuplicateLocationId(i64),
    #[error("vehicle ids must be unique, found duplicate id {0}")]
    DuplicateVehicleId(i64),
    #[error("location {location_id} allows unknown vehicle id {vehicle_id}")]
    UnknownAllowedVehicleId { location_id: i64, vehicle_id: i64 },
    #[error("location {0} has time_window_start greater than time_window_end")]
    InvalidTimeWindow(i64),
}

impl SolveRequest {
    /// Validates everything that can be checked from the request shape
    /// alone, independent of whether a feasible routing exists. This is the
    /// full set of kind-1 errors from the error model; matrix/capacity sign
    /// checks are kind-2 (model-build) and are left to the engine.
    pub fn validate_shape(&self) -> Result<(), RequestError> {
        let n = self.locations.len();

        if n < 2 {
            return Err(RequestError::TooFewLocations);
        }
        if self.vehicles.is_empty() {
            return Err(RequestError::NoVehicles);
        }
        if self.depot_index >= n {
            return Err(RequestError::DepotOutOfRange {
                depot_index: self.depot_index,
                location_count: n,
            });
        }

        if self.distance_matrix.len() != n {
            return Err(RequestError::DistanceMatrixRows {
                expected: n,
                rows: self.distance_matrix.len(),
            });
        }
        for (row, entries) in self.distance_matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(RequestError::DistanceMatrixRowLen {
                    row,
                    expected: n,
                    actual: entries.len(),
                });
            }
        }

        if self.time_matrix.len() != n {
            return Err(RequestError::TimeMatrixRows {
                expected: n,
                rows: self.time_matrix.len(),
            });
        }
        for (row, entries) in self.time_matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(RequestError::TimeMatrixRowLen {
                    row,
                    expected: n,
                    actual: entries.len(),
                });
            }
        }

        let mut seen_location_ids = std::collections::HashSet::with_capacity(n);
        for location in &self.locations {
            if !seen_location_ids.insert(location.id) {
                return Err(RequestError::DuplicateLocationId(location.id));
            }
            if location.time_window_start > location.time_window_end {
                return Err(RequestError::InvalidTimeWindow(location.id));
            }
        }

        let mut seen_vehicle_ids = std::collections::HashSet::with_capacity(self.vehicles.len());
        for vehicle in &self.vehicles {
            if !seen_vehicle_ids.insert(vehicle.id) {
                return Err(RequestError::DuplicateVehicleId(vehicle.id));
            }
        }

        for location in &self.locations {
            if let Some(allowed) = &location.allowed_vehicle_ids {
                for vehicle_id in allowed {
                    if !seen_vehicle_ids.contains(vehicle_id) {
                        return Err(RequestError::UnknownAllowedVehicleId {
                            location_id: location.id,
                            vehicle_id: *vehicle_id,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
