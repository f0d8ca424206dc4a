//! Constraint-programming vehicle routing solver service.
//!
//! Translates a routing request — locations, vehicles, distance/time
//! matrices — into an OR-Tools constraint model, searches for a feasible
//! low-cost solution, and projects it back into routes, stops, and
//! aggregates.
//!
//! # Domain Model
//!
//! - [`Location`](domain::Location): a depot or customer stop, with demand,
//!   a time window, and optional-stop/vehicle-allow restrictions
//! - [`Vehicle`](domain::Vehicle): capacity, fixed cost, optional max duration
//! - [`SolveRequest`](domain::SolveRequest): the full request shared by the
//!   v1 and v2 HTTP routes
//! - [`Payload`](domain::Payload): the solved (or failed) result delivered
//!   to the request's webhook
//!
//! # Constraints
//!
//! - **Capacity** (hard): cumulative pickup/delivery demand per vehicle
//! - **Time windows** (hard by default, soft when `late_penalty` is set)
//! - **Optional stops**: locations with `unserved_penalty` may be skipped
//! - **Vehicle-allow restrictions**: `allowed_vehicle_ids` per location
//! - **Max duration** (hard, per vehicle)

pub mod api;
pub mod config;
pub mod console;
pub mod domain;
pub mod engine;
pub mod error;
pub mod webhook;
