//! The engine's single entry point: `solve(compute_id, request) -> Payload`.
//!
//! All of the transit-callback closures are declared here, in the same
//! stack frame as the index manager and routing model they're registered
//! against, and never escape into a helper function — see
//! [`super::builder`]'s module doc for why that's load-bearing rather than
//! a style choice.

use std::ffi::c_int;
use std::time::Instant;

use or_tools::constraint_solver::routing::RoutingModel;
use or_tools::constraint_solver::routing_index_manager::{
    RoutingIndexManager, RoutingIndexManagerVehiclePlan, RoutingNodeIndex,
};
use tracing::{info, warn};

use crate::console;
use crate::domain::{Payload, SolveRequest};
use crate::error::EngineError;

use super::{builder, projector, search};

pub struct Engine;

impl Engine {
    /// Builds the model, searches for a solution, and projects the result —
    /// this is the CPU-bound routine the HTTP layer runs inside
    /// `tokio::task::spawn_blocking`.
    pub fn solve(compute_id: i64, request: &SolveRequest) -> Payload {
        let start = Instant::now();
        info!(compute_id, locations = request.locations.len(), vehicles = request.vehicles.len(), "solve started");

        let outcome = Self::solve_blocking(request);
        let elapsed_seconds = round_seconds(start.elapsed().as_secs_f64());

        match outcome {
            Ok(projected) => {
                info!(
                    compute_id,
                    elapsed_seconds,
                    routes = projected.routes.len(),
                    unserved = projected.unserved_locations.len(),
                    "solve finished"
                );
                console::print_solve_summary(
                    compute_id,
                    elapsed_seconds,
                    projected.routes.len(),
                    projected.unserved_locations.len(),
                );
                Payload::Success {
                    compute_id,
                    elapsed_seconds,
                    total_distance: projected.total_distance,
                    routes: projected.routes,
                    unserved_locations: projected.unserved_locations,
                }
            }
            Err(err) => {
                warn!(compute_id, error = %err, "solve failed");
                Payload::Error {
                    compute_id,
                    elapsed_seconds: Some(elapsed_seconds),
                    message: err.to_string(),
                }
            }
        }
    }

    fn solve_blocking(request: &SolveRequest) -> Result<projector::ProjectedSolution, EngineError> {
        validate_nonnegative(request)?;

        let num_nodes = request.locations.len() as c_int;
        let num_vehicles = request.vehicles.len() as c_int;
        let depot = RoutingNodeIndex::new(request.depot_index as c_int);

        let manager = RoutingIndexManager::new(
            num_nodes,
            num_vehicles,
            RoutingIndexManagerVehiclePlan::Depot(depot),
        );
        let mut routing = RoutingModel::new(&manager, None);

        // Distance cost: arc cost for every vehicle, read straight off the
        // request's distance matrix.
        let distance_matrix = &request.distance_matrix;
        let distance_callback = |from_index: i64, to_index: i64| -> i64 {
            let from = manager.index_to_node(from_index).value() as usize;
            let to = manager.index_to_node(to_index).value() as usize;
            distance_matrix[from][to]
        };
        let distance_callback_index = routing.register_transit_callback(&distance_callback);
        builder::set_distance_cost(&mut routing, distance_callback_index);
        builder::add_fixed_costs(&mut routing, request);

        // Capacity: transit is the node's net pickup/delivery demand,
        // expressed as a binary callback that ignores `to_index` — the
        // registered callback surface here only offers the binary form.
        let demands: Vec<i64> = request
            .locations
            .iter()
            .map(|location| location.demand())
            .collect();
        let demand_callback = |from_index: i64, _to_index: i64| -> i64 {
            let from = manager.index_to_node(from_index).value() as usize;
            demands[from]
        };
        let demand_callback_index = routing.register_transit_callback(&demand_callback);
        builder::add_capacity_dimension(&mut routing, request, demand_callback_index)?;

        // Time: transit is travel time plus the origin node's service time.
        let time_matrix = &request.time_matrix;
        let service_times: Vec<i64> = request
            .locations
            .iter()
            .map(|location| location.service_time)
            .collect();
        let time_callback = |from_index: i64, to_index: i64| -> i64 {
            let from = manager.index_to_node(from_index).value() as usize;
            let to = manager.index_to_node(to_index).value() as usize;
            time_matrix[from][to] + service_times[from]
        };
        let time_callback_index = routing.register_transit_callback(&time_callback);
        builder::add_time_dimension(&mut routing, &manager, request, time_callback_index)?;

        builder::add_optional_stops(&mut routing, &manager, request);
        builder::add_vehicle_constraints(&mut routing, &manager, request);
        builder::add_max_duration(&mut routing, request)?;

        let assignment = search::solve(&routing, request)?;
        Ok(projector::project(&routing, &manager, &assignment, request))
    }
}

/// Matrix and capacity sign checks: caught here, not at intake, because
/// they depend on nothing but the numbers themselves and the source
/// engine raises them as model-build errors, delivered via webhook rather
/// than a synchronous 422.
fn validate_nonnegative(request: &SolveRequest) -> Result<(), EngineError> {
    if request.vehicles.iter().any(|vehicle| vehicle.capacity < 0) {
        return Err(EngineError::ModelBuild(
            "vehicle capacity must be non-negative".to_string(),
        ));
    }
    let has_negative_entry = request
        .distance_matrix
        .iter()
        .chain(request.time_matrix.iter())
        .flatten()
        .any(|&value| value < 0);
    if has_negative_entry {
        return Err(EngineError::ModelBuild(
            "distance_matrix and time_matrix entries must be non-negative".to_string(),
        ));
    }
    Ok(())
}

fn round_seconds(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
