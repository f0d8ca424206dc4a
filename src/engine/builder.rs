//! Translates a validated [`SolveRequest`] into an OR-Tools constraint
//! model. Each function here adds exactly one constraint family, called
//! from [`super::facade`] in the fixed order the source engine uses:
//! distance cost, fixed costs, capacity, time windows, optional stops,
//! vehicle-allow restrictions, max-duration caps.
//!
//! Transit callbacks are registered by the caller (not here) and handed in
//! as plain evaluator indices: the closures they wrap borrow the request's
//! matrices and must stay alive for as long as the routing model itself, so
//! they live in [`super::facade::solve_blocking`]'s stack frame alongside
//! the model rather than inside a function that would drop them on return.

use std::ffi::c_int;

use or_tools::constraint_solver::routing::RoutingModel;
use or_tools::constraint_solver::routing_index_manager::{RoutingIndexManager, RoutingNodeIndex};

use crate::domain::SolveRequest;
use crate::error::EngineError;

pub const CAPACITY_DIMENSION: &str = "Capacity";
pub const TIME_DIMENSION: &str = "Time";

pub fn set_distance_cost(routing: &mut RoutingModel, callback_index: c_int) {
    routing.set_arc_cost_evaluator_of_all_vehicles(callback_index);
}

/// Per-vehicle fixed costs, applied on top of arc costs and excluded from
/// the projected `total_distance` (see [`super::projector`]).
pub fn add_fixed_costs(routing: &mut RoutingModel, request: &SolveRequest) {
    for (vehicle_index, vehicle) in request.vehicles.iter().enumerate() {
        if vehicle.fixed_cost != 0 {
            routing.set_fixed_cost_of_vehicle(vehicle.fixed_cost, vehicle_index as c_int);
        }
    }
}

/// Capacity dimension over pickup/delivery demand. `fix_start_cumul_to_zero`
/// is kept `false`, matching the source engine verbatim — vehicles are not
/// forced to start empty, which matters when a fleet models vehicles that
/// already carry a base load.
pub fn add_capacity_dimension(
    routing: &mut RoutingModel,
    request: &SolveRequest,
    callback_index: c_int,
) -> Result<(), EngineError> {
    let capacities: Vec<i64> = request.vehicles.iter().map(|v| v.capacity).collect();

    let added = routing.add_dimension_with_vehicle_capacity(
        callback_index,
        0,
        &capacities,
        false,
        CAPACITY_DIMENSION,
    );
    if !added {
        return Err(EngineError::ModelBuild(
            "failed to register the capacity dimension".to_string(),
        ));
    }
    Ok(())
}

/// Time dimension over travel time plus service time, with per-location
/// hard or soft windows. Slack and horizon are both `max(time_window_end)`
/// across all locations, matching the source engine; `fix_start_cumul_to_zero`
/// is `false` because the start and end cumuls are pinned by the finalizer
/// below rather than forced to zero.
pub fn add_time_dimension(
    routing: &mut RoutingModel,
    manager: &RoutingIndexManager,
    request: &SolveRequest,
    callback_index: c_int,
) -> Result<(), EngineError> {
    let max_time = request
        .locations
        .iter()
        .map(|location| location.time_window_end)
        .max()
        .unwrap_or(0);

    let added = routing.add_dimension(callback_index, max_time, max_time, false, TIME_DIMENSION);
    if !added {
        return Err(EngineError::ModelBuild(
            "failed to register the time dimension".to_string(),
        ));
    }

    let time_dimension = routing
        .get_mutable_dimension(TIME_DIMENSION)
        .ok_or_else(|| EngineError::ModelBuild("time dimension missing after registration".to_string()))?;

    for (node, location) in request.locations.iter().enumerate() {
        let index = manager.node_to_index(&RoutingNodeIndex::new(node as c_int));
        let cumul = time_dimension
            .cumul_var(index)
            .ok_or_else(|| EngineError::ModelBuild(format!("missing time cumul var for location {}", location.id)))?;

        match location.late_penalty {
            Some(penalty) => {
                cumul.set_range(location.time_window_start, max_time);
                time_dimension.set_cumul_var_soft_upper_bound(index, location.time_window_end, penalty);
            }
            None => {
                cumul.set_range(location.time_window_start, location.time_window_end);
            }
        }
    }

    for vehicle_index in 0..request.vehicles.len() as c_int {
        let start = routing.start(vehicle_index);
        let end = routing.end(vehicle_index);
        let start_cumul = time_dimension
            .cumul_var(start)
            .ok_or_else(|| EngineError::ModelBuild("missing start cumul var".to_string()))?;
        let end_cumul = time_dimension
            .cumul_var(end)
            .ok_or_else(|| EngineError::ModelBuild("missing end cumul var".to_string()))?;
        routing.add_variable_minimized_by_finalizer(start_cumul);
        routing.add_variable_minimized_by_finalizer(end_cumul);
    }

    Ok(())
}

/// Optional stops: a location with `unserved_penalty` set may be skipped at
/// that objective cost instead of forcing infeasibility.
pub fn add_optional_stops(routing: &mut RoutingModel, manager: &RoutingIndexManager, request: &SolveRequest) {
    for (node, location) in request.locations.iter().enumerate() {
        if node == request.depot_index {
            continue;
        }
        if let Some(penalty) = location.unserved_penalty {
            let index = manager.node_to_index(&RoutingNodeIndex::new(node as c_int));
            routing.add_disjunction(&[index], penalty);
        }
    }
}

/// Vehicle-allow restrictions, enforced as propagation (the vehicle
/// variable of a restricted node is constrained away from every
/// disallowed vehicle) rather than by removing values from a domain up
/// front, so they compose cleanly with disjunctions on the same node.
pub fn add_vehicle_constraints(routing: &mut RoutingModel, manager: &RoutingIndexManager, request: &SolveRequest) {
    let solver = routing.solver();

    for (node, location) in request.locations.iter().enumerate() {
        let Some(allowed) = &location.allowed_vehicle_ids else {
            continue;
        };
        let index = manager.node_to_index(&RoutingNodeIndex::new(node as c_int));
        let Some(vehicle_var) = routing.vehicle_var(index) else {
            continue;
        };

        for (vehicle_index, vehicle) in request.vehicles.iter().enumerate() {
            if !allowed.contains(&vehicle.id) {
                let constraint = solver.make_non_equality(vehicle_var, vehicle_index as i64);
                solver.add_constraint(constraint);
            }
        }
    }
}

/// Caps a vehicle's end-of-route cumulative time, when `max_duration_minutes`
/// is set.
pub fn add_max_duration(routing: &mut RoutingModel, request: &SolveRequest) -> Result<(), EngineError> {
    let time_dimension = routing
        .get_mutable_dimension(TIME_DIMENSION)
        .ok_or_else(|| EngineError::ModelBuild("time dimension missing".to_string()))?;

    for (vehicle_index, vehicle) in request.vehicles.iter().enumerate() {
        if let Some(max_duration) = vehicle.max_duration_minutes {
            let end_index = routing.end(vehicle_index as c_int);
            let cumul = time_dimension.cumul_var(end_index).ok_or_else(|| {
                EngineError::ModelBuild(format!(
                    "missing end cumul var for vehicle {}",
                    vehicle.id
                ))
            })?;
            cumul.set_max(max_duration);
        }
    }

    Ok(())
}
