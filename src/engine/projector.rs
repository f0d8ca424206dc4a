//! Reads a solved [`Assignment`] back into wire-shaped routes and unserved
//! locations. Distances are read directly from `distance_matrix[a][b]`,
//! never from `RoutingModel::get_arc_cost_for_vehicle`, which would fold
//! each vehicle's fixed cost into the arc cost and corrupt `total_distance`.

use std::ffi::c_int;

use or_tools::constraint_solver::routing::{Assignment, RoutingModel};
use or_tools::constraint_solver::routing_index_manager::RoutingIndexManager;

use crate::domain::{Route, SolveRequest, Stop, UnservedLocation};
use crate::engine::builder::TIME_DIMENSION;

pub struct ProjectedSolution {
    pub total_distance: i64,
    pub routes: Vec<Route>,
    pub unserved_locations: Vec<UnservedLocation>,
}

pub fn project(
    routing: &RoutingModel,
    manager: &RoutingIndexManager,
    assignment: &Assignment,
    request: &SolveRequest,
) -> ProjectedSolution {
    let time_dimension = routing.get_mutable_dimension(TIME_DIMENSION);

    let mut total_distance = 0;
    let mut routes = Vec::with_capacity(request.vehicles.len());
    let mut visited = vec![false; request.locations.len()];
    visited[request.depot_index] = true;

    for (vehicle_index, vehicle) in request.vehicles.iter().enumerate() {
        if !assignment.is_vehicle_used(vehicle_index as c_int) {
            continue;
        }

        let mut stops = Vec::new();
        let mut total_pickup = 0;
        let mut total_delivery = 0;
        let mut route_distance = 0;

        let mut index = routing.start(vehicle_index as c_int);
        loop {
            let node = manager.index_to_node(index).value() as usize;
            let location = &request.locations[node];
            visited[node] = true;

            let arrival_time = time_dimension
                .as_ref()
                .and_then(|dimension| dimension.cumul_var(index))
                .map(|cumul| assignment.value(cumul))
                .unwrap_or(0);

            stops.push(Stop {
                location_id: location.id,
                name: location.name.clone(),
                arrival_time,
                pickup: location.pickup,
                delivery: location.delivery,
            });
            total_pickup += location.pickup;
            total_delivery += location.delivery;

            if routing.is_end(index) {
                break;
            }

            let next_index = assignment.next(index);
            let next_node = manager.index_to_node(next_index).value() as usize;
            route_distance += request.distance_matrix[node][next_node];
            index = next_index;
        }

        total_distance += route_distance;
        routes.push(Route {
            vehicle_id: vehicle.id,
            stops,
            total_distance: route_distance,
            total_pickup,
            total_delivery,
        });
    }

    let unserved_locations = request
        .locations
        .iter()
        .enumerate()
        .filter(|(node, _)| !visited[*node])
        .map(|(_, location)| UnservedLocation {
            location_id: location.id,
            name: location.name.clone(),
        })
        .collect();

    ProjectedSolution {
        total_distance,
        routes,
        unserved_locations,
    }
}
