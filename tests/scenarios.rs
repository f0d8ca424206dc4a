//! End-to-end solve scenarios exercising capacity, time windows (hard and
//! soft), optional stops, and vehicle-allow restrictions.

use vrp_engine::domain::{Location, Payload, SolveRequest, Vehicle};
use vrp_engine::engine::Engine;

fn location(id: i64, pickup: i64, delivery: i64, window_start: i64, window_end: i64) -> Location {
    Location {
        id,
        name: None,
        lat: 0.0,
        lng: 0.0,
        pickup,
        delivery,
        service_time: 0,
        time_window_start: window_start,
        time_window_end: window_end,
        unserved_penalty: None,
        late_penalty: None,
        allowed_vehicle_ids: None,
    }
}

fn vehicle(id: i64, capacity: i64) -> Vehicle {
    Vehicle {
        id,
        capacity,
        fixed_cost: 0,
        max_duration_minutes: None,
    }
}

fn base_request() -> SolveRequest {
    SolveRequest {
        compute_id: 1,
        webhook_url: None,
        depot_index: 0,
        locations: Vec::new(),
        vehicles: Vec::new(),
        distance_matrix: Vec::new(),
        time_matrix: Vec::new(),
        time_limit_seconds: 5,
    }
}

#[test]
fn scenario_a_trivial_feasibility() {
    let mut request = base_request();
    request.locations = vec![location(0, 0, 0, 0, 1440), location(1, 0, 0, 0, 60)];
    request.vehicles = vec![vehicle(1, 100)];
    request.distance_matrix = vec![vec![0, 10], vec![10, 0]];
    request.time_matrix = vec![vec![0, 5], vec![5, 0]];

    let payload = Engine::solve(1, &request);
    match payload {
        Payload::Success { total_distance, routes, unserved_locations, .. } => {
            assert_eq!(total_distance, 20);
            assert_eq!(routes.len(), 1);
            assert!(unserved_locations.is_empty());
            let stops: Vec<i64> = routes[0].stops.iter().map(|s| s.location_id).collect();
            assert_eq!(stops, vec![0, 1, 0]);
        }
        Payload::Error { message, .. } => panic!("expected success, got error: {message}"),
    }
}

#[test]
fn scenario_b_capacity_forces_two_vehicles() {
    let mut request = base_request();
    request.locations = vec![
        location(0, 0, 0, 0, 1440),
        location(1, 60, 0, 0, 1440),
        location(2, 60, 0, 0, 1440),
    ];
    request.vehicles = vec![vehicle(1, 100), vehicle(2, 100)];
    request.distance_matrix = vec![vec![0, 10, 10], vec![10, 0, 10], vec![10, 10, 0]];
    request.time_matrix = vec![vec![0, 5, 5], vec![5, 0, 5], vec![5, 5, 0]];

    let payload = Engine::solve(2, &request);
    match payload {
        Payload::Success { routes, unserved_locations, .. } => {
            assert_eq!(routes.len(), 2);
            assert!(unserved_locations.is_empty());
            for route in &routes {
                let customer_count = route.stops.iter().filter(|s| s.location_id != 0).count();
                assert_eq!(customer_count, 1);
            }
        }
        Payload::Error { message, .. } => panic!("expected success, got error: {message}"),
    }
}

#[test]
fn scenario_c_tight_hard_windows_are_infeasible() {
    let mut request = base_request();
    request.locations = vec![
        location(0, 0, 0, 0, 1440),
        location(1, 0, 0, 0, 30),
        location(2, 0, 0, 0, 30),
    ];
    request.vehicles = vec![vehicle(1, 100)];
    request.distance_matrix = vec![vec![0, 20, 20], vec![20, 0, 35], vec![20, 35, 0]];
    request.time_matrix = vec![vec![0, 20, 20], vec![20, 0, 35], vec![20, 35, 0]];

    let payload = Engine::solve(3, &request);
    match payload {
        Payload::Error { .. } => {}
        Payload::Success { .. } => panic!("expected infeasibility"),
    }
}

#[test]
fn scenario_d_soft_window_permits_lateness() {
    let mut request = base_request();
    request.locations = vec![
        location(0, 0, 0, 0, 1440),
        location(1, 0, 0, 0, 30),
        location(2, 0, 0, 0, 30),
    ];
    request.locations[2].late_penalty = Some(1);
    request.vehicles = vec![vehicle(1, 100)];
    request.distance_matrix = vec![vec![0, 20, 20], vec![20, 0, 35], vec![20, 35, 0]];
    request.time_matrix = vec![vec![0, 20, 20], vec![20, 0, 35], vec![20, 35, 0]];

    let payload = Engine::solve(4, &request);
    match payload {
        Payload::Success { routes, .. } => {
            let stop_two = routes
                .iter()
                .flat_map(|r| r.stops.iter())
                .find(|s| s.location_id == 2)
                .expect("customer 2 should be routed");
            assert!(stop_two.arrival_time > 30);
        }
        Payload::Error { message, .. } => panic!("expected success, got error: {message}"),
    }
}

#[test]
fn scenario_e_optional_stop_dropped() {
    let mut request = base_request();
    request.locations = vec![
        location(0, 0, 0, 0, 1440),
        location(1, 0, 0, 0, 1440),
        location(2, 0, 0, 0, 1440),
    ];
    request.locations[2].unserved_penalty = Some(50);
    request.vehicles = vec![vehicle(1, 100)];
    request.vehicles[0].fixed_cost = 1000;
    request.distance_matrix = vec![vec![0, 10, 500], vec![10, 0, 500], vec![500, 500, 0]];
    request.time_matrix = vec![vec![0, 10, 500], vec![10, 0, 500], vec![500, 500, 0]];

    let payload = Engine::solve(5, &request);
    match payload {
        Payload::Success { routes, unserved_locations, .. } => {
            assert_eq!(unserved_locations.len(), 1);
            assert_eq!(unserved_locations[0].location_id, 2);
            let served: Vec<i64> = routes
                .iter()
                .flat_map(|r| r.stops.iter())
                .map(|s| s.location_id)
                .filter(|id| *id != 0)
                .collect();
            assert_eq!(served, vec![1]);
        }
        Payload::Error { message, .. } => panic!("expected success, got error: {message}"),
    }
}

#[test]
fn scenario_f_vehicle_allow_restriction() {
    let mut request = base_request();
    request.locations = vec![
        location(0, 0, 0, 0, 1440),
        location(1, 0, 0, 0, 1440),
        location(2, 0, 0, 0, 1440),
    ];
    request.locations[1].allowed_vehicle_ids = Some(vec![20]);
    request.vehicles = vec![vehicle(10, 100), vehicle(20, 100)];
    request.distance_matrix = vec![vec![0, 10, 10], vec![10, 0, 10], vec![10, 10, 0]];
    request.time_matrix = vec![vec![0, 10, 10], vec![10, 0, 10], vec![10, 10, 0]];

    let payload = Engine::solve(6, &request);
    match payload {
        Payload::Success { routes, .. } => {
            let route_with_customer_one = routes
                .iter()
                .find(|r| r.stops.iter().any(|s| s.location_id == 1))
                .expect("customer 1 should be routed");
            assert_eq!(route_with_customer_one.vehicle_id, 20);
        }
        Payload::Error { message, .. } => panic!("expected success, got error: {message}"),
    }
}
