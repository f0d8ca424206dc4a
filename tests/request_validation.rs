//! Request-shape validation: the kind-1 errors caught synchronously at
//! intake, before any engine call.

use vrp_engine::domain::{Location, RequestError, SolveRequest, Vehicle};

fn location(id: i64) -> Location {
    Location {
        id,
        name: None,
        lat: 0.0,
        lng: 0.0,
        pickup: 0,
        delivery: 0,
        service_time: 0,
        time_window_start: 0,
        time_window_end: 1440,
        unserved_penalty: None,
        late_penalty: None,
        allowed_vehicle_ids: None,
    }
}

fn vehicle(id: i64) -> Vehicle {
    Vehicle {
        id,
        capacity: 100,
        fixed_cost: 0,
        max_duration_minutes: None,
    }
}

fn valid_request() -> SolveRequest {
    SolveRequest {
        compute_id: 1,
        webhook_url: None,
        depot_index: 0,
        locations: vec![location(0), location(1)],
        vehicles: vec![vehicle(1)],
        distance_matrix: vec![vec![0, 10], vec![10, 0]],
        time_matrix: vec![vec![0, 5], vec![5, 0]],
        time_limit_seconds: 30,
    }
}

#[test]
fn accepts_a_well_formed_request() {
    assert!(valid_request().validate_shape().is_ok());
}

#[test]
fn rejects_a_single_location() {
    let mut request = valid_request();
    request.locations.truncate(1);
    request.distance_matrix = vec![vec![0]];
    request.time_matrix = vec![vec![0]];
    assert_eq!(request.validate_shape(), Err(RequestError::TooFewLocations));
}

#[test]
fn rejects_an_empty_fleet() {
    let mut request = valid_request();
    request.vehicles.clear();
    assert_eq!(request.validate_shape(), Err(RequestError::NoVehicles));
}

#[test]
fn rejects_a_depot_index_out_of_range() {
    let mut request = valid_request();
    request.depot_index = 5;
    assert_eq!(
        request.validate_shape(),
        Err(RequestError::DepotOutOfRange { depot_index: 5, location_count: 2 })
    );
}

#[test]
fn rejects_a_ragged_distance_matrix() {
    let mut request = valid_request();
    request.distance_matrix = vec![vec![0, 10, 999], vec![10, 0]];
    assert_eq!(
        request.validate_shape(),
        Err(RequestError::DistanceMatrixRowLen { row: 0, expected: 2, actual: 3 })
    );
}

#[test]
fn rejects_duplicate_location_ids() {
    let mut request = valid_request();
    request.locations[1].id = 0;
    assert_eq!(request.validate_shape(), Err(RequestError::DuplicateLocationId(0)));
}

#[test]
fn rejects_unknown_allowed_vehicle_ids() {
    let mut request = valid_request();
    request.locations[1].allowed_vehicle_ids = Some(vec![999]);
    assert_eq!(
        request.validate_shape(),
        Err(RequestError::UnknownAllowedVehicleId { location_id: 1, vehicle_id: 999 })
    );
}

#[test]
fn rejects_an_inverted_time_window() {
    let mut request = valid_request();
    request.locations[1].time_window_start = 100;
    request.locations[1].time_window_end = 10;
    assert_eq!(request.validate_shape(), Err(RequestError::InvalidTimeWindow(1)));
}
