pub mod location;
pub mod request;
pub mod solution;

pub use location::{Location, Vehicle};
pub use request::{RequestError, SolveRequest};
pub use solution::{Payload, Route, Stop, UnservedLocation};
