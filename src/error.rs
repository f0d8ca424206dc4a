//! Errors the engine itself can raise, once a request has already passed
//! shape validation (error kinds 2 and 3 in the error model; kind 1 lives on
//! [`crate::domain::RequestError`] and kind 4, webhook delivery failure, is
//! logged rather than represented here).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The constraint model itself could not be built: a negative matrix
    /// entry or capacity, or a dimension the solver refused to register.
    #[error("{0}")]
    ModelBuild(String),

    /// The model was built but no feasible solution was found within the
    /// time limit.
    #[error("{0}")]
    Infeasible(&'static str),
}
