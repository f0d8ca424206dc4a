//! Search driver: one cheapest-arc-first-solution, guided-local-search
//! pass, bounded by the request's wall-clock time limit. No retries — if
//! the model is infeasible within the limit, the caller reports it as
//! such rather than loosening constraints and trying again.

use std::time::Duration;

use or_tools::constraint_solver::routing::{Assignment, RoutingModel, RoutingModelStatus};
use or_tools::constraint_solver::routing_enums::{FirstSolutionStrategy, LocalSearchMetaheuristic};
use or_tools::constraint_solver::routing_parameters::RoutingSearchParameters;

use crate::domain::SolveRequest;
use crate::error::EngineError;

pub fn solve<'manager, 'model>(
    routing: &'model RoutingModel<'manager>,
    request: &SolveRequest,
) -> Result<Assignment<'manager, 'model>, EngineError> {
    let mut search_parameters = RoutingSearchParameters::new();
    search_parameters.set_first_solution_strategy(FirstSolutionStrategy::PathCheapestArc);
    search_parameters.set_local_search_metaheuristic(LocalSearchMetaheuristic::GuidedLocalSearch);
    search_parameters.set_time_limit(Duration::from_secs(request.time_limit_seconds));

    let assignment = routing.solve_with_parameters(&search_parameters);

    if !assignment.has_contents() {
        return Err(EngineError::Infeasible(
            "time windows and/or capacity may be too tight",
        ));
    }

    match assignment.status() {
        RoutingModelStatus::RoutingSuccess
        | RoutingModelStatus::RoutingPartialSuccessLocalOptimumNotReached => Ok(assignment),
        _ => Err(EngineError::Infeasible(
            "time windows and/or capacity may be too tight",
        )),
    }
}
