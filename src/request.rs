//! Caller-side checks that must pass before a route is planned.

use crate::error::PlanError;
use crate::graph::Graph;
use crate::planner::RoutePlanner;
use crate::steps::RouteSteps;
use crate::traits::{CellStatus, GridSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanRequest {
    /// Deliveries the carrier can make before refilling at the depot.
    pub capacity: u32,
}

impl PlanRequest {
    pub fn new(capacity: u32) -> Result<Self, PlanError> {
        if capacity == 0 {
            return Err(PlanError::InvalidCapacity {
                input: capacity.to_string(),
            });
        }
        Ok(Self { capacity })
    }

    /// Parses a capacity typed by the user. Only whole numbers above zero pass.
    pub fn parse(input: &str) -> Result<Self, PlanError> {
        let capacity = input
            .trim()
            .parse::<u32>()
            .map_err(|_| PlanError::InvalidCapacity {
                input: input.to_string(),
            })?;
        if capacity == 0 {
            return Err(PlanError::InvalidCapacity {
                input: input.to_string(),
            });
        }
        Ok(Self { capacity })
    }

    /// Checks the grid holds exactly one depot and at least one drop point.
    pub fn validate<G: GridSnapshot + ?Sized>(&self, grid: &G) -> Result<(), PlanError> {
        let mut depots = 0;
        let mut drop_points = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                match grid.cell(x, y) {
                    Some(CellStatus::Depot) => depots += 1,
                    Some(CellStatus::DropPoint) => drop_points += 1,
                    _ => {}
                }
            }
        }

        match (depots, drop_points) {
            (0, _) => Err(PlanError::MissingDepot),
            (_, 0) => Err(PlanError::MissingDropPoint),
            (1, _) => Ok(()),
            (count, _) => Err(PlanError::MultipleDepots { count }),
        }
    }
}

/// Validates the request, builds the graph and returns the lazy step stream.
pub fn plan_route<G: GridSnapshot + ?Sized>(
    grid: &G,
    request: &PlanRequest,
) -> Result<RouteSteps, PlanError> {
    request.validate(grid)?;
    let graph = Graph::from_grid(grid);
    tracing::debug!(
        nodes = graph.nodes().len(),
        capacity = request.capacity,
        "planning route"
    );
    Ok(RoutePlanner::new(&graph, request.capacity)?.steps())
}
