//! Capacity-aware greedy route planner.
//!
//! Starting at the depot, the carrier repeatedly walks to the nearest node it
//! has not yet reached over an untraversed edge, spending one unit of bag
//! capacity per delivery. When the bag is empty it walks straight back to the
//! depot to refill before continuing. This is a nearest-neighbour heuristic,
//! not an optimal tour.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::graph::{Edge, Graph, Node};
use crate::steps::{RouteSteps, Steps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalKind {
    Delivery,
    Refuel,
}

/// One edge walk chosen by the planner.
///
/// The counters are the values in effect when the carrier set off, before
/// this traversal's delivery (if any) was counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    pub from: Node,
    pub to: Node,
    pub weight: u32,
    pub kind: TraversalKind,
    pub remaining_deliveries: usize,
    pub remaining_capacity: u32,
}

impl Traversal {
    /// Unit grid moves along this traversal, X axis first.
    pub fn steps(&self) -> Steps {
        Steps::new(self)
    }
}

/// Lazily plans a route over a graph, one traversal per `next()`.
///
/// The planner owns its working state and cannot be restarted.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    /// Full edge set, used to find the way back to the depot.
    edges: Vec<Edge>,
    /// Edges not yet walked, in original order.
    pool: Vec<Edge>,
    depot: Node,
    current: Node,
    capacity: u32,
    bag: u32,
    remaining_deliveries: usize,
    stalled: bool,
}

impl RoutePlanner {
    /// Prepares a plan starting at the graph's depot.
    ///
    /// Fails only when the walk could not even start: without a depot or with
    /// zero capacity. Drop point presence and depot uniqueness are the
    /// caller's business (see [`crate::request::PlanRequest::validate`]).
    pub fn new(graph: &Graph, capacity: u32) -> Result<Self, PlanError> {
        let depot = graph.depot().ok_or(PlanError::MissingDepot)?;
        if capacity == 0 {
            return Err(PlanError::InvalidCapacity {
                input: capacity.to_string(),
            });
        }

        Ok(Self {
            edges: graph.edges().to_vec(),
            pool: graph.edges().to_vec(),
            depot,
            current: depot,
            capacity,
            bag: capacity,
            remaining_deliveries: graph.delivery_count(),
            stalled: false,
        })
    }

    pub fn current(&self) -> Node {
        self.current
    }

    pub fn remaining_deliveries(&self) -> usize {
        self.remaining_deliveries
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.bag
    }

    /// Expands every remaining traversal into unit steps.
    pub fn steps(self) -> RouteSteps {
        RouteSteps::new(self)
    }

    /// Runs the planner to completion.
    pub fn into_plan(self) -> RoutePlan {
        RoutePlan {
            traversals: self.collect(),
        }
    }

    /// Nearest untraversed edge touching the current node. Ties go to the
    /// edge that comes first in the pool.
    fn nearest_pool_edge(&self) -> Option<Edge> {
        self.pool
            .iter()
            .filter(|edge| edge.touches(self.current))
            .min_by_key(|edge| edge.weight)
            .copied()
    }

    /// Edge back to the depot, taken from the full edge set.
    ///
    /// When the carrier already stands on the depot this is simply the first
    /// edge touching it, so the refill walk leads away again.
    fn depot_edge(&self) -> Option<Edge> {
        self.edges
            .iter()
            .find(|edge| edge.connects(self.current, self.depot))
            .copied()
    }

    fn consume(&mut self, edge: &Edge) {
        if let Some(position) = self.pool.iter().position(|candidate| candidate == edge) {
            self.pool.remove(position);
        }
    }

    fn stall(&mut self, kind: TraversalKind) -> Option<Traversal> {
        tracing::warn!(
            current = ?self.current,
            remaining_deliveries = self.remaining_deliveries,
            ?kind,
            "no edge available from current node, route ends early"
        );
        self.stalled = true;
        None
    }
}

impl Iterator for RoutePlanner {
    type Item = Traversal;

    fn next(&mut self) -> Option<Traversal> {
        if self.stalled || self.remaining_deliveries == 0 {
            return None;
        }

        let (remaining_deliveries, remaining_capacity) = (self.remaining_deliveries, self.bag);

        let (edge, kind) = if self.bag == 0 {
            let Some(edge) = self.depot_edge() else {
                return self.stall(TraversalKind::Refuel);
            };
            self.bag = self.capacity;
            (edge, TraversalKind::Refuel)
        } else {
            let Some(edge) = self.nearest_pool_edge() else {
                return self.stall(TraversalKind::Delivery);
            };
            self.bag -= 1;
            self.remaining_deliveries -= 1;
            (edge, TraversalKind::Delivery)
        };

        self.consume(&edge);

        let from = self.current;
        let Some(to) = edge.other_end(from) else {
            return self.stall(kind);
        };
        self.current = to;

        tracing::debug!(
            ?kind,
            from_x = from.x,
            from_y = from.y,
            to_x = to.x,
            to_y = to.y,
            weight = edge.weight,
            remaining_deliveries,
            remaining_capacity,
            "traversal chosen"
        );

        Some(Traversal {
            from,
            to,
            weight: edge.weight,
            kind,
            remaining_deliveries,
            remaining_capacity,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stalled {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl FusedIterator for RoutePlanner {}

/// Eagerly computed route, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub traversals: Vec<Traversal>,
}

impl RoutePlan {
    /// Sum of Manhattan lengths over all traversals.
    pub fn total_distance(&self) -> u32 {
        self.traversals.iter().map(|traversal| traversal.weight).sum()
    }

    pub fn refuel_count(&self) -> usize {
        self.traversals
            .iter()
            .filter(|traversal| traversal.kind == TraversalKind::Refuel)
            .count()
    }

    pub fn delivery_count(&self) -> usize {
        self.traversals.len() - self.refuel_count()
    }

    /// All unit steps of the plan, X axis first within each traversal.
    pub fn steps(&self) -> impl Iterator<Item = crate::steps::RouteStep> + '_ {
        self.traversals.iter().flat_map(Traversal::steps)
    }
}
