//! Expansion of traversals into unit grid moves for playback.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::planner::{RoutePlanner, Traversal};

/// One grid cell the carrier passes through.
///
/// Counters are copied from the parent traversal, so they only change at
/// traversal boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteStep {
    pub x: i32,
    pub y: i32,
    pub remaining_deliveries: usize,
    pub remaining_capacity: u32,
}

/// Unit moves along an L-shaped path: the whole X leg at the starting row,
/// then the whole Y leg at the destination column.
///
/// The start cell is not emitted; the destination cell is.
#[derive(Debug, Clone)]
pub struct Steps {
    x: i32,
    y: i32,
    to_x: i32,
    to_y: i32,
    remaining_deliveries: usize,
    remaining_capacity: u32,
}

impl Steps {
    pub fn new(traversal: &Traversal) -> Self {
        Self {
            x: traversal.from.x,
            y: traversal.from.y,
            to_x: traversal.to.x,
            to_y: traversal.to.y,
            remaining_deliveries: traversal.remaining_deliveries,
            remaining_capacity: traversal.remaining_capacity,
        }
    }

    fn step(&self) -> RouteStep {
        RouteStep {
            x: self.x,
            y: self.y,
            remaining_deliveries: self.remaining_deliveries,
            remaining_capacity: self.remaining_capacity,
        }
    }
}

impl Iterator for Steps {
    type Item = RouteStep;

    fn next(&mut self) -> Option<RouteStep> {
        if self.x != self.to_x {
            self.x += (self.to_x - self.x).signum();
        } else if self.y != self.to_y {
            self.y += (self.to_y - self.y).signum();
        } else {
            return None;
        }
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.x.abs_diff(self.to_x) + self.y.abs_diff(self.to_y)) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}

/// Every unit step of a route, in traversal order.
#[derive(Debug, Clone)]
pub struct RouteSteps {
    planner: RoutePlanner,
    current: Option<Steps>,
}

impl RouteSteps {
    pub fn new(planner: RoutePlanner) -> Self {
        Self {
            planner,
            current: None,
        }
    }
}

impl Iterator for RouteSteps {
    type Item = RouteStep;

    fn next(&mut self) -> Option<RouteStep> {
        loop {
            if let Some(step) = self.current.as_mut().and_then(|steps| steps.next()) {
                return Some(step);
            }
            let traversal = self.planner.next()?;
            self.current = Some(traversal.steps());
        }
    }
}

impl FusedIterator for RouteSteps {}
