//! Named grid layouts.
//!
//! `.` empty, `D` depot, `P` drop point.

use postman_route::grid::CellGrid;

/// A layout with a short name for assertion messages.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: &'static str,
    pub text: &'static str,
}

impl Layout {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub fn grid(&self) -> CellGrid {
        match self.text.parse() {
            Ok(grid) => grid,
            Err(err) => panic!("layout {} does not parse: {}", self.name, err),
        }
    }
}

// ============================================================================
// Small scenarios
// ============================================================================

/// Depot at (0,0), one drop point three rows down.
pub const STRAIGHT_DOWN: Layout = Layout::new(
    "straight_down",
    "
    D
    .
    .
    P
    ",
);

/// Depot at (0,0), drop points at (1,0) and (3,0).
pub const ROW_OF_TWO: Layout = Layout::new("row_of_two", "DP.P");

/// Depot between a near and a far drop point. The greedy walk ends on the
/// depot and never reaches (9,0).
pub const DEPOT_IN_THE_MIDDLE: Layout = Layout::new("depot_in_the_middle", "P..DP....P");

/// Same as above plus a far corner, so the walk keeps going after landing on
/// the depot.
pub const DEPOT_IN_THE_MIDDLE_WITH_CORNER: Layout = Layout::new(
    "depot_in_the_middle_with_corner",
    "
    P..DP....P
    ..........
    ..........
    ..........
    ..........
    ..........
    ..........
    ..........
    ..........
    .........P
    ",
);

// ============================================================================
// Editor-sized boards
// ============================================================================

pub const SCATTERED: Layout = Layout::new(
    "scattered",
    "
    P . . . . . . . P
    . . . . . . . . .
    . . P . . . . . .
    . . . . . . P . .
    . . . . D . . . .
    . . . . . . . . .
    . P . . . . . P .
    . . . . . . . . .
    P . . . P . . . P
    ",
);

pub const CORNER_DEPOT: Layout = Layout::new(
    "corner_depot",
    "
    D . . . P . . . .
    . . . . . . . . .
    . . . . . . . . P
    . P . . . . . . .
    . . . . . . . . .
    . . . . . P . . .
    . . . . . . . . .
    . . P . . . . . .
    . . . . . . . P .
    ",
);

pub const DENSE_CLUSTER: Layout = Layout::new(
    "dense_cluster",
    "
    . . . . . . . . .
    . . . . . . . . .
    . . P P P . . . .
    . . P D P . . . .
    . . P P P . . . .
    . . . . . . . . .
    . . . . . . . . P
    . . . . . . . . .
    . . . . . . . . .
    ",
);

pub const ALL_BOARDS: &[Layout] = &[SCATTERED, CORNER_DEPOT, DENSE_CLUSTER];
