//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Concrete apps (grid editors, renderers)
//! should implement them for their own data models.

use serde::{Deserialize, Serialize};

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Empty,
    Depot,
    DropPoint,
    /// Display-only marker for the carrier during playback. Ignored by planning.
    Carrier,
}

impl CellStatus {
    /// Whether the cell becomes a node of the planning graph.
    pub fn is_node(self) -> bool {
        matches!(self, CellStatus::Depot | CellStatus::DropPoint)
    }
}

/// A read-only snapshot of a rectangular grid of cells.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row, both counted
/// from the top-left corner.
pub trait GridSnapshot {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Cell at `(x, y)`, or `None` when the position lies outside the grid.
    fn cell(&self, x: usize, y: usize) -> Option<CellStatus>;
}

/// Row-major nested vectors. Rows may be ragged; missing cells read as `None`.
impl GridSnapshot for Vec<Vec<CellStatus>> {
    fn width(&self) -> usize {
        self.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn height(&self) -> usize {
        self.len()
    }

    fn cell(&self, x: usize, y: usize) -> Option<CellStatus> {
        self.get(y).and_then(|row| row.get(x)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_depot_and_drop_point_are_nodes() {
        assert!(CellStatus::Depot.is_node());
        assert!(CellStatus::DropPoint.is_node());
        assert!(!CellStatus::Empty.is_node());
        assert!(!CellStatus::Carrier.is_node());
    }

    #[test]
    fn test_nested_vec_ragged_rows() {
        let rows = vec![
            vec![CellStatus::Depot],
            vec![CellStatus::Empty, CellStatus::Empty, CellStatus::DropPoint],
        ];
        assert_eq!(rows.width(), 3);
        assert_eq!(rows.height(), 2);
        assert_eq!(rows.cell(2, 1), Some(CellStatus::DropPoint));
        assert_eq!(rows.cell(2, 0), None);
        assert_eq!(rows.cell(0, 5), None);
    }
}
