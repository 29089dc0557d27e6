//! Owned grid snapshots.
//!
//! `CellGrid` is the concrete grid the planner is usually fed from. It can be
//! built cell by cell, from nested rows, or parsed from a compact text layout:
//!
//! ```text
//! D . . P
//! . . . .
//! . P . .
//! ```
//!
//! `.` is empty, `D` a depot, `P` a drop point and `C` the carrier marker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::traits::{CellStatus, GridSnapshot};

/// Side length of the board drawn by the grid editor.
pub const DEFAULT_GRID_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<CellStatus>,
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
    }
}

impl CellGrid {
    /// Creates an all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellStatus::Empty; width * height],
        }
    }

    /// Builds a grid from equally long rows, top row first.
    pub fn from_rows(rows: Vec<Vec<CellStatus>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);

        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellStatus> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrites a cell and returns its previous status.
    pub fn set(&mut self, x: usize, y: usize, status: CellStatus) -> Result<CellStatus, GridError> {
        let idx = self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        Ok(std::mem::replace(&mut self.cells[idx], status))
    }

    /// Number of cells with the given status.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|cell| **cell == status).count()
    }

    /// Returns a copy of the grid with the carrier drawn at `(x, y)`.
    ///
    /// Positions outside the grid leave the copy unchanged.
    pub fn with_carrier_at(&self, x: usize, y: usize) -> Self {
        let mut grid = self.clone();
        if let Some(idx) = grid.index(x, y) {
            grid.cells[idx] = CellStatus::Carrier;
        }
        grid
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl GridSnapshot for CellGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, x: usize, y: usize) -> Option<CellStatus> {
        self.get(x, y)
    }
}

impl FromStr for CellGrid {
    type Err = GridError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (line_idx, line) in layout.lines().enumerate() {
            let mut row = Vec::new();
            for (column, symbol) in line.chars().enumerate() {
                let status = match symbol {
                    '.' => CellStatus::Empty,
                    'D' => CellStatus::Depot,
                    'P' => CellStatus::DropPoint,
                    'C' => CellStatus::Carrier,
                    c if c.is_whitespace() => continue,
                    _ => {
                        return Err(GridError::UnknownCell {
                            symbol,
                            line: line_idx + 1,
                            column: column + 1,
                        });
                    }
                };
                row.push(status);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        Self::from_rows(rows)
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line = row
                .iter()
                .map(|cell| match cell {
                    CellStatus::Empty => '.',
                    CellStatus::Depot => 'D',
                    CellStatus::DropPoint => 'P',
                    CellStatus::Carrier => 'C',
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
