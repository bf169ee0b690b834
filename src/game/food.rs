//! Food item

use std::collections::HashSet;

use super::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Place food on a random free cell
    pub fn spawn(grid: &Grid, occupied: &HashSet<Cell>) -> Self {
        Self { position: grid.sample_empty_cell(occupied) }
    }

    /// Create food at a specific cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn respawn(&mut self, grid: &Grid, occupied: &HashSet<Cell>) {
        self.position = grid.sample_empty_cell(occupied);
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn is_at(&self, cell: Cell) -> bool {
        self.position == cell
    }
}
