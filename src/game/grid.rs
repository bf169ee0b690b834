//! Board bounds and free-cell sampling

use std::collections::HashSet;

use log::warn;

use super::direction::Direction;
use crate::error::ConfigError;

/// A position on the board, in cells
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction` (may be off the board)
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell { x: self.x + dx, y: self.y + dy }
    }
}

/// Largest board side, in cells
pub const MAX_SIDE: i32 = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(ConfigError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn center(&self) -> Cell {
        Cell { x: self.width / 2, y: self.height / 2 }
    }

    pub fn is_outside(&self, c: Cell) -> bool {
        c.x < 0 || c.y < 0 || c.x >= self.width || c.y >= self.height
    }

    /// Pick a random cell that is not in `occupied`.
    ///
    /// Random draws are bounded by the number of cells on the board. When
    /// they all miss, a row-major scan takes the first free cell instead.
    /// A completely full board yields the origin, which is occupied.
    pub fn sample_empty_cell(&self, occupied: &HashSet<Cell>) -> Cell {
        for _ in 0..self.cell_count() {
            let x = macroquad::rand::gen_range(0, self.width);
            let y = macroquad::rand::gen_range(0, self.height);
            let cell = Cell { x, y };
            if !occupied.contains(&cell) {
                return cell;
            }
        }

        if let Some(cell) = self.cells().find(|c| !occupied.contains(c)) {
            return cell;
        }

        warn!(
            "No free cell left on the {}x{} board, placing food at the origin",
            self.width, self.height
        );
        Cell { x: 0, y: 0 }
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }
}
