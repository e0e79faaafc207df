//! Board grid, drop-row lookup, and win detection.
//!
//! Rows are indexed from the top: row 0 is the top row and pieces settle on
//! the highest-numbered empty row of a column.

use log::trace;

use super::player::{Cell, Player};
use crate::config::EngineConfig;

/// Number of same-owned cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Directions scanned from every origin cell, as `(row step, column step)`:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({"row": self.row, "col": self.col})
    }
}

/// Rectangular grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Create an all-empty board with the configured dimensions.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.height, config.width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if position is within grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Get the cell at a position, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    /// Overwrite the cell at a position. Returns `false` if out of bounds.
    ///
    /// This ignores gravity; moves made through the engine always go through
    /// [`Board::find_drop_row`].
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.contains(pos) {
            return false;
        }
        self.cells[pos.row * self.width + pos.col] = cell;
        true
    }

    /// Check if a column has no empty cell. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_drop_row(col).is_none()
    }

    /// Row of the lowest empty cell in a column, scanning from the bottom row up.
    ///
    /// Returns `None` if the column is full or out of range.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty())
    }

    /// Columns that still have at least one empty cell, ascending.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.len() - self.count(Cell::Empty)
    }

    /// First winning run for `player`, scanning origins in row-major order.
    ///
    /// Each origin is checked in all four forward directions, which covers
    /// every line of four on the board.
    pub fn winning_run(&self, player: Player) -> Option<[Position; CONNECT]> {
        let target = player.cell();
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(run) = self.run_from(row, col, dr, dc) {
                        if run.iter().all(|&p| self.get(p) == Some(target)) {
                            trace!("winning run for {player} starting at ({row}, {col})");
                            return Some(run);
                        }
                    }
                }
            }
        }
        None
    }

    /// Check if `player` owns any line of four.
    pub fn has_win(&self, player: Player) -> bool {
        self.winning_run(player).is_some()
    }

    /// The run of positions from an origin in one direction, or `None` if any
    /// step leaves the grid.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<[Position; CONNECT]> {
        let mut run = [Position::new(row, col); CONNECT];
        for (step, slot) in run.iter_mut().enumerate().skip(1) {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            let pos = Position::new(r, c);
            if !self.contains(pos) {
                return None;
            }
            *slot = pos;
        }
        Some(run)
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Convert grid to JSON as rows of 0/1/2.
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .rows()
            .map(|row| {
                let cells: Vec<u8> = row.iter().map(|c| c.as_u8()).collect();
                serde_json::json!(cells)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
