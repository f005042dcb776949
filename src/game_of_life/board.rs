//! Board representation for one generation

use super::bit_row::BitRow;
use super::patterns::Pattern;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One generation of a world: `rows` bit rows, each `columns` wide.
///
/// Rows and columns are 1-based. Coordinates outside the board are dead on
/// read and dropped on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: usize,
    rows: Vec<BitRow>,
}

impl Board {
    /// Create an all-dead board
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows: vec![BitRow::new(columns); rows],
        }
    }

    /// Assemble a board from already computed rows
    pub fn from_rows(columns: usize, rows: Vec<BitRow>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.width() != columns {
                anyhow::bail!("Row {} has width {}, expected {}", i + 1, row.width(), columns);
            }
        }
        Ok(Self { columns, rows })
    }

    /// Create a board from a 2D boolean array, top row first
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Board cannot be empty");
        }

        let columns = cells[0].len();
        if columns == 0 {
            anyhow::bail!("Board width cannot be zero");
        }

        let mut board = Self::empty(cells.len(), columns);
        for (r, line) in cells.iter().enumerate() {
            if line.len() != columns {
                anyhow::bail!("Row {} has length {}, expected {}", r + 1, line.len(), columns);
            }
            for (c, &alive) in line.iter().enumerate() {
                if alive {
                    board.set_cell(r + 1, c + 1);
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Borrow row `r`, or `None` outside `[1, rows]`
    pub fn row(&self, r: usize) -> Option<&BitRow> {
        r.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    pub fn get_cell(&self, r: usize, c: usize) -> bool {
        self.row(r).is_some_and(|row| row.get(c))
    }

    pub fn set_cell(&mut self, r: usize, c: usize) {
        if let Some(row) = r.checked_sub(1).and_then(|i| self.rows.get_mut(i)) {
            row.set(c);
        }
    }

    /// OR a row into row `r`
    pub fn merge_row(&mut self, r: usize, other: &BitRow) {
        if let Some(row) = r.checked_sub(1).and_then(|i| self.rows.get_mut(i)) {
            row.or(other);
        }
    }

    /// OR-merge a set of relative coordinates, offset by `origin`, into the board.
    /// Cells that land outside the board, including offsets past `usize::MAX`,
    /// are dropped.
    pub fn stamp(&mut self, coords: &[(usize, usize)], origin: (usize, usize)) {
        let (origin_row, origin_col) = origin;
        for &(dr, dc) in coords {
            if let (Some(r), Some(c)) = (origin_row.checked_add(dr), origin_col.checked_add(dc)) {
                self.set_cell(r, c);
            }
        }
    }

    /// Stamp a library pattern at `origin`
    pub fn stamp_pattern(&mut self, pattern: Pattern, origin: (usize, usize)) {
        self.stamp(pattern.offsets(), origin);
    }

    pub fn living_count(&self) -> usize {
        self.rows.iter().map(BitRow::popcount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(BitRow::is_empty)
    }

    /// All live cells as 1-based `(row, col)` pairs, row-major
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.live_columns().map(move |c| (i + 1, c)))
            .collect()
    }
}
