//! Board geometry and cell storage
//!
//! The grid is an arena: cells never move, only the symbol a cell carries
//! does. A cell is addressed by its index `row * columns + col`, and every
//! neighbour question goes through (row, col) so that indices never wrap
//! across a row boundary.

use crate::error::ConfigError;
use crate::source::SymbolSource;
use crate::symbol::{Palette, Symbol};
use std::fmt;

/// Largest number of cells a grid may hold
pub const MAX_CELLS: usize = 1 << 20;

/// Number of cells of a `rows` x `columns` grid, checked against `MAX_CELLS`
pub fn cell_count(rows: usize, columns: usize) -> Result<usize, ConfigError> {
    if rows == 0 || columns == 0 {
        return Err(ConfigError::InvalidDimensions { rows, columns });
    }
    match rows.checked_mul(columns) {
        Some(count) if count <= MAX_CELLS => Ok(count),
        _ => Err(ConfigError::TooLarge {
            rows,
            columns,
            max: MAX_CELLS,
        }),
    }
}

/// What a cell currently carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Symbol),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Filled(symbol) => Some(*symbol),
            Cell::Empty => None,
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::Filled(symbol)
    }
}

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Row-major, row 0 is the bottom row, rows increase upward
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of empty cells
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        let count = cell_count(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; count],
        })
    }

    /// Create a grid where every cell is drawn independently from `palette`
    pub fn filled(
        rows: usize,
        columns: usize,
        palette: &Palette,
        source: &mut impl SymbolSource,
    ) -> Result<Self, ConfigError> {
        let mut grid = Self::new(rows, columns)?;
        grid.fill(palette, source);
        Ok(grid)
    }

    /// Create a grid from row-major cells, bottom row first
    pub fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Self, ConfigError> {
        let mut grid = Self::new(rows, columns)?;
        if cells.len() != grid.len() {
            return Err(ConfigError::CellCountMismatch {
                expected: grid.len(),
                actual: cells.len(),
            });
        }
        grid.cells = cells;
        Ok(grid)
    }

    /// Overwrite every cell with a fresh draw
    pub fn fill(&mut self, palette: &Palette, source: &mut impl SymbolSource) {
        for cell in &mut self.cells {
            *cell = Cell::Filled(source.next_symbol(palette));
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Index of (row, col), None if out of bounds
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(row * self.columns + col)
    }

    /// (row, col) of an index, None if out of bounds
    pub fn row_col_of(&self, index: usize) -> Option<(usize, usize)> {
        if !self.contains(index) {
            return None;
        }
        Some((index / self.columns, index % self.columns))
    }

    /// Get the cell at (row, col)
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col).map(|index| self.cells[index])
    }

    /// Get the cell at an index
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Symbol at an index, None for empty or out of bounds cells
    pub fn symbol(&self, index: usize) -> Option<Symbol> {
        self.get(index).and_then(|cell| cell.symbol())
    }

    /// Set a cell. Returns false if out of bounds
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Set the cell at (row, col). Returns false if out of bounds
    pub fn set_at(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index_of(row, col) {
            Some(index) => self.set(index, cell),
            None => false,
        }
    }

    /// Exchange what two cells carry. Returns false if either is out of bounds
    pub fn swap_cells(&mut self, a: usize, b: usize) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.cells.swap(a, b);
        true
    }

    /// Orthogonal neighbours: same row one column apart, or same column one
    /// row apart
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        let (Some((row_a, col_a)), Some((row_b, col_b))) = (self.row_col_of(a), self.row_col_of(b))
        else {
            return false;
        };
        (row_a == row_b && col_a.abs_diff(col_b) == 1)
            || (col_a == col_b && row_a.abs_diff(row_b) == 1)
    }

    /// Neighbour to the right, if any
    pub fn right_of(&self, index: usize) -> Option<usize> {
        let (row, col) = self.row_col_of(index)?;
        self.index_of(row, col + 1)
    }

    /// Neighbour above, if any
    pub fn above(&self, index: usize) -> Option<usize> {
        let (row, col) = self.row_col_of(index)?;
        self.index_of(row + 1, col)
    }

    /// Cells of one column, bottom to top
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.rows)
            .filter_map(|row| self.cell_at(row, col))
            .collect()
    }

    /// All cells, row-major from the bottom row
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

impl fmt::Display for Grid {
    /// Top row first, `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let start = row * self.columns;
            for cell in &self.cells[start..start + self.columns] {
                match cell {
                    Cell::Filled(symbol) => write!(f, "{}", symbol.glyph())?,
                    Cell::Empty => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
