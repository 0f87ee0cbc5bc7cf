//! A dense, growable two-dimensional store of optional cells.
//!
//! Cells are addressed by column `x` and row `y`, both 0-based. A grid starts
//! empty and grows one column or row at a time; unset cells read back as
//! `None`. Values of any type may be stored.

use alloc::vec::Vec;
use core::fmt;

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Column or row index is outside the grid.
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// Rectangular store of optional cell values, kept row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct DataGrid<T> {
    columns: usize,
    cells: Vec<Vec<Option<T>>>,
}

impl<T> DataGrid<T> {
    /// Create a grid with no columns and no rows.
    pub fn new() -> Self {
        DataGrid {
            columns: 0,
            cells: Vec::new(),
        }
    }

    /// Grow an empty grid to `columns` × `rows`.
    pub fn with_dimensions(columns: usize, rows: usize) -> Self {
        let mut grid = Self::new();
        while grid.column_count() < columns {
            grid.append_column();
        }
        while grid.row_count() < rows {
            grid.append_row();
        }
        grid
    }

    /// Number of columns (the `x` extent).
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Number of rows (the `y` extent).
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of addressable cells.
    pub fn area(&self) -> usize {
        self.columns * self.cells.len()
    }

    /// Add an empty column on the right-hand side.
    pub fn append_column(&mut self) {
        self.columns += 1;
        for row in self.cells.iter_mut() {
            row.push(None);
        }
    }

    /// Add an empty row at the bottom.
    pub fn append_row(&mut self) {
        let mut row = Vec::with_capacity(self.columns);
        row.resize_with(self.columns, || None);
        self.cells.push(row);
    }

    /// Returns `true` if (`x`, `y`) lies inside the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.cells.len()
    }

    /// Value stored at (`x`, `y`). Unset or out-of-range cells are `None`.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.cells.get(y)?.get(x)?.as_ref()
    }

    /// Mutable access to the value stored at (`x`, `y`).
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.cells.get_mut(y)?.get_mut(x)?.as_mut()
    }

    /// Store `value` at (`x`, `y`), replacing any previous value.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        self.cells[y][x] = Some(value);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds { x, y })
        }
    }

    /// Iterator over the stored cells in row-major order.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells {
            grid: self,
            idx: 0,
        }
    }
}

impl<T> Default for DataGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DataGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DataGrid<{}x{}>:", self.columns, self.cells.len())?;
        for row in &self.cells {
            for cell in row {
                let ch = if cell.is_some() { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a grid, yielding `((x, y), &value)`.
pub struct Cells<'a, T> {
    grid: &'a DataGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = ((usize, usize), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.grid.columns;
        while self.idx < self.grid.area() {
            let idx = self.idx;
            self.idx += 1;
            let (x, y) = (idx % columns, idx / columns);
            if let Some(value) = self.grid.get(x, y) {
                return Some(((x, y), value));
            }
        }
        None
    }
}
