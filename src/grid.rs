//! Row-major 2D grids.

use crate::complex::{log_amplitude, Complex};
use crate::error::{FftError, Result};
use crate::float::FftFloat;
use crate::sequence;

/// A `height` by `width` grid of cells stored in row-major order.
#[derive(Clone, PartialEq)]
pub struct Grid<C> {
    height: usize,
    width: usize,
    cells: Vec<C>,
}

/// A grid of complex values.
pub type ComplexGrid<T> = Grid<Complex<T>>;

/// A grid of real values.
pub type RealGrid<T> = Grid<T>;

impl<C> core::fmt::Debug for Grid<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("height", &self.height)
            .field("width", &self.width)
            .finish()
    }
}

fn validate_shape(height: usize, width: usize) -> Result<usize> {
    sequence::validate_length(height)?;
    sequence::validate_length(width)?;
    height.checked_mul(width).ok_or(FftError::InvalidLength {
        len: height,
        reason: "grid size overflows",
    })
}

impl<C> Grid<C> {
    /// Creates a grid from row-major cells.
    pub fn from_cells(cells: Vec<C>, height: usize, width: usize) -> Result<Self> {
        let expected = validate_shape(height, width)?;
        if cells.len() != expected {
            return Err(FftError::ShapeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Consumes the grid, returning the row-major cells.
    pub fn into_cells(self) -> Vec<C> {
        self.cells
    }

    /// Returns the cell at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<&C> {
        if i < self.height && j < self.width {
            self.cells.get(i * self.width + j)
        } else {
            None
        }
    }

    /// Returns row `i`, or `None` if `i` is out of bounds.
    pub fn row(&self, i: usize) -> Option<&[C]> {
        if i < self.height {
            self.cells.get(i * self.width..(i + 1) * self.width)
        } else {
            None
        }
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, C> {
        self.cells.chunks_exact(self.width)
    }

    pub(crate) fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, C> {
        self.cells.chunks_exact_mut(self.width)
    }

    /// Applies `f` to every cell, producing a new grid of the same shape.
    pub fn map<D, F: FnMut(&C) -> D>(&self, f: F) -> Result<Grid<D>> {
        let mut cells = sequence::allocate(self.cells.len())?;
        cells.extend(self.cells.iter().map(f));
        Ok(Grid {
            height: self.height,
            width: self.width,
            cells,
        })
    }
}

impl<C: Copy> Grid<C> {
    /// Copies column `j` into a new sequence.
    pub fn column(&self, j: usize) -> Result<Vec<C>> {
        if j >= self.width {
            return Err(FftError::IndexOutOfBounds {
                index: j,
                len: self.width,
            });
        }
        let mut column = sequence::allocate(self.height)?;
        column.extend(self.cells[j..].iter().step_by(self.width).copied());
        Ok(column)
    }

    /// Writes `column` into column `j`.
    pub(crate) fn set_column(&mut self, j: usize, column: &[C]) {
        assert!(j < self.width, "column index out of bounds");
        assert_eq!(column.len(), self.height);
        for (cell, value) in self.cells[j..]
            .iter_mut()
            .step_by(self.width)
            .zip(column.iter())
        {
            *cell = *value;
        }
    }
}

impl<C: Default + Clone> Grid<C> {
    /// Creates a grid with every cell set to zero.
    pub fn zeroed(height: usize, width: usize) -> Result<Self> {
        let len = validate_shape(height, width)?;
        Self::from_cells(sequence::zeroed(len)?, height, width)
    }
}

impl<T: FftFloat> Grid<Complex<T>> {
    /// Creates a complex grid from row-major real values.
    pub fn from_real(values: &[T], height: usize, width: usize) -> Result<Self> {
        let expected = validate_shape(height, width)?;
        if values.len() != expected {
            return Err(FftError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Self::from_cells(sequence::to_complex(values)?, height, width)
    }

    /// Returns `ln(1 + |z|)` for every cell.
    pub fn amplitude(&self) -> Result<RealGrid<T>> {
        self.map(|z| log_amplitude(*z))
    }

    /// Returns the real component of every cell.
    pub fn real(&self) -> Result<RealGrid<T>> {
        self.map(|z| z.re)
    }
}
