//! Separable 2D transforms and spectrum shifts.
//!
//! Rows and columns are transformed with Bluestein's algorithm so that neither dimension needs to
//! be a power of two.

use crate::bluesteins::Bluesteins;
use crate::complex::Complex;
use crate::error::Result;
use crate::fft::Transform;
use crate::float::FftFloat;
use crate::grid::{ComplexGrid, Grid};
use crate::sequence;

/// Apply a 2D FFT or IFFT, returning a new grid.
///
/// The forward transform processes rows and then columns; the inverse processes columns and then
/// rows.
pub fn transform<T: FftFloat>(
    input: &ComplexGrid<T>,
    transform: Transform,
) -> Result<ComplexGrid<T>> {
    let rows = Bluesteins::new(input.width())?;
    let columns = Bluesteins::new(input.height())?;
    let mut output = input.clone();
    if transform.is_forward() {
        transform_rows(&mut output, &rows, transform)?;
        transform_columns(&mut output, &columns, transform)?;
    } else {
        transform_columns(&mut output, &columns, transform)?;
        transform_rows(&mut output, &rows, transform)?;
    }
    Ok(output)
}

/// Apply a 2D FFT.
pub fn fft2d<T: FftFloat>(input: &ComplexGrid<T>) -> Result<ComplexGrid<T>> {
    transform(input, Transform::Fft)
}

/// Apply a 2D IFFT.
pub fn ifft2d<T: FftFloat>(input: &ComplexGrid<T>) -> Result<ComplexGrid<T>> {
    transform(input, Transform::Ifft)
}

fn transform_rows<T: FftFloat>(
    grid: &mut ComplexGrid<T>,
    plan: &Bluesteins<T>,
    transform: Transform,
) -> Result<()> {
    for row in grid.rows_mut() {
        let transformed = plan.transform(row, transform)?;
        row.copy_from_slice(&transformed);
    }
    Ok(())
}

fn transform_columns<T: FftFloat>(
    grid: &mut ComplexGrid<T>,
    plan: &Bluesteins<T>,
    transform: Transform,
) -> Result<()> {
    for j in 0..grid.width() {
        let column: Vec<Complex<T>> = grid.column(j)?;
        let column = plan.transform(&column, transform)?;
        grid.set_column(j, &column);
    }
    Ok(())
}

fn rotate<C: Copy>(input: &Grid<C>, row_offset: usize, column_offset: usize) -> Result<Grid<C>> {
    let (height, width) = input.shape();
    let mut cells = sequence::allocate(height * width)?;
    for i in 0..height {
        let source = (i + row_offset) % height;
        let row = &input.cells()[source * width..(source + 1) * width];
        cells.extend((0..width).map(|j| row[(j + column_offset) % width]));
    }
    Grid::from_cells(cells, height, width)
}

/// Swaps the quadrants of a spectrum so the zero frequency is centered.
///
/// `shifted[i][j] = input[(i + height / 2) % height][(j + width / 2) % width]`.
pub fn fft_shift<C: Copy>(input: &Grid<C>) -> Result<Grid<C>> {
    rotate(input, input.height() / 2, input.width() / 2)
}

/// Undoes [`fft_shift`], including for odd dimensions.
pub fn ifft_shift<C: Copy>(input: &Grid<C>) -> Result<Grid<C>> {
    rotate(
        input,
        (input.height() + 1) / 2,
        (input.width() + 1) / 2,
    )
}
