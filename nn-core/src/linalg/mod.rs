use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{MatrixError, Result};

pub mod elementwise;
pub mod vectors;

pub use elementwise::ScalarFn;

#[macro_export]
macro_rules! row_vector {
    ($($y:expr),+ $(,)?) => (
        $crate::linalg::Matrix::new_row_vector(&[$($y),+])
    );
}

#[macro_export]
macro_rules! column_vector {
    ($($y:expr),+ $(,)?) => (
        $crate::linalg::Matrix::new_column_vector(&[$($y),+])
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.columns == 1
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Reserves an empty buffer with room for exactly `num_rows * num_columns` values.
///
/// Nothing is kept when this fails, so callers never see a partially built matrix.
pub(crate) fn allocate(num_rows: usize, num_columns: usize) -> Result<Vec<f64>> {
    if num_rows == 0 || num_columns == 0 {
        log::debug!("rejecting {}x{} matrix", num_rows, num_columns);
        return Err(MatrixError::InvalidDimensions {
            rows: num_rows,
            columns: num_columns,
        });
    }

    let out_of_memory = MatrixError::OutOfMemory {
        rows: num_rows,
        columns: num_columns,
    };

    let num_elements = match num_rows.checked_mul(num_columns) {
        Some(n) => n,
        None => {
            log::debug!(
                "{}x{} matrix overflows the element count",
                num_rows,
                num_columns
            );
            return Err(out_of_memory);
        }
    };

    let mut data = Vec::new();
    if let Err(e) = data.try_reserve_exact(num_elements) {
        log::debug!(
            "allocation for {}x{} matrix failed: {}",
            num_rows,
            num_columns,
            e
        );
        return Err(out_of_memory);
    }

    Ok(data)
}

/// A dense matrix of `f64` stored as one row-major buffer.
///
/// Every constructor either returns a fully initialized matrix with at least one row and
/// one column, or an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    num_rows: usize,
    num_columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `num_rows` x `num_columns` matrix with every element set to `0.0`.
    pub fn new(num_rows: usize, num_columns: usize) -> Result<Matrix> {
        Self::init(num_rows, num_columns, 0.0)
    }

    pub fn init(num_rows: usize, num_columns: usize, init_value: f64) -> Result<Matrix> {
        let mut data = allocate(num_rows, num_columns)?;
        data.resize(num_rows * num_columns, init_value);
        log::trace!("created {}x{} matrix", num_rows, num_columns);
        Ok(Self::from_parts(num_rows, num_columns, data))
    }

    /// Wraps a buffer that already holds `num_rows * num_columns` values.
    pub(crate) fn from_parts(num_rows: usize, num_columns: usize, data: Vec<f64>) -> Matrix {
        debug_assert_eq!(data.len(), num_rows * num_columns);
        Matrix {
            num_rows,
            num_columns,
            data,
        }
    }

    pub fn new_row_vector(items: &[f64]) -> Result<Self> {
        let mut data = allocate(1, items.len())?;
        data.extend_from_slice(items);
        Ok(Self::from_parts(1, items.len(), data))
    }

    pub fn new_column_vector(items: &[f64]) -> Result<Self> {
        let mut data = allocate(items.len(), 1)?;
        data.extend_from_slice(items);
        Ok(Self::from_parts(items.len(), 1, data))
    }

    pub fn new_identity_matrix(size: usize) -> Result<Self> {
        let mut m = Self::new(size, size)?;
        for i in 0..size {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    pub fn new_random_normal<R>(
        num_rows: usize,
        num_columns: usize,
        mean: f64,
        std_dev: f64,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| MatrixError::InvalidDistribution(e.to_string()))?;

        let mut data = allocate(num_rows, num_columns)?;
        for _ in 0..num_rows * num_columns {
            data.push(normal.sample(rng));
        }

        Ok(Self::from_parts(num_rows, num_columns, data))
    }

    /// Samples every element uniformly from `[low, high)`.
    pub fn new_random_uniform<R>(
        num_rows: usize,
        num_columns: usize,
        low: f64,
        high: f64,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        // Uniform::new panics on an empty or non-finite range
        if !(low < high) || !(high - low).is_finite() {
            return Err(MatrixError::InvalidDistribution(format!(
                "uniform range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        let uniform = Uniform::new(low, high);

        let mut data = allocate(num_rows, num_columns)?;
        for _ in 0..num_rows * num_columns {
            data.push(uniform.sample(rng));
        }

        Ok(Self::from_parts(num_rows, num_columns, data))
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.num_rows, self.num_columns)
    }

    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// True for 1xN and Nx1 matrices, including 1x1.
    pub fn is_vector(&self) -> bool {
        self.shape().is_vector()
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Reads one element. The indexes are not validated in release builds;
    /// use [`Matrix::try_get`] when they come from untrusted input.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.num_rows && column < self.num_columns);
        self.data[row * self.num_columns + column]
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        debug_assert!(row < self.num_rows && column < self.num_columns);
        self.data[row * self.num_columns + column] = value;
    }

    pub fn try_get(&self, row: usize, column: usize) -> Result<f64> {
        self.check_index(row, column)?;
        Ok(self.get(row, column))
    }

    pub fn try_set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check_index(row, column)?;
        self.set(row, column, value);
        Ok(())
    }

    fn check_index(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.num_rows || column >= self.num_columns {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                column,
                shape: self.shape(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width_per_column = 10;
        let pad = " ".repeat(width_per_column * self.num_columns + 1); // +1 for the leading space

        writeln!(f, "╭{}╮", pad)?;
        for i in 0..self.num_rows {
            write!(f, "│ ")?;
            for j in 0..self.num_columns {
                write!(f, "{:>9.6} ", self.get(i, j))?;
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "╰{}╯", pad)
    }
}

/// Builds a matrix one row at a time.
///
/// The chaining form (`with_row`) defers a ragged-row error to `build`.
#[derive(Debug, Default)]
pub struct RowsMatrixBuilder {
    num_columns: Option<usize>,
    rows: Vec<Vec<f64>>,
    error: Option<MatrixError>,
}

impl RowsMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_num_columns(num_columns: usize) -> Self {
        Self {
            num_columns: Some(num_columns),
            ..Self::default()
        }
    }

    /// For non-chaining use
    pub fn push_row(&mut self, row: &[f64]) -> Result<()> {
        match self.num_columns {
            Some(num_columns) if row.len() != num_columns => {
                return Err(MatrixError::ShapeMismatch {
                    left: Shape::new(1, num_columns),
                    right: Shape::new(1, row.len()),
                });
            }
            Some(_) => {}
            None => self.num_columns = Some(row.len()),
        }

        self.rows.push(row.to_vec());
        Ok(())
    }

    /// For chaining use
    pub fn with_row(mut self, row: &[f64]) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.push_row(row) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn build(self) -> Result<Matrix> {
        if let Some(e) = self.error {
            return Err(e);
        }

        let num_rows = self.rows.len();
        let num_columns = self.num_columns.unwrap_or(0);

        let mut data = allocate(num_rows, num_columns)?;
        for row in self.rows {
            data.extend_from_slice(&row);
        }

        Ok(Matrix::from_parts(num_rows, num_columns, data))
    }
}

/// Builds a matrix one column at a time.
#[derive(Debug, Default)]
pub struct ColumnsMatrixBuilder {
    num_rows: Option<usize>,
    columns: Vec<Vec<f64>>,
    error: Option<MatrixError>,
}

impl ColumnsMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_column(&mut self, column: &[f64]) -> Result<()> {
        match self.num_rows {
            Some(num_rows) if column.len() != num_rows => {
                return Err(MatrixError::ShapeMismatch {
                    left: Shape::new(num_rows, 1),
                    right: Shape::new(column.len(), 1),
                });
            }
            Some(_) => {}
            None => self.num_rows = Some(column.len()),
        }

        self.columns.push(column.to_vec());
        Ok(())
    }

    /// For chaining use
    pub fn with_column(mut self, column: &[f64]) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.push_column(column) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn build(self) -> Result<Matrix> {
        if let Some(e) = self.error {
            return Err(e);
        }

        let num_rows = self.num_rows.unwrap_or(0);
        let num_columns = self.columns.len();

        let mut data = allocate(num_rows, num_columns)?;
        for i_row in 0..num_rows {
            for c in self.columns.iter() {
                data.push(c[i_row]);
            }
        }

        Ok(Matrix::from_parts(num_rows, num_columns, data))
    }
}
