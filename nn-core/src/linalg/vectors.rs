use super::{allocate, Matrix, Shape};
use crate::errors::{MatrixError, Result};

impl Matrix {
    /// Copies row `row_index` into a new 1 x num_columns matrix.
    pub fn extract_row(&self, row_index: usize) -> Result<Matrix> {
        self.check_row_index(row_index)?;
        let start = row_index * self.num_columns;
        Matrix::new_row_vector(&self.data[start..start + self.num_columns])
    }

    /// Copies column `column_index` into a new num_rows x 1 matrix.
    pub fn extract_column(&self, column_index: usize) -> Result<Matrix> {
        self.check_column_index(column_index)?;

        let mut data = allocate(self.num_rows, 1)?;
        for i_row in 0..self.num_rows {
            data.push(self.get(i_row, column_index));
        }

        Ok(Matrix::from_parts(self.num_rows, 1, data))
    }

    /// Overwrites row `row_index` with the values of a 1 x num_columns matrix.
    pub fn insert_row(&mut self, row_index: usize, row: &Matrix) -> Result<()> {
        let expected = Shape::new(1, self.num_columns);
        if row.shape() != expected {
            return Err(MatrixError::ShapeMismatch {
                left: expected,
                right: row.shape(),
            });
        }
        self.check_row_index(row_index)?;

        let start = row_index * self.num_columns;
        self.data[start..start + self.num_columns].copy_from_slice(&row.data);
        Ok(())
    }

    /// Overwrites column `column_index` with the values of a num_rows x 1 matrix.
    pub fn insert_column(&mut self, column_index: usize, column: &Matrix) -> Result<()> {
        let expected = Shape::new(self.num_rows, 1);
        if column.shape() != expected {
            return Err(MatrixError::ShapeMismatch {
                left: expected,
                right: column.shape(),
            });
        }
        self.check_column_index(column_index)?;

        for (i_row, value) in column.data.iter().enumerate() {
            self.set(i_row, column_index, *value);
        }
        Ok(())
    }

    fn check_row_index(&self, row_index: usize) -> Result<()> {
        if row_index >= self.num_rows {
            return Err(MatrixError::IndexOutOfBounds {
                row: row_index,
                column: 0,
                shape: self.shape(),
            });
        }
        Ok(())
    }

    fn check_column_index(&self, column_index: usize) -> Result<()> {
        if column_index >= self.num_columns {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                column: column_index,
                shape: self.shape(),
            });
        }
        Ok(())
    }
}
