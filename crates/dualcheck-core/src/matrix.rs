use thiserror::Error;

/// A flat coefficient list does not match the declared matrix dimensions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {rows}x{cols} = {expected} coefficients, got {got}", expected = .rows * .cols)]
pub struct ShapeError {
    pub rows: usize,
    pub cols: usize,
    pub got: usize,
}

/// Dense row-major matrix of constraint coefficients.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Reshape a flat, row-major coefficient list into a `rows` x `cols`
    /// matrix. Fails before any numeric work if the lengths disagree.
    pub fn from_flat(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, ShapeError> {
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// The transpose: entry (i, j) of the result is entry (j, i) of `self`.
    pub fn transposed(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}
