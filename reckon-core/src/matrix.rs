//! Core matrix and vector types

use std::fmt;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Rectangular matrix of finite reals, row-major, at least 1×1.
///
/// Immutable once built: every operation that would change an entry
/// returns a new matrix instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a new matrix from nested rows, validating rectangularity
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, ParseError> {
        if data.is_empty() || data[0].is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let rows = data.len();
        let cols = data[0].len();

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(ParseError::JaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Create from a nalgebra matrix (rectangular by construction)
    pub fn from_dmatrix(m: DMatrix<f64>) -> Self {
        let rows = m.nrows();
        let cols = m.ncols();
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| m[(i, j)]).collect())
            .collect();
        Self { data, rows, cols }
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Check if matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow the underlying rows
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Get a row as a slice
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.data.get(row).map(|r| r.as_slice())
    }

    /// Get a column as a vector
    pub fn column(&self, col: usize) -> Option<Vector> {
        if col >= self.cols {
            return None;
        }
        Some(Vector::from_vec(
            self.data.iter().map(|row| row[col]).collect(),
        ))
    }

    /// Convert to a nalgebra matrix for arithmetic
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.rows, self.cols, |i, j| self.data[i][j])
    }

    /// Reinterpret a single-row or single-column matrix as a vector
    pub fn to_vector(&self) -> Option<Vector> {
        if self.cols == 1 {
            self.column(0)
        } else if self.rows == 1 {
            Some(Vector::from_vec(self.data[0].clone()))
        } else {
            None
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ParseError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", val)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Ordered sequence of finite reals
///
/// Operations that accept either shape treat a vector as an n×1 matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a new vector from a list of entries
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Get length of vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get element at index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Borrow the entries
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Convert vector to an n×1 column matrix
    pub fn to_column_matrix(&self) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| vec![x]).collect(),
            rows: self.data.len(),
            cols: 1,
        }
    }

    /// Convert vector to a 1×n row matrix
    pub fn to_row_matrix(&self) -> Matrix {
        Matrix {
            data: vec![self.data.clone()],
            rows: 1,
            cols: self.data.len(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, val) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }
        write!(f, "]")
    }
}
