//! Tagged operation results
//!
//! Every engine operation produces one of three shapes: a matrix, a
//! vector, or a scalar. The tag travels with the value so the caller can
//! format and store the result without guessing what an operation
//! returned.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix, Vector};

/// Result value of a calculator operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Matrix(Matrix),
    Vector(Vector),
    Scalar(f64),
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Matrix(_) => "Matrix",
            Value::Vector(_) => "Vector",
            Value::Scalar(_) => "Scalar",
        }
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Value {
        Value::Matrix(m)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Value {
        Value::Vector(v)
    }
}

impl From<f64> for Value {
    fn from(s: f64) -> Value {
        Value::Scalar(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Matrix(m) => write!(f, "{}", m),
            Value::Vector(v) => write!(f, "{}", v),
            Value::Scalar(s) => write!(f, "{}", s),
        }
    }
}
