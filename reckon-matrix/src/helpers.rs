//! Argument helpers shared by the operation plugins

use reckon_core::{CalcError, Matrix, Value, Vector};

/// Extract a matrix argument
pub fn extract_matrix(value: &Value, op: &str, arg: &str) -> Result<Matrix, CalcError> {
    match value {
        Value::Matrix(m) => Ok(m.clone()),
        _ => Err(CalcError::arg_type(op, arg, "Matrix", value.type_name())),
    }
}

/// Extract a vector argument
///
/// A single-row or single-column matrix counts as a vector, so `b` can be
/// typed the same way as the matrices.
pub fn extract_vector(value: &Value, op: &str, arg: &str) -> Result<Vector, CalcError> {
    match value {
        Value::Vector(v) => Ok(v.clone()),
        Value::Matrix(m) => m
            .to_vector()
            .ok_or_else(|| CalcError::arg_type(op, arg, "Vector", "Matrix")),
        _ => Err(CalcError::arg_type(op, arg, "Vector", value.type_name())),
    }
}
