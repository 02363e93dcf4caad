//! Reckon Core - Fundamental types
//!
//! This crate provides the core types used throughout Reckon:
//! - `Matrix` / `Vector`: rectangular numeric data, immutable after
//!   construction
//! - `Value`: tagged operation results (matrix, vector, or scalar)
//! - `ParseError` / `AlgebraError` / `CalcError`: structured failure values

mod error;
mod matrix;
mod value;

pub use error::{codes, AlgebraError, CalcError, ParseError};
pub use matrix::{Matrix, Vector};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{AlgebraError, CalcError, Matrix, ParseError, Value, Vector};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod matrix_tests {
        use super::*;

        #[test]
        fn test_matrix_creation() {
            let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
            assert_eq!(m.rows(), 2);
            assert_eq!(m.cols(), 2);
            assert!(m.is_square());
        }

        #[test]
        fn test_matrix_rejects_empty() {
            assert_eq!(Matrix::from_rows(vec![]), Err(ParseError::EmptyInput));
            assert_eq!(Matrix::from_rows(vec![vec![]]), Err(ParseError::EmptyInput));
        }

        #[test]
        fn test_matrix_rejects_jagged() {
            let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
            assert_eq!(
                err,
                ParseError::JaggedRows {
                    row: 1,
                    expected: 2,
                    got: 1
                }
            );
        }

        #[test]
        fn test_matrix_get() {
            let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
            assert_eq!(m.get(0, 0), Some(1.0));
            assert_eq!(m.get(1, 1), Some(4.0));
            assert_eq!(m.get(2, 2), None);
        }

        #[test]
        fn test_dmatrix_round_trip() {
            let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
            let back = Matrix::from_dmatrix(m.to_dmatrix());
            assert_eq!(m, back);
        }

        #[test]
        fn test_row_and_column_access() {
            let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
            assert_eq!(m.row(0), Some([1.0, 2.0].as_slice()));
            assert_eq!(m.column(1), Some(Vector::from_vec(vec![2.0, 4.0])));
            assert_eq!(m.row(5), None);
            assert_eq!(m.column(5), None);
        }

        #[test]
        fn test_single_row_or_column_as_vector() {
            let col = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
            assert_eq!(col.to_vector(), Some(Vector::from_vec(vec![1.0, 2.0])));

            let row = Matrix::from_rows(vec![vec![3.0, 4.0]]).unwrap();
            assert_eq!(row.to_vector(), Some(Vector::from_vec(vec![3.0, 4.0])));

            let square = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
            assert_eq!(square.to_vector(), None);
        }

        #[test]
        fn test_vector_matrix_conversions() {
            let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
            let col = v.to_column_matrix();
            assert_eq!((col.rows(), col.cols()), (3, 1));
            assert_eq!(col.to_vector(), Some(v.clone()));

            let row = v.to_row_matrix();
            assert_eq!((row.rows(), row.cols()), (1, 3));
            assert_eq!(row.get(0, 2), Some(3.0));
        }

        #[test]
        fn test_display() {
            let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
            assert_eq!(format!("{}", m), "[[1, 2], [3, 4]]");

            let v = Vector::from_vec(vec![0.5, 1.5]);
            assert_eq!(format!("{}", v), "[0.5, 1.5]");
        }

        #[test]
        fn test_matrix_serde_shape() {
            let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

            let back: Matrix = serde_json::from_str(&json).unwrap();
            assert_eq!(m, back);

            // Jagged data never deserializes into a Matrix
            assert!(serde_json::from_str::<Matrix>("[[1.0],[2.0,3.0]]").is_err());
        }
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_accessors() {
            let m = Matrix::from_rows(vec![vec![1.0]]).unwrap();
            let v = Value::from(m.clone());
            assert_eq!(v.as_matrix(), Some(&m));
            assert_eq!(v.as_scalar(), None);

            let s = Value::from(2.5);
            assert_eq!(s.as_scalar(), Some(2.5));
            assert_eq!(s.as_vector(), None);
        }

        #[test]
        fn test_type_name() {
            assert_eq!(Value::Scalar(1.0).type_name(), "Scalar");
            assert_eq!(
                Value::Vector(Vector::from_vec(vec![1.0])).type_name(),
                "Vector"
            );
        }

        #[test]
        fn test_serde_tagging() {
            let v = Value::Scalar(-2.0);
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, r#"{"type":"scalar","value":-2.0}"#);

            let back: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_codes() {
            assert_eq!(ParseError::EmptyInput.code(), codes::EMPTY_INPUT);
            assert_eq!(
                AlgebraError::NoUniqueSolution.code(),
                codes::NO_UNIQUE_SOLUTION
            );
            assert_eq!(
                CalcError::arg_count("add", 2, 1).code(),
                codes::ARG_COUNT
            );
        }

        #[test]
        fn test_parse_error_wraps_into_calc_error() {
            let err: CalcError = ParseError::not_a_number("abc").into();
            assert_eq!(err.code(), codes::NOT_A_NUMBER);
            assert_eq!(format!("{}", err), "'abc' is not a number");
        }

        #[test]
        fn test_suggestion_builder() {
            let err = CalcError::undefined_operation("ad").with_suggestion("did you mean add?");
            match err {
                CalcError::UndefinedOperation { suggestion, .. } => {
                    assert_eq!(suggestion.as_deref(), Some("did you mean add?"));
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }

        #[test]
        fn test_display() {
            let err = AlgebraError::NotSquare { rows: 2, cols: 3 };
            assert_eq!(format!("{}", err), "2×3 matrix is not square");
        }
    }
}
