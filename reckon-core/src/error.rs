//! Structured errors for the calculator core
//!
//! Errors never crash the calculator. Every fallible operation hands one
//! back through `Result`, the front end renders the message, and the
//! history store stays untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const JAGGED_ROWS: &str = "JAGGED_ROWS";
    pub const NOT_A_NUMBER: &str = "NOT_A_NUMBER";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const NOT_SQUARE: &str = "NOT_SQUARE";
    pub const NO_UNIQUE_SOLUTION: &str = "NO_UNIQUE_SOLUTION";
    // Dispatch-layer error codes
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNDEFINED_OP: &str = "UNDEFINED_OP";
}

/// Error type for turning raw input into matrices or vectors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ParseError {
    #[error("input contains no rows")]
    EmptyInput,

    #[error("row {row} has {got} entries, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("'{token}' is not a number")]
    NotANumber { token: String },
}

impl ParseError {
    pub fn not_a_number(token: impl Into<String>) -> Self {
        ParseError::NotANumber {
            token: token.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => codes::EMPTY_INPUT,
            ParseError::JaggedRows { .. } => codes::JAGGED_ROWS,
            ParseError::NotANumber { .. } => codes::NOT_A_NUMBER,
        }
    }
}

/// Error type for the algebra engine
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AlgebraError {
    #[error("dimension mismatch: {details}")]
    DimensionMismatch { details: String },

    #[error("{rows}×{cols} matrix is not square")]
    NotSquare { rows: usize, cols: usize },

    #[error("the system is inconsistent or has infinitely many solutions")]
    NoUniqueSolution,
}

impl AlgebraError {
    pub fn dimension_mismatch(details: impl Into<String>) -> Self {
        AlgebraError::DimensionMismatch {
            details: details.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AlgebraError::DimensionMismatch { .. } => codes::DIMENSION_MISMATCH,
            AlgebraError::NotSquare { .. } => codes::NOT_SQUARE,
            AlgebraError::NoUniqueSolution => codes::NO_UNIQUE_SOLUTION,
        }
    }
}

/// Any failure the dispatch layer can surface to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error("{op}() expects {expected} arguments, got {got}")]
    ArgCount {
        op: String,
        expected: usize,
        got: usize,
    },

    #[error("{op}() argument '{arg}': expected {expected}, got {got}")]
    ArgType {
        op: String,
        arg: String,
        expected: String,
        got: String,
    },

    #[error("unknown operation: {name}")]
    UndefinedOperation {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<String>,
    },
}

impl CalcError {
    pub fn arg_count(op: &str, expected: usize, got: usize) -> Self {
        CalcError::ArgCount {
            op: op.to_string(),
            expected,
            got,
        }
    }

    pub fn arg_type(op: &str, arg: &str, expected: &str, got: &str) -> Self {
        CalcError::ArgType {
            op: op.to_string(),
            arg: arg.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub fn undefined_operation(name: &str) -> Self {
        CalcError::UndefinedOperation {
            name: name.to_string(),
            suggestion: None,
        }
    }

    /// Builder: attach a "did you mean" hint to an unknown-operation error
    pub fn with_suggestion(mut self, hint: impl Into<String>) -> Self {
        if let CalcError::UndefinedOperation { suggestion, .. } = &mut self {
            *suggestion = Some(hint.into());
        }
        self
    }

    pub fn code(&self) -> &'static str {
        match self {
            CalcError::Parse(e) => e.code(),
            CalcError::Algebra(e) => e.code(),
            CalcError::ArgCount { .. } => codes::ARG_COUNT,
            CalcError::ArgType { .. } => codes::ARG_TYPE,
            CalcError::UndefinedOperation { .. } => codes::UNDEFINED_OP,
        }
    }
}
