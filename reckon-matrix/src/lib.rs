//! Reckon Matrix - The matrix calculator engine
//!
//! Parsing, linear algebra, result formatting, and calculation history
//! for the matrix page:
//! - Parsing (text rows split on newlines/semicolons, cell grids)
//! - Algebra (add, subtract, multiply, transpose, determinant with worked
//!   steps, Gaussian solve)
//! - Formatting (parser-compatible display strings)
//! - History (newest-first session log)
//!
//! All arithmetic is IEEE f64. Operations are pure: parsed inputs go in,
//! fresh values come out, and failures are structured error values.

mod determinant;
mod format;
mod helpers;
mod history;
mod ops;
mod parse;
mod solve;

pub use determinant::{determinant, determinant_value, Determinant, DeterminantFn};
pub use format::{format_matrix, format_scalar, format_value, format_vector, FormatOptions};
pub use helpers::{extract_matrix, extract_vector};
pub use history::{History, HistoryEntry};
pub use ops::{add, multiply, subtract, template, transpose};
pub use ops::{AddFn, MultiplyFn, SubtractFn, TransposeFn};
pub use parse::{parse_matrix, parse_matrix_cells, parse_vector, parse_vector_cells};
pub use solve::{solve, SolveFn};

use reckon_plugin::OperationRegistry;

/// Load matrix operations into a registry
pub fn load_matrix_library(registry: OperationRegistry) -> OperationRegistry {
    registry
        .with_operation(ops::AddFn)
        .with_operation(ops::SubtractFn)
        .with_operation(ops::MultiplyFn)
        .with_operation(ops::TransposeFn)
        .with_operation(determinant::DeterminantFn)
        .with_operation(solve::SolveFn)
}
