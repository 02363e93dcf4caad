//! Linear system solver
//!
//! Gaussian elimination over an augmented copy of [A | b]: partial
//! pivoting with a strict-greater row comparison (ties keep the earliest
//! candidate), elimination below the pivot, then back-substitution.
//!
//! The pivot zero test is exact, not an epsilon band. Near-singular
//! systems therefore solve to whatever the arithmetic produces; only a
//! pivot of exactly 0.0 reports no unique solution. Inconsistent and
//! underdetermined systems are not distinguished.

use reckon_core::AlgebraError;
use reckon_plugin::prelude::*;

use crate::helpers::{extract_matrix, extract_vector};

/// Solve A·x = b for x
pub fn solve(a: &Matrix, b: &Vector) -> Result<Vector, AlgebraError> {
    if !a.is_square() || b.len() != a.rows() {
        return Err(AlgebraError::dimension_mismatch(format!(
            "solve needs a square A and a matching b; got {}×{} and length {}",
            a.rows(),
            a.cols(),
            b.len()
        )));
    }

    let n = a.rows();

    // Fresh mutable buffer per call; never aliases the inputs.
    let mut aug: Vec<Vec<f64>> = a
        .as_rows()
        .iter()
        .zip(b.as_slice())
        .map(|(row, &rhs)| {
            let mut r = row.clone();
            r.push(rhs);
            r
        })
        .collect();

    for i in 0..n {
        let mut max_row = i;
        for k in i + 1..n {
            if aug[k][i].abs() > aug[max_row][i].abs() {
                max_row = k;
            }
        }
        aug.swap(i, max_row);

        if aug[i][i] == 0.0 {
            return Err(AlgebraError::NoUniqueSolution);
        }

        for k in i + 1..n {
            let factor = aug[k][i] / aug[i][i];
            for j in i..=n {
                aug[k][j] -= factor * aug[i][j];
            }
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        x[i] = aug[i][n] / aug[i][i];
        for k in 0..i {
            aug[k][n] -= aug[k][i] * x[i];
        }
    }

    Ok(Vector::from_vec(x))
}

// ============================================================================
// SOLVE - Solve linear system A·x = b
// ============================================================================

pub struct SolveFn;

static SOLVE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("A", "Matrix", "Coefficient matrix (square)"),
    ArgMeta::required("b", "Vector", "Right-hand side, one entry per row of A"),
];
static SOLVE_EXAMPLES: [&str; 1] = ["solve [[2,1],[1,3]] [3,5] → [0.8, 1.4]"];
static SOLVE_RELATED: [&str; 2] = ["determinant", "multiply"];

impl OperationPlugin for SolveFn {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "solve",
            description: "Solve the linear system A·x = b by Gaussian elimination",
            usage: "solve A b",
            args: &SOLVE_ARGS,
            returns: "Vector",
            examples: &SOLVE_EXAMPLES,
            category: "matrix",
            related: &SOLVE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Result<Value, CalcError> {
        if args.len() != 2 {
            return Err(CalcError::arg_count("solve", 2, args.len()));
        }
        let a = extract_matrix(&args[0], "solve", "A")?;
        let b = extract_vector(&args[1], "solve", "b")?;
        Ok(solve(&a, &b).map(Value::Vector)?)
    }
}
