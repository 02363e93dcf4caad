//! Element-wise arithmetic, multiplication, transpose

use nalgebra::DMatrix;
use reckon_plugin::prelude::*;
use reckon_plugin::DEFAULT_MAX_DIM;

use crate::helpers::extract_matrix;

/// Element-wise matrix addition
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, AlgebraError> {
    check_same_shape("A + B", a, b)?;
    Ok(Matrix::from_dmatrix(a.to_dmatrix() + b.to_dmatrix()))
}

/// Element-wise matrix subtraction
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, AlgebraError> {
    check_same_shape("A − B", a, b)?;
    Ok(Matrix::from_dmatrix(a.to_dmatrix() - b.to_dmatrix()))
}

/// Matrix multiplication; result is rows(A)×cols(B)
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, AlgebraError> {
    if a.cols() != b.rows() {
        return Err(AlgebraError::dimension_mismatch(format!(
            "A × B needs cols(A) == rows(B); got {}×{} and {}×{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }
    let product: DMatrix<f64> = a.to_dmatrix() * b.to_dmatrix();
    Ok(Matrix::from_dmatrix(product))
}

/// Matrix transpose; no shape precondition
pub fn transpose(a: &Matrix) -> Matrix {
    Matrix::from_dmatrix(a.to_dmatrix().transpose())
}

/// All-zero starting grid for the input form
///
/// Dimensions clamp to the calculator's 1..=8 input ceiling.
pub fn template(rows: usize, cols: usize) -> Matrix {
    let r = rows.clamp(1, DEFAULT_MAX_DIM);
    let c = cols.clamp(1, DEFAULT_MAX_DIM);
    Matrix::from_dmatrix(DMatrix::zeros(r, c))
}

fn check_same_shape(op: &str, a: &Matrix, b: &Matrix) -> Result<(), AlgebraError> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(AlgebraError::dimension_mismatch(format!(
            "{} needs equal shapes; got {}×{} and {}×{}",
            op,
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }
    Ok(())
}

// ============================================================================
// ADD - Element-wise addition
// ============================================================================

pub struct AddFn;

static ADD_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("A", "Matrix", "First operand"),
    ArgMeta::required("B", "Matrix", "Second operand, same shape as A"),
];
static ADD_EXAMPLES: [&str; 1] = ["add [[1,2],[3,4]] [[5,6],[7,8]] → [[6,8],[10,12]]"];
static ADD_RELATED: [&str; 2] = ["subtract", "multiply"];

impl OperationPlugin for AddFn {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "add",
            description: "Element-wise matrix addition",
            usage: "add A B",
            args: &ADD_ARGS,
            returns: "Matrix",
            examples: &ADD_EXAMPLES,
            category: "matrix",
            related: &ADD_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Result<Value, CalcError> {
        if args.len() != 2 {
            return Err(CalcError::arg_count("add", 2, args.len()));
        }
        let a = extract_matrix(&args[0], "add", "A")?;
        let b = extract_matrix(&args[1], "add", "B")?;
        Ok(add(&a, &b).map(Value::Matrix)?)
    }
}

// ============================================================================
// SUBTRACT - Element-wise subtraction
// ============================================================================

pub struct SubtractFn;

static SUBTRACT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("A", "Matrix", "First operand"),
    ArgMeta::required("B", "Matrix", "Second operand, same shape as A"),
];
static SUBTRACT_EXAMPLES: [&str; 1] = ["subtract [[6,8],[10,12]] [[5,6],[7,8]] → [[1,2],[3,4]]"];
static SUBTRACT_RELATED: [&str; 2] = ["add", "multiply"];

impl OperationPlugin for SubtractFn {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "subtract",
            description: "Element-wise matrix subtraction",
            usage: "subtract A B",
            args: &SUBTRACT_ARGS,
            returns: "Matrix",
            examples: &SUBTRACT_EXAMPLES,
            category: "matrix",
            related: &SUBTRACT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Result<Value, CalcError> {
        if args.len() != 2 {
            return Err(CalcError::arg_count("subtract", 2, args.len()));
        }
        let a = extract_matrix(&args[0], "subtract", "A")?;
        let b = extract_matrix(&args[1], "subtract", "B")?;
        Ok(subtract(&a, &b).map(Value::Matrix)?)
    }
}

// ============================================================================
// MULTIPLY - Matrix product
// ============================================================================

pub struct MultiplyFn;

static MULTIPLY_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("A", "Matrix", "Left operand"),
    ArgMeta::required("B", "Matrix", "Right operand; rows(B) must equal cols(A)"),
];
static MULTIPLY_EXAMPLES: [&str; 1] =
    ["multiply [[1,2],[3,4]] [[5,6],[7,8]] → [[19,22],[43,50]]"];
static MULTIPLY_RELATED: [&str; 2] = ["add", "transpose"];

impl OperationPlugin for MultiplyFn {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "multiply",
            description: "Matrix multiplication (row-by-column dot products)",
            usage: "multiply A B",
            args: &MULTIPLY_ARGS,
            returns: "Matrix",
            examples: &MULTIPLY_EXAMPLES,
            category: "matrix",
            related: &MULTIPLY_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Result<Value, CalcError> {
        if args.len() != 2 {
            return Err(CalcError::arg_count("multiply", 2, args.len()));
        }
        let a = extract_matrix(&args[0], "multiply", "A")?;
        let b = extract_matrix(&args[1], "multiply", "B")?;
        Ok(multiply(&a, &b).map(Value::Matrix)?)
    }
}

// ============================================================================
// TRANSPOSE - Swap rows and columns
// ============================================================================

pub struct TransposeFn;

static TRANSPOSE_ARGS: [ArgMeta; 1] = [ArgMeta::required("A", "Matrix", "Matrix to transpose")];
static TRANSPOSE_EXAMPLES: [&str; 1] = ["transpose [[1,2,3],[4,5,6]] → [[1,4],[2,5],[3,6]]"];
static TRANSPOSE_RELATED: [&str; 2] = ["multiply", "determinant"];

impl OperationPlugin for TransposeFn {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "transpose",
            description: "Matrix transpose",
            usage: "transpose A",
            args: &TRANSPOSE_ARGS,
            returns: "Matrix",
            examples: &TRANSPOSE_EXAMPLES,
            category: "matrix",
            related: &TRANSPOSE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Result<Value, CalcError> {
        if args.len() != 1 {
            return Err(CalcError::arg_count("transpose", 1, args.len()));
        }
        let a = extract_matrix(&args[0], "transpose", "A")?;
        Ok(Value::Matrix(transpose(&a)))
    }
}
