//! Determinants with worked derivations
//!
//! Sizes 1–3 use the closed forms and emit the substituted expression the
//! front end shows as details; anything larger falls back to recursive cofactor
//! expansion along the first row and reports only the final value.

use reckon_core::AlgebraError;
use reckon_plugin::prelude::*;
use serde::Serialize;

use crate::helpers::extract_matrix;

/// Determinant value plus its human-readable derivation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Determinant {
    pub value: f64,
    pub steps: String,
}

/// Compute the determinant of a square matrix, with derivation steps
pub fn determinant(m: &Matrix) -> Result<Determinant, AlgebraError> {
    if !m.is_square() {
        return Err(AlgebraError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(with_steps(m.as_rows()))
}

/// Compute only the determinant value, by recursive cofactor expansion
pub fn determinant_value(m: &Matrix) -> Result<f64, AlgebraError> {
    if !m.is_square() {
        return Err(AlgebraError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(cofactor_expansion(m.as_rows()))
}

/// Recursive cofactor expansion along the first row
fn cofactor_expansion(rows: &[Vec<f64>]) -> f64 {
    let n = rows.len();
    if n == 1 {
        return rows[0][0];
    }
    if n == 2 {
        return rows[0][0] * rows[1][1] - rows[0][1] * rows[1][0];
    }

    let mut det = 0.0;
    for (col, &val) in rows[0].iter().enumerate() {
        let minor: Vec<Vec<f64>> = rows[1..]
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &v)| v)
                    .collect()
            })
            .collect();
        let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
        det += val * sign * cofactor_expansion(&minor);
    }
    det
}

fn with_steps(rows: &[Vec<f64>]) -> Determinant {
    match rows.len() {
        1 => {
            let a = rows[0][0];
            Determinant {
                value: a,
                steps: format!("det([{a}]) = {a}"),
            }
        }
        2 => {
            let (a, b) = (rows[0][0], rows[0][1]);
            let (c, d) = (rows[1][0], rows[1][1]);
            let value = a * d - b * c;
            let steps = [
                "2×2 determinant:".to_string(),
                format!("|a  b|   |{a}  {b}|"),
                format!("|c  d| = |{c}  {d}|"),
                String::new(),
                "det(A) = a·d − b·c".to_string(),
                format!("       = {a}·{d} − {b}·{c}"),
                format!("       = {} − {}", a * d, b * c),
                format!("       = {value}"),
            ]
            .join("\n");
            Determinant { value, steps }
        }
        3 => {
            let (a, b, c) = (rows[0][0], rows[0][1], rows[0][2]);
            let (d, e, f) = (rows[1][0], rows[1][1], rows[1][2]);
            let (g, h, i) = (rows[2][0], rows[2][1], rows[2][2]);

            // Sarrus' rule: forward diagonals positive, anti-diagonals negative
            let p1 = a * e * i;
            let p2 = b * f * g;
            let p3 = c * d * h;

            let n1 = g * e * c;
            let n2 = h * f * a;
            let n3 = i * d * b;

            let sum_pos = p1 + p2 + p3;
            let sum_neg = n1 + n2 + n3;
            let value = sum_pos - sum_neg;

            let steps = [
                "3×3 determinant (Sarrus' rule):".to_string(),
                String::new(),
                "      |a₁₁  a₁₂  a₁₃|".to_string(),
                "A  =  |a₂₁  a₂₂  a₂₃|".to_string(),
                "      |a₃₁  a₃₂  a₃₃|".to_string(),
                String::new(),
                "det(A) = a₁₁a₂₂a₃₃ + a₁₂a₂₃a₃₁ + a₁₃a₂₁a₃₂".to_string(),
                "       − a₃₁a₂₂a₁₃ − a₃₂a₂₃a₁₁ − a₃₃a₂₁a₁₂".to_string(),
                String::new(),
                "Numeric substitution:".to_string(),
                format!("      |{a}  {b}  {c}|"),
                format!("A  =  |{d}  {e}  {f}|"),
                format!("      |{g}  {h}  {i}|"),
                String::new(),
                format!(
                    "det(A) = {a}·{e}·{i} + {b}·{f}·{g} + {c}·{d}·{h} − {g}·{e}·{c} − {h}·{f}·{a} − {i}·{d}·{b}"
                ),
                String::new(),
                format!("       = {p1} + {p2} + {p3} − {n1} − {n2} − {n3}"),
                format!("       = {sum_pos} − {sum_neg}"),
                format!("       = {value}"),
            ]
            .join("\n");
            Determinant { value, steps }
        }
        _ => {
            let value = cofactor_expansion(rows);
            let steps = format!(
                "Detailed step-by-step explanation is currently available only for 1×1, 2×2 and 3×3 matrices.\ndet(A) (computed recursively) = {value}"
            );
            Determinant { value, steps }
        }
    }
}

// ============================================================================
// DETERMINANT - Scalar determinant of a square matrix
// ============================================================================

pub struct DeterminantFn;

static DETERMINANT_ARGS: [ArgMeta; 1] = [ArgMeta::required("A", "Matrix", "Square matrix")];
static DETERMINANT_EXAMPLES: [&str; 2] = [
    "determinant [[1,2],[3,4]] → -2",
    "determinant [[1,2,3],[4,5,6],[7,8,10]] → -3",
];
static DETERMINANT_RELATED: [&str; 2] = ["transpose", "solve"];

impl OperationPlugin for DeterminantFn {
    fn meta(&self) -> OperationMeta {
        OperationMeta {
            name: "determinant",
            description: "Determinant of a square matrix",
            usage: "determinant A",
            args: &DETERMINANT_ARGS,
            returns: "Scalar",
            examples: &DETERMINANT_EXAMPLES,
            category: "matrix",
            related: &DETERMINANT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Result<Value, CalcError> {
        if args.len() != 1 {
            return Err(CalcError::arg_count("determinant", 1, args.len()));
        }
        let a = extract_matrix(&args[0], "determinant", "A")?;
        Ok(determinant(&a).map(|d| Value::Scalar(d.value))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_det_1x1() {
        let d = determinant(&m(vec![vec![7.0]])).unwrap();
        assert_eq!(d.value, 7.0);
        assert_eq!(d.steps, "det([7]) = 7");
    }

    #[test]
    fn test_det_2x2() {
        let d = determinant(&m(vec![vec![1.0, 2.0], vec![3.0, 4.0]])).unwrap();
        assert_eq!(d.value, -2.0);
        assert!(d.steps.contains("det(A) = a·d − b·c"));
        assert!(d.steps.contains("= 1·4 − 2·3"));
        assert!(d.steps.ends_with("= -2"));
    }

    #[test]
    fn test_det_3x3_sarrus() {
        let d = determinant(&m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 10.0],
        ]))
        .unwrap();
        assert_eq!(d.value, -3.0);
        assert!(d.steps.contains("Sarrus"));
        // Six-term decomposition in the fixed order
        assert!(d.steps.contains("= 50 + 84 + 96 − 105 − 48 − 80"));
        assert!(d.steps.contains("= 230 − 233"));
        assert!(d.steps.ends_with("= -3"));
    }

    #[test]
    fn test_det_4x4_recursive_with_note() {
        let d = determinant(&m(vec![
            vec![2.0, 0.0, 0.0, 0.0],
            vec![0.0, 3.0, 0.0, 0.0],
            vec![0.0, 0.0, 4.0, 0.0],
            vec![0.0, 0.0, 0.0, 5.0],
        ]))
        .unwrap();
        assert_eq!(d.value, 120.0);
        assert!(d.steps.contains("only for 1×1, 2×2 and 3×3"));
        assert!(d.steps.contains("computed recursively"));
    }

    #[test]
    fn test_recursive_agrees_with_closed_forms() {
        let two = m(vec![vec![3.0, -1.0], vec![2.5, 4.0]]);
        assert_eq!(
            determinant_value(&two).unwrap(),
            determinant(&two).unwrap().value
        );

        let three = m(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ]);
        assert_eq!(
            determinant_value(&three).unwrap(),
            determinant(&three).unwrap().value
        );
    }

    #[test]
    fn test_permutation_sign() {
        // Swapping two rows of the identity flips the sign
        let d = determinant_value(&m(vec![
            vec![0.0, 1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
        ]))
        .unwrap();
        assert_eq!(d, -1.0);
    }

    #[test]
    fn test_det_requires_square() {
        let err = determinant(&m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])).unwrap_err();
        assert_eq!(err, AlgebraError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn test_determinant_plugin() {
        let ctx = EvalContext::new();
        let a = Value::Matrix(m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
        let result = DeterminantFn.call(&[a], &ctx).unwrap();
        assert_eq!(result, Value::Scalar(-2.0));
    }
}
