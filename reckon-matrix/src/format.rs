//! Canonical display formatting
//!
//! Output is parser-compatible: entries joined by a single space, rows
//! joined by ";\n", so a formatted matrix pastes straight back into the
//! input box.

use reckon_core::{Matrix, Value, Vector};
use serde::{Deserialize, Serialize};

/// Display preferences owned by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Render non-integral values with exactly two fraction digits
    pub show_decimals: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_decimals: true,
        }
    }
}

/// Format a single number
///
/// Integral values never grow a trailing `.0`; non-integral values get
/// two fraction digits when decimals are on, full precision otherwise.
pub fn format_scalar(value: f64, opts: &FormatOptions) -> String {
    if opts.show_decimals && value.fract() != 0.0 {
        format!("{value:.2}")
    } else {
        format!("{value}")
    }
}

/// Format a matrix row by row
pub fn format_matrix(m: &Matrix, opts: &FormatOptions) -> String {
    m.as_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| format_scalar(v, opts))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(";\n")
}

/// Format a vector as a single space-joined row
pub fn format_vector(v: &Vector, opts: &FormatOptions) -> String {
    v.as_slice()
        .iter()
        .map(|&x| format_scalar(x, opts))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format any operation result
pub fn format_value(value: &Value, opts: &FormatOptions) -> String {
    match value {
        Value::Matrix(m) => format_matrix(m, opts),
        Value::Vector(v) => format_vector(v, opts),
        Value::Scalar(s) => format_scalar(*s, opts),
    }
}
