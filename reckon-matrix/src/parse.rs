//! Free-form and grid input parsing
//!
//! Text mode: rows separated by newlines or semicolons, entries separated
//! by whitespace. Grid mode: a fixed rows×cols array of cell strings where
//! a blank cell reads as zero. Parsing is all-or-nothing; a single bad
//! token fails the whole call.

use reckon_core::{Matrix, ParseError, Vector};

/// Parse matrix text like `"1 2 3; 4 5 6"` or the same with newlines
pub fn parse_matrix(input: &str) -> Result<Matrix, ParseError> {
    let mut rows = Vec::new();
    for line in input.split(['\n', ';']) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(line)?);
    }
    Matrix::from_rows(rows)
}

/// Parse a grid of per-cell strings; blank cells read as zero
pub fn parse_matrix_cells(cells: &[Vec<String>]) -> Result<Matrix, ParseError> {
    let mut rows = Vec::with_capacity(cells.len());
    for row in cells {
        let mut parsed = Vec::with_capacity(row.len());
        for cell in row {
            parsed.push(parse_cell(cell)?);
        }
        rows.push(parsed);
    }
    Matrix::from_rows(rows)
}

/// Parse vector text: a single run of whitespace-separated numbers
pub fn parse_vector(input: &str) -> Result<Vector, ParseError> {
    let entries = input
        .split_whitespace()
        .map(parse_entry)
        .collect::<Result<Vec<_>, _>>()?;
    if entries.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(Vector::from_vec(entries))
}

/// Parse a vector from a cell grid; reads the first column, blank cells as zero
pub fn parse_vector_cells(cells: &[Vec<String>]) -> Result<Vector, ParseError> {
    let mut entries = Vec::with_capacity(cells.len());
    for row in cells {
        match row.first() {
            Some(cell) => entries.push(parse_cell(cell)?),
            None => entries.push(0.0),
        }
    }
    if entries.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(Vector::from_vec(entries))
}

fn parse_row(line: &str) -> Result<Vec<f64>, ParseError> {
    line.split_whitespace().map(parse_entry).collect()
}

fn parse_cell(cell: &str) -> Result<f64, ParseError> {
    let cell = cell.trim();
    if cell.is_empty() {
        Ok(0.0)
    } else {
        parse_entry(cell)
    }
}

// Non-finite values are rejected too: matrices hold finite reals only.
fn parse_entry(token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::not_a_number(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_matrix_semicolon_rows() {
        let m = parse_matrix("1 2 3; 4 5 6").unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.row(1), Some([4.0, 5.0, 6.0].as_slice()));
    }

    #[test]
    fn test_parse_matrix_newline_rows() {
        let m = parse_matrix("1 2\n3 4\n").unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
    }

    #[test]
    fn test_parse_matrix_drops_blank_rows() {
        let m = parse_matrix("1 2;\n\n;3 4").unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
    }

    #[test]
    fn test_parse_matrix_jagged() {
        assert_eq!(
            parse_matrix("1 2; 3"),
            Err(ParseError::JaggedRows {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_parse_matrix_empty() {
        assert_eq!(parse_matrix(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_matrix(" ;\n; "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_matrix_bad_token() {
        assert_eq!(
            parse_matrix("1 x; 2 3"),
            Err(ParseError::not_a_number("x"))
        );
    }

    #[test]
    fn test_parse_matrix_rejects_non_finite() {
        assert_eq!(
            parse_matrix("1 inf"),
            Err(ParseError::not_a_number("inf"))
        );
        assert_eq!(
            parse_matrix("NaN 2"),
            Err(ParseError::not_a_number("NaN"))
        );
    }

    #[test]
    fn test_parse_matrix_cells_blank_is_zero() {
        let m = parse_matrix_cells(&grid(&[&["1", ""], &["", "4"]])).unwrap();
        assert_eq!(m.row(0), Some([1.0, 0.0].as_slice()));
        assert_eq!(m.row(1), Some([0.0, 4.0].as_slice()));
    }

    #[test]
    fn test_parse_matrix_cells_bad_cell_fails_whole_parse() {
        assert_eq!(
            parse_matrix_cells(&grid(&[&["1", "2"], &["x", "4"]])),
            Err(ParseError::not_a_number("x"))
        );
    }

    #[test]
    fn test_parse_vector() {
        let v = parse_vector("  3   5 ").unwrap();
        assert_eq!(v.as_slice(), &[3.0, 5.0]);
        assert_eq!(parse_vector("   "), Err(ParseError::EmptyInput));
        assert_eq!(parse_vector("1 b"), Err(ParseError::not_a_number("b")));
    }

    #[test]
    fn test_parse_vector_cells_reads_first_column() {
        let v = parse_vector_cells(&grid(&[&["1", "9"], &["", "9"], &["3", "9"]])).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_negative_and_decimal_tokens() {
        let m = parse_matrix("-1.5 2e2; 0.25 -0").unwrap();
        assert_eq!(m.get(0, 0), Some(-1.5));
        assert_eq!(m.get(0, 1), Some(200.0));
        assert_eq!(m.get(1, 0), Some(0.25));
    }
}
