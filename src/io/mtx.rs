// Matrix Market coordinate reader
//
// Reads the `coordinate real` flavour of the format into a COO matrix:
//
//   %%MatrixMarket matrix coordinate real general
//   % comment lines
//   nrows ncols nvals
//   row col value        (1-based, one entry per line)
//
// Entries keep file order, so the order a reduction visits them is the
// order they appear in the file. `symmetric` files are expanded: each
// off-diagonal entry is followed by its mirror.

use crate::core::error::{GraphBlasError, Result};
use crate::core::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symmetry {
    General,
    Symmetric,
}

fn invalid(line: usize, msg: impl std::fmt::Display) -> GraphBlasError {
    GraphBlasError::InvalidValue(format!("line {}: {}", line, msg))
}

fn parse_header(line: &str) -> Result<Symmetry> {
    let fields: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    if fields.len() != 5 || fields[0] != "%%matrixmarket" {
        return Err(invalid(1, "missing %%MatrixMarket header"));
    }
    if fields[1] != "matrix" || fields[2] != "coordinate" {
        return Err(invalid(1, "only 'matrix coordinate' files are supported"));
    }
    if fields[3] != "real" && fields[3] != "double" {
        return Err(invalid(1, "A must be double precision"));
    }
    match fields[4].as_str() {
        "general" => Ok(Symmetry::General),
        "symmetric" => Ok(Symmetry::Symmetric),
        other => Err(invalid(1, format!("unsupported symmetry '{}'", other))),
    }
}

fn parse_field<F: std::str::FromStr>(token: Option<&str>, line: usize, what: &str) -> Result<F> {
    token
        .ok_or_else(|| invalid(line, format!("missing {}", what)))?
        .parse()
        .map_err(|_| invalid(line, format!("malformed {}", what)))
}

/// Parse a Matrix Market `coordinate real` document into a `Matrix<f64>`
pub fn parse_matrix_market(text: &str) -> Result<Matrix<f64>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()));

    let (_, header) = lines.next().ok_or_else(|| invalid(1, "empty input"))?;
    let symmetry = parse_header(header)?;

    let mut body = lines.filter(|(_, l)| !l.is_empty() && !l.starts_with('%'));

    let (size_line, sizes) = body
        .next()
        .ok_or_else(|| invalid(2, "missing size line"))?;
    let mut tokens = sizes.split_whitespace();
    let nrows: usize = parse_field(tokens.next(), size_line, "row count")?;
    let ncols: usize = parse_field(tokens.next(), size_line, "column count")?;
    let declared: usize = parse_field(tokens.next(), size_line, "entry count")?;

    if let Some(cells) = nrows.checked_mul(ncols) {
        if declared > cells {
            return Err(GraphBlasError::DimensionMismatch(format!(
                "header declares {} entries for a {}x{} matrix",
                declared, nrows, ncols
            )));
        }
    }

    // one entry per line, so the text bounds what the header may claim
    let capacity = declared.min(text.lines().count());
    let mut rows = Vec::with_capacity(capacity);
    let mut cols = Vec::with_capacity(capacity);
    let mut values = Vec::with_capacity(capacity);
    let mut seen = 0;

    for (line, entry) in body {
        let mut tokens = entry.split_whitespace();
        let row: usize = parse_field(tokens.next(), line, "row index")?;
        let col: usize = parse_field(tokens.next(), line, "column index")?;
        let value: f64 = parse_field(tokens.next(), line, "value")?;
        if row == 0 || col == 0 {
            return Err(invalid(line, "indices are 1-based"));
        }

        rows.push(row - 1);
        cols.push(col - 1);
        values.push(value);
        if symmetry == Symmetry::Symmetric && row != col {
            rows.push(col - 1);
            cols.push(row - 1);
            values.push(value);
        }
        seen += 1;
    }

    if seen != declared {
        return Err(GraphBlasError::DimensionMismatch(format!(
            "header declares {} entries, found {}",
            declared, seen
        )));
    }

    Matrix::from_coo(nrows, ncols, rows, cols, values)
}
