use super::model::{DataError, Point, PointSet};

// ---------------------------------------------------------------------------
// Point list parser: "(1,2);(2,3);(3,5)"
// ---------------------------------------------------------------------------

/// Parse a semicolon-separated list of `(x,y)` pairs. Parentheses are
/// optional, whitespace is ignored, empty tokens (e.g. a trailing `;`) are
/// skipped. Anything else malformed is an error; no partial result.
pub fn parse_points(input: &str) -> Result<PointSet, DataError> {
    let mut points = Vec::new();

    for token in input.split(';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let inner = token.trim_start_matches('(').trim_end_matches(')');

        let mut parts = inner.split(',');
        let (x, y) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => return Err(DataError::BadPoint(token.to_string())),
        };

        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| DataError::BadPoint(token.to_string()))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| DataError::BadPoint(token.to_string()))?;

        points.push(Point { x, y });
    }

    if points.is_empty() {
        return Err(DataError::EmptyInput);
    }
    Ok(PointSet { points })
}

// ---------------------------------------------------------------------------
// Array parser: one comma-separated row per line
// ---------------------------------------------------------------------------

/// Parse row-major numeric text, one row per line. Blank lines are skipped;
/// rows must be equal-length.
pub fn parse_rows(input: &str) -> Result<Vec<Vec<f64>>, DataError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (row_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for token in line.split(',') {
            let token = token.trim();
            let value: f64 = token.parse().map_err(|_| DataError::BadNumber {
                row: row_no,
                token: token.to_string(),
            })?;
            row.push(value);
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(DataError::RaggedRow {
                    row: row_no,
                    got: row.len(),
                    expected: first.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DataError::EmptyInput);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_pairs() {
        let set = parse_points("(1,2);(2,3)").unwrap();
        assert_eq!(
            set.points,
            vec![Point { x: 1.0, y: 2.0 }, Point { x: 2.0, y: 3.0 }]
        );
    }

    #[test]
    fn parens_are_optional_and_trailing_separator_is_fine() {
        let set = parse_points(" 1 , 2 ; (3.5, -4) ; ").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.points[1], Point { x: 3.5, y: -4.0 });
    }

    #[test]
    fn malformed_points_are_rejected() {
        assert!(matches!(
            parse_points("(1,2);(oops,3)"),
            Err(DataError::BadPoint(_))
        ));
        assert!(matches!(
            parse_points("(1,2,3)"),
            Err(DataError::BadPoint(_))
        ));
        assert_eq!(parse_points("  "), Err(DataError::EmptyInput));
    }

    #[test]
    fn parses_rows() {
        let rows = parse_rows("1,2,3\n4,5,6").unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_rows("1,2\n\n3,4\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            parse_rows("1,2,3\n4,5"),
            Err(DataError::RaggedRow {
                row: 1,
                got: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn non_numeric_rows_are_rejected() {
        assert!(matches!(
            parse_rows("1,x,3"),
            Err(DataError::BadNumber { row: 0, .. })
        ));
    }
}
