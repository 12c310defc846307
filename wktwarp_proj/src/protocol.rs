use crate::ReprojectionError;
use wktwarp_geometry::Point;

/// Encodes points as the tool's line protocol: one row per point, written as
/// `"y x z"`.
///
/// The first two values are deliberately swapped relative to the point's own
/// field order; geographic reference systems commonly declare latitude first
/// while WKT stores x as longitude. Points without an elevation are padded
/// with a literal `0`. That zero exists only on the wire, the caller strips
/// the elevation again when the geometry is 2D.
#[must_use]
pub fn encode_rows(points: &[Point]) -> String {
	let mut text = String::new();
	for point in points {
		let z = point.z().unwrap_or(0.0);
		text.push_str(&format!("{} {} {z}\n", point.y(), point.x()));
	}
	text
}

/// Decodes the tool's stdout back into points.
///
/// Rows are taken verbatim as `x y` or `x y z`, tokens separated by spaces
/// or tabs; no un-swapping happens on the way back. The number of non-empty
/// rows must equal `expected_len` exactly, a surplus or shortfall means the
/// tool and the caller disagree about the batch and the whole result is
/// rejected.
pub fn decode_rows(text: &str, expected_len: usize) -> Result<Vec<Point>, ReprojectionError> {
	let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
	if rows.len() != expected_len {
		return Err(ReprojectionError::RowCountMismatch {
			expected: expected_len,
			actual: rows.len(),
		});
	}

	let mut points = Vec::with_capacity(rows.len());
	for row in rows {
		let tokens: Vec<&str> = row.split_whitespace().collect();
		if !(2..=3).contains(&tokens.len()) {
			return Err(malformed(row, row.trim()));
		}

		let x = parse_value(row, tokens[0])?;
		let y = parse_value(row, tokens[1])?;
		points.push(match tokens.get(2) {
			Some(token) => Point::new_z(x, y, parse_value(row, token)?),
			None => Point::new(x, y),
		});
	}
	Ok(points)
}

fn parse_value(row: &str, token: &str) -> Result<f64, ReprojectionError> {
	let value: f64 = token.parse().map_err(|_| malformed(row, token))?;
	// The tool marks unprojectable points with "inf" rows.
	if value.is_finite() {
		Ok(value)
	} else {
		Err(malformed(row, token))
	}
}

fn malformed(row: &str, token: &str) -> ReprojectionError {
	ReprojectionError::MalformedOutput {
		line: row.trim().to_string(),
		token: token.to_string(),
	}
}
