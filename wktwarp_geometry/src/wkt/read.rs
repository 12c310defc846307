use super::parse_wkt;
use crate::Geometry;
use anyhow::Result;
use std::io::Read;

/// Reads a single WKT literal from a reader, e.g. a fixture file.
///
/// The whole input is taken as one literal; surrounding whitespace and a
/// trailing newline are ignored.
pub fn read_wkt(mut reader: impl Read) -> Result<Geometry> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	Ok(parse_wkt(&buffer)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryVariant;
	use std::io::Cursor;

	#[test]
	fn reads_literal_with_trailing_newline() -> Result<()> {
		let geometry = read_wkt(Cursor::new("LINESTRING(30 10, 10 30)\n"))?;
		assert_eq!(geometry.variant(), GeometryVariant::LineString);
		assert_eq!(geometry.len(), 2);
		Ok(())
	}

	#[test]
	fn reads_literal_from_file() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("point.txt");
		std::fs::write(&path, "POINT Z (30.0 10.0 5.0)\n")?;

		let geometry = read_wkt(std::fs::File::open(&path)?)?;
		assert_eq!(geometry.variant(), GeometryVariant::PointZ);
		Ok(())
	}

	#[test]
	fn propagates_parse_errors() {
		let result = read_wkt(Cursor::new("CIRCLE(1 2 3)"));
		assert!(result.is_err());
		assert_eq!(
			result.unwrap_err().to_string(),
			"unsupported format: CIRCLE(1 2 3)"
		);
	}

	#[test]
	fn fails_on_invalid_utf8() {
		assert!(read_wkt(Cursor::new(vec![0xff, 0xfe])).is_err());
	}
}
