use crate::{FormatError, Geometry, GeometryVariant, Point};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	/// Variant grammars in dispatch order, most specific first: the Z forms
	/// before their plain counterparts and POLYGON before LINESTRING. The
	/// first matching grammar claims the literal.
	static ref GRAMMARS: [(GeometryVariant, Regex); 5] = [
		(
			GeometryVariant::PointZ,
			Regex::new(r"^POINT ?Z \((?P<body>[\d. -]+)\)$").unwrap()
		),
		(
			GeometryVariant::LineStringZ,
			Regex::new(r"^LINESTRING ?Z \((?P<body>(?:[\d. -]+,)+[\d. -]+)\)$").unwrap()
		),
		(
			GeometryVariant::Polygon,
			Regex::new(r"^POLYGON ?\(\((?P<body>(?:[\d. -]+,){3,}[\d. -]+)\)\)$").unwrap()
		),
		(
			GeometryVariant::Point,
			Regex::new(r"^POINT ?\((?P<body>[\d. -]+)\)$").unwrap()
		),
		(
			GeometryVariant::LineString,
			Regex::new(r"^LINESTRING ?\((?P<body>(?:[\d. -]+,)+[\d. -]+)\)$").unwrap()
		),
	];
}

/// Parses a WKT literal into a [`Geometry`].
///
/// Surrounding whitespace is ignored, then the text is matched against the
/// variant grammars in dispatch order. Keywords are case sensitive, at most
/// one space is tolerated before the opening parenthesis, and the `Z` marker
/// requires a space before the parenthesized list. Coordinate tuples are
/// separated by commas and hold two tokens, or three for the Z variants.
///
/// Text matching no grammar fails with [`FormatError::UnsupportedFormat`],
/// a tuple token that is not a number fails with
/// [`FormatError::MalformedCoordinate`], and an unclosed polygon ring fails
/// with [`FormatError::Invariant`].
pub fn parse_wkt(text: &str) -> Result<Geometry, FormatError> {
	let trimmed = text.trim();

	let (variant, capture) = GRAMMARS
		.iter()
		.find_map(|(variant, regex)| regex.captures(trimmed).map(|capture| (*variant, capture)))
		.ok_or_else(|| FormatError::UnsupportedFormat(text.to_string()))?;

	let tuple_len = if variant.has_z() { 3 } else { 2 };
	let mut points = Vec::new();

	for (position, tuple) in capture["body"].split(',').enumerate() {
		let tokens = tuple.split_whitespace().collect::<Vec<_>>();
		if tokens.len() != tuple_len {
			return Err(FormatError::UnsupportedFormat(text.to_string()));
		}

		let x = parse_coordinate(tokens[0], position)?;
		let y = parse_coordinate(tokens[1], position)?;
		points.push(if variant.has_z() {
			Point::new_z(x, y, parse_coordinate(tokens[2], position)?)
		} else {
			Point::new(x, y)
		});
	}

	Ok(Geometry::try_new(variant, points)?)
}

fn parse_coordinate(token: &str, position: usize) -> Result<f64, FormatError> {
	token.parse().map_err(|_| FormatError::MalformedCoordinate {
		token: token.to_string(),
		position,
	})
}
