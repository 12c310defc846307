use std::fmt::Display;

/// The five WKT variants handled by this crate.
///
/// Every variant carries the same payload shape, a flat point sequence, so
/// this tag plus the sequence fully describes a geometry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GeometryVariant {
	Point,
	PointZ,
	LineString,
	LineStringZ,
	Polygon,
}

impl GeometryVariant {
	/// The WKT keyword of this variant, including the `Z` marker where present.
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			GeometryVariant::Point => "POINT",
			GeometryVariant::PointZ => "POINT Z",
			GeometryVariant::LineString => "LINESTRING",
			GeometryVariant::LineStringZ => "LINESTRING Z",
			GeometryVariant::Polygon => "POLYGON",
		}
	}

	/// Whether every point of this variant carries an elevation.
	#[must_use]
	pub fn has_z(&self) -> bool {
		matches!(self, GeometryVariant::PointZ | GeometryVariant::LineStringZ)
	}

	/// The smallest point count a geometry of this variant can hold: one for
	/// points, two for linestrings and four for a closed polygon ring.
	#[must_use]
	pub fn min_points(&self) -> usize {
		match self {
			GeometryVariant::Point | GeometryVariant::PointZ => 1,
			GeometryVariant::LineString | GeometryVariant::LineStringZ => 2,
			GeometryVariant::Polygon => 4,
		}
	}

	/// Whether the point sequence must form a closed ring.
	#[must_use]
	pub fn is_ring(&self) -> bool {
		matches!(self, GeometryVariant::Polygon)
	}
}

impl Display for GeometryVariant {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
