use crate::{Geometry, GeometryVariant, Point};
use itertools::Itertools;

/// Policy for rendering coordinate values as text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NumberFormat {
	/// Always write a decimal point: `30` becomes `30.0`.
	#[default]
	Canonical,
	/// Write the value's shortest representation: `30`, `-4.25`.
	Verbatim,
}

impl NumberFormat {
	fn render(self, value: f64) -> String {
		let text = value.to_string();
		match self {
			NumberFormat::Canonical if !text.contains('.') => format!("{text}.0"),
			_ => text,
		}
	}
}

/// Serializes a geometry as a WKT literal.
///
/// The output always uses the canonical shape of its variant: a single space
/// inside each tuple, `", "` between tuples, a space around the `Z` marker
/// and doubled parentheses for polygons. Every literal built here parses
/// back through [`parse_wkt`](crate::parse_wkt) unchanged.
#[must_use]
pub fn build_wkt(geometry: &Geometry, format: NumberFormat) -> String {
	let body = geometry
		.points()
		.iter()
		.map(|point| format_tuple(point, format))
		.join(", ");

	match geometry.variant() {
		GeometryVariant::Point => format!("POINT({body})"),
		GeometryVariant::PointZ => format!("POINT Z ({body})"),
		GeometryVariant::LineString => format!("LINESTRING({body})"),
		GeometryVariant::LineStringZ => format!("LINESTRING Z ({body})"),
		GeometryVariant::Polygon => format!("POLYGON(({body}))"),
	}
}

fn format_tuple(point: &Point, format: NumberFormat) -> String {
	let x = format.render(point.x());
	let y = format.render(point.y());
	match point.z() {
		Some(z) => format!("{x} {y} {}", format.render(z)),
		None => format!("{x} {y}"),
	}
}
