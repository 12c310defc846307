use super::{GeometryVariant, Point};
use crate::{
	error::{FormatError, InvariantError},
	wkt::{NumberFormat, build_wkt, parse_wkt},
};
use std::fmt::Debug;

/// A geometry of one of the supported WKT variants together with its ordered
/// point sequence.
///
/// A polygon stores its single outer ring as a flat sequence with the closing
/// point repeated. Construction goes through [`Geometry::try_new`], which
/// checks the variant's structural rules; a successfully built value is
/// immutable and therefore stays valid.
#[derive(Clone, PartialEq)]
pub struct Geometry {
	variant: GeometryVariant,
	points: Vec<Point>,
}

impl Geometry {
	/// Builds a geometry after checking the variant's invariants: point
	/// count, elevation presence and ring closure.
	pub fn try_new(variant: GeometryVariant, points: Vec<Point>) -> Result<Self, InvariantError> {
		match variant {
			GeometryVariant::Point | GeometryVariant::PointZ => {
				if points.len() != 1 {
					return Err(InvariantError::ExactArity {
						variant,
						expected: 1,
						actual: points.len(),
					});
				}
			}
			_ => {
				if points.len() < variant.min_points() {
					return Err(InvariantError::MinArity {
						variant,
						expected: variant.min_points(),
						actual: points.len(),
					});
				}
			}
		}

		if variant.has_z() {
			if points.iter().any(|p| !p.has_z()) {
				return Err(InvariantError::MissingZ { variant });
			}
		} else if points.iter().any(Point::has_z) {
			return Err(InvariantError::UnexpectedZ { variant });
		}

		if variant.is_ring() && points.first() != points.last() {
			return Err(InvariantError::OpenRing);
		}

		Ok(Self { variant, points })
	}

	/// Parses a WKT literal, see [`parse_wkt`].
	pub fn from_wkt(text: &str) -> Result<Self, FormatError> {
		parse_wkt(text)
	}

	/// Serializes this geometry as a WKT literal, see [`build_wkt`].
	#[must_use]
	pub fn to_wkt(&self, format: NumberFormat) -> String {
		build_wkt(self, format)
	}

	#[must_use]
	pub fn variant(&self) -> GeometryVariant {
		self.variant
	}

	#[must_use]
	pub fn points(&self) -> &[Point] {
		&self.points
	}

	#[must_use]
	pub fn into_points(self) -> Vec<Point> {
		self.points
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.points.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self.variant {
			GeometryVariant::Point => "Point",
			GeometryVariant::PointZ => "PointZ",
			GeometryVariant::LineString => "LineString",
			GeometryVariant::LineStringZ => "LineStringZ",
			GeometryVariant::Polygon => "Polygon",
		};
		f.debug_tuple(name).field(&self.points).finish()
	}
}
