use crate::geo::GeometryVariant;
use thiserror::Error;

/// A structural rule of a geometry variant was violated.
///
/// Raised by [`Geometry::try_new`](crate::Geometry::try_new). On the parse
/// path the grammars already pin down point counts and elevation presence,
/// so the only violation a WKT literal can reach is [`InvariantError::OpenRing`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
	#[error("{variant} must contain exactly {expected} point, but contains {actual}")]
	ExactArity {
		variant: GeometryVariant,
		expected: usize,
		actual: usize,
	},

	#[error("{variant} must contain at least {expected} points, but contains {actual}")]
	MinArity {
		variant: GeometryVariant,
		expected: usize,
		actual: usize,
	},

	#[error("{variant} must not carry an elevation")]
	UnexpectedZ { variant: GeometryVariant },

	#[error("{variant} requires an elevation on every point")]
	MissingZ { variant: GeometryVariant },

	#[error("POLYGON ring must be closed, first and last point must be equal")]
	OpenRing,
}

/// A WKT literal could not be parsed, see [`parse_wkt`](crate::parse_wkt).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
	/// The text matches none of the supported variant grammars. Carries the
	/// rejected input verbatim.
	#[error("unsupported format: {0}")]
	UnsupportedFormat(String),

	/// A grammar matched, but one coordinate token is not a number.
	#[error("malformed coordinate {token:?} in tuple {position}")]
	MalformedCoordinate { token: String, position: usize },

	/// The coordinate list passed the grammar but violates a structural rule.
	#[error(transparent)]
	Invariant(#[from] InvariantError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invariant_messages() {
		assert_eq!(
			InvariantError::ExactArity {
				variant: GeometryVariant::PointZ,
				expected: 1,
				actual: 3
			}
			.to_string(),
			"POINT Z must contain exactly 1 point, but contains 3"
		);
		assert_eq!(
			InvariantError::OpenRing.to_string(),
			"POLYGON ring must be closed, first and last point must be equal"
		);
	}

	#[test]
	fn format_messages() {
		assert_eq!(
			FormatError::UnsupportedFormat("POINT(1)".to_string()).to_string(),
			"unsupported format: POINT(1)"
		);
		assert_eq!(
			FormatError::MalformedCoordinate {
				token: "1.2.3".to_string(),
				position: 0
			}
			.to_string(),
			"malformed coordinate \"1.2.3\" in tuple 0"
		);
	}

	#[test]
	fn invariant_converts_into_format_error() {
		let error = FormatError::from(InvariantError::OpenRing);
		assert_eq!(error, FormatError::Invariant(InvariantError::OpenRing));
		assert_eq!(
			error.to_string(),
			"POLYGON ring must be closed, first and last point must be equal"
		);
	}
}
