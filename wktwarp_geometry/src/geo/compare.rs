use super::Point;

/// Absolute tolerances for comparing coordinates that went through external
/// floating-point computation.
///
/// Horizontal and vertical tolerances are separate because the two axes
/// historically used different precisions. `PartialEq` on [`Point`] stays
/// exact; approximate comparison is always an explicit operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
	pub xy: f64,
	pub z: f64,
}

impl Tolerance {
	/// Only bit-identical coordinates pass.
	#[must_use]
	pub fn exact() -> Self {
		Self { xy: 0.0, z: 0.0 }
	}

	/// Tolerances expressed as decimal digit counts: coordinates pass when
	/// they differ by at most half a unit in the given decimal place.
	#[must_use]
	pub fn decimals(xy: u8, z: u8) -> Self {
		Self {
			xy: 0.5 * 10f64.powi(-i32::from(xy)),
			z: 0.5 * 10f64.powi(-i32::from(z)),
		}
	}
}

impl Point {
	/// Compares two points within the given tolerance.
	///
	/// Points of different dimensionality never compare equal; two points
	/// without elevation compare on x and y only.
	#[must_use]
	pub fn approx_eq(&self, other: &Point, tolerance: Tolerance) -> bool {
		if (self.x() - other.x()).abs() > tolerance.xy {
			return false;
		}
		if (self.y() - other.y()).abs() > tolerance.xy {
			return false;
		}
		match (self.z(), other.z()) {
			(None, None) => true,
			(Some(a), Some(b)) => (a - b).abs() <= tolerance.z,
			_ => false,
		}
	}
}

/// Element-wise tolerance comparison of two point sequences. Sequences of
/// different length never compare equal and order matters.
#[must_use]
pub fn points_approx_eq(a: &[Point], b: &[Point], tolerance: Tolerance) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.approx_eq(q, tolerance))
}
