use std::fmt::Debug;

/// A single coordinate tuple with an optional elevation.
///
/// The third component is tracked as `Option<f64>` because `POINT(1 2)` and
/// `POINT Z (1 2 0)` are different literals. A missing elevation stays
/// missing through parsing, reprojection and serialization; it is never
/// silently turned into `0.0`.
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Point {
	/// Constructs a 2D point without an elevation.
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	/// Constructs a 3D point with an elevation.
	#[must_use]
	pub fn new_z(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	/// Returns this point without its elevation.
	#[must_use]
	pub fn dropping_z(&self) -> Point {
		Point {
			x: self.x,
			y: self.y,
			z: None,
		}
	}

	/// Returns this point with the given elevation, replacing any present one.
	#[must_use]
	pub fn with_z(&self, z: f64) -> Point {
		Point {
			x: self.x,
			y: self.y,
			z: Some(z),
		}
	}
}

impl<T> From<&[T; 2]> for Point
where
	T: Copy + Into<f64>,
{
	fn from(value: &[T; 2]) -> Self {
		Point::new(value[0].into(), value[1].into())
	}
}

impl<T> From<&[T; 3]> for Point
where
	T: Copy + Into<f64>,
{
	fn from(value: &[T; 3]) -> Self {
		Point::new_z(value[0].into(), value[1].into(), value[2].into())
	}
}

impl From<[f64; 2]> for Point {
	fn from(value: [f64; 2]) -> Self {
		Point::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Point {
	fn from(value: [f64; 3]) -> Self {
		Point::new_z(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Point {
	fn from(value: (f64, f64)) -> Self {
		Point::new(value.0, value.1)
	}
}

impl From<(f64, f64, f64)> for Point {
	fn from(value: (f64, f64, f64)) -> Self {
		Point::new_z(value.0, value.1, value.2)
	}
}

impl Debug for Point {
	/// Formats the point as `[x, y]` or `[x, y, z]` for readability.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.x, self.y, z].fmt(f),
			None => [self.x, self.y].fmt(f),
		}
	}
}
