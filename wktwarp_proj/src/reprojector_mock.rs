use crate::{ReprojectionError, ReprojectorTrait};
use std::fmt::Debug;
use wktwarp_geometry::Point;

type MapFn = Box<dyn Fn(Point) -> Point + Send + Sync>;

enum MockBehavior {
	Identity,
	Map(MapFn),
	Replay(Vec<Point>),
}

/// A reprojector stub: applies a fixed point mapping or replays a canned
/// batch, without touching any external tool.
///
/// Useful for tests of everything above the reprojector seam, including
/// downstream crates.
pub struct MockReprojector {
	behavior: MockBehavior,
}

impl MockReprojector {
	/// Returns every batch unchanged.
	#[must_use]
	pub fn new() -> Self {
		Self {
			behavior: MockBehavior::Identity,
		}
	}

	/// Applies `map` to every point of every batch.
	#[must_use]
	pub fn mapping(map: impl Fn(Point) -> Point + Send + Sync + 'static) -> Self {
		Self {
			behavior: MockBehavior::Map(Box::new(map)),
		}
	}

	/// Replays one canned output batch regardless of the input values.
	///
	/// The batch length must match the request length; a mismatch fails the
	/// same way a miscounting tool would.
	#[must_use]
	pub fn replaying(points: Vec<Point>) -> Self {
		Self {
			behavior: MockBehavior::Replay(points),
		}
	}
}

impl Default for MockReprojector {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for MockReprojector {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.behavior {
			MockBehavior::Identity => f.write_str("MockReprojector(identity)"),
			MockBehavior::Map(_) => f.write_str("MockReprojector(map)"),
			MockBehavior::Replay(points) => f.debug_tuple("MockReprojector").field(points).finish(),
		}
	}
}

impl ReprojectorTrait for MockReprojector {
	fn reproject(
		&self,
		points: &[Point],
		_from: &str,
		_to: &str,
	) -> Result<Vec<Point>, ReprojectionError> {
		match &self.behavior {
			MockBehavior::Identity => Ok(points.to_vec()),
			MockBehavior::Map(map) => Ok(points.iter().map(|point| map(*point)).collect()),
			MockBehavior::Replay(replay) => {
				if replay.len() == points.len() {
					Ok(replay.clone())
				} else {
					Err(ReprojectionError::RowCountMismatch {
						expected: points.len(),
						actual: replay.len(),
					})
				}
			}
		}
	}
}
