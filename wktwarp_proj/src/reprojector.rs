//! The narrow seam between geometry handling and coordinate transformation.
//!
//! Everything above [`ReprojectorTrait`] is testable without an external
//! tool: a stub implementation is enough.
//!
//! # Examples
//!
//! ```rust
//! use wktwarp_proj::{ReprojectionError, Reprojector, ReprojectorTrait};
//! use wktwarp_geometry::Point;
//!
//! #[derive(Debug)]
//! struct Nudge(f64);
//!
//! impl ReprojectorTrait for Nudge {
//!     fn reproject(
//!         &self,
//!         points: &[Point],
//!         _from: &str,
//!         _to: &str,
//!     ) -> Result<Vec<Point>, ReprojectionError> {
//!         Ok(points.iter().map(|p| Point::new(p.x() + self.0, p.y())).collect())
//!     }
//! }
//!
//! let reprojector: Reprojector = Box::new(Nudge(1.0));
//! let moved = reprojector.reproject(&[Point::new(1.0, 2.0)], "EPSG:4326", "EPSG:3857")?;
//! assert_eq!(moved, vec![Point::new(2.0, 2.0)]);
//! # Ok::<(), wktwarp_proj::ReprojectionError>(())
//! ```

use crate::ReprojectionError;
use std::fmt::Debug;
use wktwarp_geometry::Point;

/// Type alias for a boxed dynamic implementation of the `ReprojectorTrait`.
pub type Reprojector = Box<dyn ReprojectorTrait>;

/// A trait for transforming point batches between coordinate reference
/// systems.
///
/// Implementations guarantee that the output holds exactly one point per
/// input point, in the same order.
pub trait ReprojectorTrait: Debug + Send + Sync {
	/// Transforms all points from the `from` reference system to the `to`
	/// reference system in one batch.
	fn reproject(
		&self,
		points: &[Point],
		from: &str,
		to: &str,
	) -> Result<Vec<Point>, ReprojectionError>;
}

impl<T: ReprojectorTrait + ?Sized> ReprojectorTrait for Box<T> {
	fn reproject(
		&self,
		points: &[Point],
		from: &str,
		to: &str,
	) -> Result<Vec<Point>, ReprojectionError> {
		(**self).reproject(points, from, to)
	}
}
