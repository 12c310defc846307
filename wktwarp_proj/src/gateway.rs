use crate::{ReprojectionError, ReprojectorTrait};
use wktwarp_geometry::{Geometry, Point};

/// Geometry-level reprojection on top of any [`ReprojectorTrait`].
///
/// The gateway hands a geometry's points to the reprojector and rebuilds a
/// geometry of the same variant from the result. Elevations are fixed up
/// according to the original variant: 2D variants drop whatever elevation
/// the tool echoed back (the wire pads them with zero), 3D variants take
/// the tool's elevation and fall back to the original one when the tool
/// returned a two value row. Point order is preserved end to end.
///
/// # Examples
///
/// ```rust
/// use wktwarp_proj::{MockReprojector, ReprojectionGateway};
/// use wktwarp_geometry::{NumberFormat, parse_wkt};
///
/// let gateway = ReprojectionGateway::new(MockReprojector::new());
/// let geometry = parse_wkt("LINESTRING(30.0 10.0, 10.0 30.0)")?;
/// let reprojected = gateway.reproject(geometry, "EPSG:4326", "EPSG:4326")?;
/// assert_eq!(
///     reprojected.to_wkt(NumberFormat::Canonical),
///     "LINESTRING(30.0 10.0, 10.0 30.0)"
/// );
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug)]
pub struct ReprojectionGateway<R: ReprojectorTrait> {
	reprojector: R,
}

impl<R: ReprojectorTrait> ReprojectionGateway<R> {
	pub fn new(reprojector: R) -> Self {
		Self { reprojector }
	}

	/// Reprojects a geometry between the two reference systems, preserving
	/// its variant.
	pub fn reproject(
		&self,
		geometry: Geometry,
		from: &str,
		to: &str,
	) -> Result<Geometry, ReprojectionError> {
		let variant = geometry.variant();
		let original = geometry.into_points();
		let transformed = self.reprojector.reproject(&original, from, to)?;

		let points = if variant.has_z() {
			transformed
				.iter()
				.zip(&original)
				.map(|(new, old)| match old.z() {
					Some(z) if !new.has_z() => new.with_z(z),
					_ => *new,
				})
				.collect()
		} else {
			transformed.iter().map(Point::dropping_z).collect()
		};

		Ok(Geometry::try_new(variant, points)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MockReprojector;
	use anyhow::Result;
	use rstest::rstest;
	use wktwarp_geometry::{GeometryVariant, NumberFormat, parse_wkt};

	#[rstest]
	#[case("POINT(30.0 10.0)", GeometryVariant::Point)]
	#[case("POINT Z (30.0 10.0 5.0)", GeometryVariant::PointZ)]
	#[case("LINESTRING(30.0 10.0, 10.0 30.0)", GeometryVariant::LineString)]
	#[case("LINESTRING Z (30.0 10.0 1.0, 10.0 30.0 2.0)", GeometryVariant::LineStringZ)]
	#[case(
		"POLYGON((30.0 10.0, 40.0 40.0, 20.0 40.0, 30.0 10.0))",
		GeometryVariant::Polygon
	)]
	fn preserves_variant_and_points(#[case] wkt: &str, #[case] variant: GeometryVariant) -> Result<()> {
		let gateway = ReprojectionGateway::new(MockReprojector::new());
		let reprojected = gateway.reproject(parse_wkt(wkt)?, "EPSG:4326", "EPSG:6691")?;
		assert_eq!(reprojected.variant(), variant);
		assert_eq!(reprojected.to_wkt(NumberFormat::Canonical), wkt);
		Ok(())
	}

	#[test]
	fn strips_echoed_elevation_for_2d_variants() -> Result<()> {
		let gateway = ReprojectionGateway::new(MockReprojector::mapping(|p| p.with_z(0.0)));
		let reprojected = gateway.reproject(
			parse_wkt("LINESTRING(30.0 10.0, 10.0 30.0)")?,
			"EPSG:4326",
			"EPSG:6691",
		)?;
		assert_eq!(reprojected.variant(), GeometryVariant::LineString);
		assert!(reprojected.points().iter().all(|p| !p.has_z()));
		Ok(())
	}

	#[test]
	fn reattaches_original_elevation_for_3d_variants() -> Result<()> {
		let gateway = ReprojectionGateway::new(MockReprojector::mapping(|p| p.dropping_z()));
		let reprojected = gateway.reproject(
			parse_wkt("LINESTRING Z (30.0 10.0 1.5, 10.0 30.0 2.5)")?,
			"EPSG:4326",
			"EPSG:6691",
		)?;
		assert_eq!(
			reprojected.points().iter().map(|p| p.z()).collect::<Vec<_>>(),
			vec![Some(1.5), Some(2.5)]
		);
		Ok(())
	}

	#[test]
	fn prefers_tool_elevation_when_present() -> Result<()> {
		let gateway =
			ReprojectionGateway::new(MockReprojector::mapping(|p| p.with_z(p.z().unwrap_or(0.0) + 100.0)));
		let reprojected = gateway.reproject(
			parse_wkt("POINT Z (30.0 10.0 5.0)")?,
			"EPSG:4326",
			"EPSG:6691",
		)?;
		assert_eq!(reprojected.points()[0].z(), Some(105.0));
		Ok(())
	}

	#[test]
	fn preserves_point_order() -> Result<()> {
		let gateway = ReprojectionGateway::new(MockReprojector::mapping(|p| {
			Point::new(p.x() + 1.0, p.y() - 1.0)
		}));
		let reprojected = gateway.reproject(
			parse_wkt("LINESTRING(1.0 1.0, 2.0 2.0, 3.0 3.0)")?,
			"EPSG:4326",
			"EPSG:6691",
		)?;
		assert_eq!(
			reprojected.to_wkt(NumberFormat::Canonical),
			"LINESTRING(2.0 0.0, 3.0 1.0, 4.0 2.0)"
		);
		Ok(())
	}

	#[test]
	fn propagates_reprojector_failure() -> Result<()> {
		let gateway = ReprojectionGateway::new(MockReprojector::replaying(vec![]));
		let error = gateway
			.reproject(parse_wkt("POINT(1.0 2.0)")?, "EPSG:4326", "EPSG:6691")
			.unwrap_err();
		assert!(matches!(error, ReprojectionError::RowCountMismatch { .. }));
		Ok(())
	}

	#[test]
	fn surfaces_a_ring_broken_by_the_tool() -> Result<()> {
		let gateway = ReprojectionGateway::new(MockReprojector::replaying(vec![
			Point::new(0.0, 0.0),
			Point::new(1.0, 0.0),
			Point::new(1.0, 1.0),
			Point::new(9.0, 9.0),
		]));
		let error = gateway
			.reproject(
				parse_wkt("POLYGON((30.0 10.0, 40.0 40.0, 20.0 40.0, 30.0 10.0))")?,
				"EPSG:4326",
				"EPSG:6691",
			)
			.unwrap_err();
		assert!(matches!(error, ReprojectionError::InvalidResult(_)));
		Ok(())
	}
}
