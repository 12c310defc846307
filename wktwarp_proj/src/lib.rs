//! Reprojection of WKT geometries through an external `cs2cs` style tool.
//!
//! The crate is layered around one narrow seam: [`ReprojectorTrait`]
//! transforms point batches between coordinate reference systems.
//! [`Cs2csReprojector`] implements it by piping the line protocol in
//! [`protocol`] through a child process, [`MockReprojector`] implements it
//! for tests, and [`ReprojectionGateway`] lifts either one to whole
//! geometries while preserving their variant and dimensionality.

mod error;
mod gateway;
pub mod protocol;
mod reprojector;
mod reprojector_cs2cs;
mod reprojector_mock;

pub use error::*;
pub use gateway::*;
pub use protocol::*;
pub use reprojector::*;
pub use reprojector_cs2cs::*;
pub use reprojector_mock::*;
