//! Typed geometries for the WKT subset used in coordinate interchange:
//! `POINT`, `POINT Z`, `LINESTRING`, `LINESTRING Z` and single-ring `POLYGON`.

mod error;
mod geo;
pub mod wkt;

pub use error::*;
pub use geo::*;
pub use wkt::*;
