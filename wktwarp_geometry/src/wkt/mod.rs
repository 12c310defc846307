//! Parsing and serializing of the supported WKT subset.
//!
//! [`parse_wkt`] turns a literal into a typed [`crate::Geometry`],
//! [`build_wkt`] renders it back, and [`read_wkt`] pulls a literal out of
//! any [`std::io::Read`] source. Parsing and serializing are inverse
//! operations for canonical output.

mod build;
mod parse;
mod read;

pub use build::*;
pub use parse::*;
pub use read::*;
