//! Reprojection through a `cs2cs` style command line tool.
//!
//! The tool is spawned once per batch and spoken to over the line protocol
//! in [`crate::protocol`]: all rows are written to its stdin, then stdout
//! and stderr are drained completely and the exit status is reaped, on
//! every path.

use crate::{ReprojectionError, ReprojectorTrait, decode_rows, encode_rows};
use std::{
	io::Write,
	process::{Command, Stdio},
	thread,
};
use wktwarp_geometry::Point;

/// Axis conventions applied by the tool, expressed as its `-r` and `-s`
/// flags.
///
/// The line protocol always writes rows as `"y x z"` and reads output
/// verbatim; these flags make the tool reverse how it reads its input rows
/// and/or writes its output rows. The two directions are independent, so
/// all four combinations are modeled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AxisOrder {
	/// No reversal flags.
	#[default]
	Normal,
	/// `-r`: the tool reads input rows in reversed axis order.
	SwappedInput,
	/// `-s`: the tool writes output rows in reversed axis order.
	SwappedOutput,
	/// `-r -s`: both directions reversed.
	SwappedBoth,
}

impl AxisOrder {
	#[must_use]
	pub fn swaps_input(self) -> bool {
		matches!(self, AxisOrder::SwappedInput | AxisOrder::SwappedBoth)
	}

	#[must_use]
	pub fn swaps_output(self) -> bool {
		matches!(self, AxisOrder::SwappedOutput | AxisOrder::SwappedBoth)
	}
}

/// Runs an external `cs2cs` process for every batch of points.
///
/// The defaults match the stock PROJ tool on `PATH` with twelve output
/// decimals and no axis reversal flags.
#[derive(Clone, Debug)]
pub struct Cs2csReprojector {
	program: String,
	precision: u8,
	axis_order: AxisOrder,
}

impl Cs2csReprojector {
	#[must_use]
	pub fn new() -> Self {
		Self {
			program: "cs2cs".to_string(),
			precision: 12,
			axis_order: AxisOrder::Normal,
		}
	}

	/// Uses a different executable, e.g. an absolute path to `cs2cs`.
	#[must_use]
	pub fn with_program(mut self, program: impl Into<String>) -> Self {
		self.program = program.into();
		self
	}

	/// Sets the number of decimals the tool is asked to print.
	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = precision;
		self
	}

	/// Sets the axis reversal flags passed to the tool.
	#[must_use]
	pub fn with_axis_order(mut self, axis_order: AxisOrder) -> Self {
		self.axis_order = axis_order;
		self
	}

	/// Runs the tool without arguments and returns the first line it prints,
	/// which for stock `cs2cs` is its release banner.
	///
	/// Only a failure to spawn is an error; integration tests use this to
	/// skip when the tool is not installed.
	pub fn version(&self) -> Result<String, ReprojectionError> {
		let output = Command::new(&self.program)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.output()?;

		fn first_line(bytes: &[u8]) -> Option<String> {
			String::from_utf8_lossy(bytes)
				.lines()
				.find(|line| !line.trim().is_empty())
				.map(str::to_string)
		}

		Ok(first_line(&output.stderr)
			.or_else(|| first_line(&output.stdout))
			.unwrap_or_default())
	}
}

impl Default for Cs2csReprojector {
	fn default() -> Self {
		Self::new()
	}
}

impl ReprojectorTrait for Cs2csReprojector {
	fn reproject(
		&self,
		points: &[Point],
		from: &str,
		to: &str,
	) -> Result<Vec<Point>, ReprojectionError> {
		if points.is_empty() {
			return Ok(Vec::new());
		}

		let mut command = Command::new(&self.program);
		command.arg("-d").arg(self.precision.to_string());
		if self.axis_order.swaps_input() {
			command.arg("-r");
		}
		if self.axis_order.swaps_output() {
			command.arg("-s");
		}
		command
			.arg(from)
			.arg(to)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped());

		log::debug!("running {command:?}");

		let mut child = command.spawn()?;
		let rows = encode_rows(points);

		// Feeding stdin from a separate thread keeps large batches from
		// deadlocking against a filling stdout pipe.
		let stdin = child.stdin.take();
		let writer = thread::spawn(move || {
			if let Some(mut stdin) = stdin {
				// A tool that dies early closes the pipe; the exit status
				// reports what happened.
				let _ = stdin.write_all(rows.as_bytes());
			}
		});

		let output = child.wait_with_output()?;
		let _ = writer.join();

		if !output.status.success() {
			return Err(ReprojectionError::ToolFailure {
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		let stderr = String::from_utf8_lossy(&output.stderr);
		if !stderr.trim().is_empty() {
			log::warn!("{} wrote to stderr: {}", self.program, stderr.trim());
		}

		decode_rows(&String::from_utf8_lossy(&output.stdout), points.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_configures_all_fields() {
		let reprojector = Cs2csReprojector::new()
			.with_program("/opt/proj/bin/cs2cs")
			.with_precision(6)
			.with_axis_order(AxisOrder::SwappedBoth);
		assert_eq!(reprojector.program, "/opt/proj/bin/cs2cs");
		assert_eq!(reprojector.precision, 6);
		assert_eq!(reprojector.axis_order, AxisOrder::SwappedBoth);
	}

	#[test]
	fn axis_order_flag_mapping() {
		assert!(!AxisOrder::Normal.swaps_input());
		assert!(!AxisOrder::Normal.swaps_output());
		assert!(AxisOrder::SwappedInput.swaps_input());
		assert!(!AxisOrder::SwappedInput.swaps_output());
		assert!(!AxisOrder::SwappedOutput.swaps_input());
		assert!(AxisOrder::SwappedOutput.swaps_output());
		assert!(AxisOrder::SwappedBoth.swaps_input());
		assert!(AxisOrder::SwappedBoth.swaps_output());
	}

	#[test]
	fn empty_batch_never_spawns() -> Result<(), ReprojectionError> {
		let reprojector = Cs2csReprojector::new().with_program("/nonexistent/binary");
		assert_eq!(reprojector.reproject(&[], "EPSG:4326", "EPSG:6691")?, vec![]);
		Ok(())
	}

	#[test]
	fn missing_program_fails_with_io() {
		let reprojector = Cs2csReprojector::new().with_program("/nonexistent/binary");
		let error = reprojector
			.reproject(&[Point::new(1.0, 2.0)], "EPSG:4326", "EPSG:6691")
			.unwrap_err();
		assert!(matches!(error, ReprojectionError::Io(_)));

		assert!(reprojector.version().is_err());
	}
}
