use std::process::ExitStatus;
use thiserror::Error;
use wktwarp_geometry::InvariantError;

/// Errors raised while delegating reprojection to the external tool.
///
/// None of these are retriable by this crate; the tool's own diagnostics are
/// propagated where available so the caller can decide what to do.
#[derive(Error, Debug)]
pub enum ReprojectionError {
	/// The tool could not be spawned or a pipe to it broke.
	#[error("failed to run the reprojection tool: {0}")]
	Io(#[from] std::io::Error),

	/// The tool ran but exited with a failure status.
	#[error("reprojection tool failed with {status}: {stderr}")]
	ToolFailure { status: ExitStatus, stderr: String },

	/// The tool emitted a different number of rows than it was fed.
	#[error("expected {expected} output rows, received {actual}")]
	RowCountMismatch { expected: usize, actual: usize },

	/// An output row does not hold two or three numeric tokens.
	#[error("malformed output row {line:?}: bad token {token:?}")]
	MalformedOutput { line: String, token: String },

	/// The reprojected points no longer satisfy the variant's invariants.
	#[error(transparent)]
	InvalidResult(#[from] InvariantError),
}
