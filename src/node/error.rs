use thiserror::Error;

/// Reason why a grid or a tree size couldn't be accepted.
///
/// Construction fails before any node is built, so no partial tree
/// is ever observable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
	/// The grid has no rows, or a requested tree size was 0.
	#[error("grid is empty")]
	Empty,
	/// A row's length differs from the first row's length.
	#[error("row {row} has {len} samples, expected {expected}")]
	RaggedRows {
		row: usize,
		len: usize,
		expected: usize,
	},
	/// The grid's dimensions are not equal; the grid is not a square.
	#[error("grid is {width}x{height}, not square")]
	NonSquare {
		width: usize,
		height: usize,
	},
	/// The side length is not a power of two.
	#[error("side length {0} is not a power of two")]
	NonPowerOfTwo(u32),
	/// The side length does not leave room for `i32` coordinates.
	#[error("side length {0} is too large")]
	TooLarge(u32),
}
