//! A hybrid spatial quadtree.
//!
//! The same tree shape serves two independent uses:
//!
//! - *region compression*: a square color grid is split top-down into
//!   averaged blocks, stopping wherever a block's color error is within a
//!   tolerance ([`SpatialQuadTree::build_from_grid`]);
//! - *point storage*: single `(x, y, color)` samples are inserted one by
//!   one, and the tree splits around them as they arrive
//!   ([`SpatialQuadTree::new_empty`], [`SpatialQuadTree::insert`]).

pub mod node;

pub use node::compress::ColorGrid;
pub use node::error::DimensionError;
pub use node::image::RenderOptions;
pub use node::rect::Rect;
pub use node::{Children, Color, Node, Point, Quadrant, HIGHLIGHT, MAX_SIZE};

use log::{debug, warn};

/// Which constructor built a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Built from a color grid; leaves span blocks of samples.
	Region,
	/// Grown by point insertion; leaves hold single samples.
	Point,
}

/// Quadtree over the square domain `[0, size) x [0, size)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialQuadTree {
	root: Option<Node>,
	size: u32,
	mode: Mode,
}

impl SpatialQuadTree {
	/// Compresses `grid` into a tree.
	///
	/// Regions whose color error is at most `error_tolerance` are stored
	/// as one averaged leaf; `0.` is lossless. Negative or NaN tolerances
	/// are treated as `0.`.
	pub fn build_from_grid(grid: &ColorGrid, error_tolerance: f32) -> SpatialQuadTree {
		let tolerance = if error_tolerance >= 0. {
			error_tolerance
		} else {
			warn!("error tolerance {} clamped to 0", error_tolerance);
			0.
		};
		let size = grid.size();
		let root = Node::compress(grid, 0, 0, size, size, tolerance);
		debug!(
			"compressed {0}x{0} grid at tolerance {1}: {2} nodes, {3} leaves",
			size,
			tolerance,
			root.count(),
			root.count_leaves()
		);
		SpatialQuadTree { root: Some(root), size, mode: Mode::Region }
	}

	/// Validates `rows` and compresses them.
	pub fn from_rows(rows: &[Vec<Color>], error_tolerance: f32) -> Result<SpatialQuadTree, DimensionError> {
		Ok(Self::build_from_grid(&ColorGrid::from_rows(rows)?, error_tolerance))
	}

	/// Empty tree for point insertion. `size` must be a power of two.
	pub fn new_empty(size: u32) -> Result<SpatialQuadTree, DimensionError> {
		node::validate_size(size)?;
		Ok(SpatialQuadTree { root: None, size, mode: Mode::Point })
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn root(&self) -> Option<&Node> {
		self.root.as_ref()
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Stores `color` at `point`.
	///
	/// The first sample becomes the root. Later samples descend to an empty
	/// slot, or split the point leaf they land on. A sample at the exact
	/// coordinates of an earlier one replaces its color.
	pub fn insert(&mut self, point: Point, color: Color) {
		let size = self.size as i32;
		match &mut self.root {
			Some(root) => root.insert(point, color, size / 2, Point::new(size, size)),
			root => *root = Some(Node::sample(point, color)),
		}
	}

	/// Point that steers descent for a lookup of `(x, y)`.
	///
	/// Region trees treat a sample as the unit cell `[x, x+1) x [y, y+1)`
	/// and steer by its far corner, so samples on a center line land in
	/// the block that was built from them.
	fn probe(&self, target: Point) -> Point {
		match self.mode {
			Mode::Region => Point::new(target.x.saturating_add(1), target.y.saturating_add(1)),
			Mode::Point => target,
		}
	}

	/// Color at `(x, y)`, or `None` if nothing covers that exact location.
	pub fn query(&self, x: i32, y: i32) -> Option<Color> {
		let target = Point::new(x, y);
		self.root.as_ref()?.get(self.probe(target), target)
	}

	/// Diagnostic lookup: like `query`, but returns `HIGHLIGHT` where the
	/// covering leaf is at depth `min_depth` or shallower.
	pub fn query_with_min_depth(&self, x: i32, y: i32, min_depth: isize) -> Option<Color> {
		let target = Point::new(x, y);
		self.root.as_ref()?.get_with_min_depth(self.probe(target), target, min_depth)
	}

	/// Rectangles of the tree's subdivisions, in child slot order.
	///
	/// With `leaves_only`, only the rectangles of leaves are listed. A tree
	/// whose root is a leaf yields the whole domain.
	pub fn list_subdivisions(&self, leaves_only: bool) -> Vec<Rect> {
		let mut out = Vec::new();
		match &self.root {
			None => (),
			Some(root) if root.is_leaf() => {
				out.push(Rect::new(0, 0, self.size as i32, self.size as i32));
			}
			Some(root) => root.subdivisions(self.size as i32 / 2, leaves_only, &mut out),
		}
		out
	}

	/// Total number of nodes; 0 for an empty tree.
	pub fn count_nodes(&self) -> usize {
		self.root.as_ref().map_or(0, Node::count)
	}

	/// Number of leaf nodes.
	pub fn count_leaves(&self) -> usize {
		self.root.as_ref().map_or(0, Node::count_leaves)
	}

	/// Longest root-to-leaf path, in edges.
	pub fn depth(&self) -> usize {
		self.root.as_ref().map_or(0, Node::depth)
	}
}
