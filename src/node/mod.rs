pub mod error;

/// An RGB color sample.
pub type Color = ::image::Rgb<u8>;

/// Color returned by depth-limited lookups for leaves shallower than requested.
pub const HIGHLIGHT: Color = ::image::Rgb([255, 0, 0]);

/// Largest side length a tree accepts; keeps every coordinate inside `i32`.
pub const MAX_SIZE: u32 = 1 << 30;

/// Integer coordinate pair. `y` grows towards the "top" quadrants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	pub const fn new(x: i32, y: i32) -> Self {
		Point { x, y }
	}
}

/// One of the four directions around a center marker.
///
/// The discriminants are the child slot indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
	TopRight = 0,
	TopLeft = 1,
	BottomLeft = 2,
	BottomRight = 3,
}

impl Quadrant {
	/// All quadrants in child slot order.
	pub const ALL: [Quadrant; 4] = [
		Quadrant::TopRight,
		Quadrant::TopLeft,
		Quadrant::BottomLeft,
		Quadrant::BottomRight,
	];

	/// Classifies `p` against `center`.
	///
	/// A coordinate equal to the center's goes left on the x axis and
	/// bottom on the y axis. The branch order below is load-bearing.
	pub fn classify(center: Point, p: Point) -> Quadrant {
		if center.x < p.x && center.y < p.y {
			Quadrant::TopRight
		} else if center.x >= p.x && center.y < p.y {
			Quadrant::TopLeft
		} else if center.x >= p.x {
			Quadrant::BottomLeft
		} else {
			Quadrant::BottomRight
		}
	}

	/// Child slot index.
	pub fn index(self) -> usize {
		self as usize
	}

	/// The point `dim` away from `from` diagonally in this direction.
	pub fn step(self, from: Point, dim: i32) -> Point {
		match self {
			Quadrant::TopRight => Point::new(from.x + dim, from.y + dim),
			Quadrant::TopLeft => Point::new(from.x - dim, from.y + dim),
			Quadrant::BottomLeft => Point::new(from.x - dim, from.y - dim),
			Quadrant::BottomRight => Point::new(from.x + dim, from.y - dim),
		}
	}

	/// Minimum corner of the `dim`-sized square this quadrant spans
	/// around `center`.
	pub fn corner(self, center: Point, dim: i32) -> Point {
		match self {
			Quadrant::TopRight => center,
			Quadrant::TopLeft => Point::new(center.x - dim, center.y),
			Quadrant::BottomLeft => Point::new(center.x - dim, center.y - dim),
			Quadrant::BottomRight => Point::new(center.x, center.y - dim),
		}
	}
}

/// Four optionally empty child slots, indexed by `Quadrant`.
pub type Children = Box<[Option<Node>; 4]>;

/// Node in a spatial quadtree.
///
/// A leaf covers either one stored point (`point` set) or the whole
/// area its position in the tree implies (`point` empty, as built by
/// region compression). A branch holds no color, only the center marker
/// used to pick a child while descending.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
	Leaf {
		point: Option<Point>,
		color: Color,
	},
	Branch {
		center: Point,
		children: Children,
	},
}

impl Node {
	/// Leaf for a single inserted sample.
	pub fn sample(point: Point, color: Color) -> Node {
		Node::Leaf { point: Some(point), color }
	}

	/// Leaf spanning the node's whole area.
	pub fn region(color: Color) -> Node {
		Node::Leaf { point: None, color }
	}

	pub fn is_leaf(&self) -> bool {
		matches!(self, Node::Leaf { .. })
	}

	/// Number of nodes in this subtree, itself included.
	pub fn count(&self) -> usize {
		match self {
			Node::Leaf { .. } => 1,
			Node::Branch { children, .. } => {
				1 + children.iter().flatten().map(Node::count).sum::<usize>()
			}
		}
	}

	/// Number of leaves in this subtree.
	pub fn count_leaves(&self) -> usize {
		match self {
			Node::Leaf { .. } => 1,
			Node::Branch { children, .. } => {
				children.iter().flatten().map(Node::count_leaves).sum()
			}
		}
	}

	/// Longest path from this node down to a leaf, in edges.
	pub fn depth(&self) -> usize {
		match self {
			Node::Leaf { .. } => 0,
			Node::Branch { children, .. } => {
				1 + children.iter().flatten().map(Node::depth).max().unwrap_or(0)
			}
		}
	}
}

/// Checks that `size` can be a tree's side length.
pub fn validate_size(size: u32) -> Result<(), error::DimensionError> {
	if size == 0 {
		return Err(error::DimensionError::Empty);
	}
	if !size.is_power_of_two() {
		return Err(error::DimensionError::NonPowerOfTwo(size));
	}
	if size > MAX_SIZE {
		return Err(error::DimensionError::TooLarge(size));
	}
	Ok(())
}

pub mod compress;
pub mod image;
pub mod insert;
pub mod query;
pub mod rect;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classify_strictly_inside() {
		let c = Point::new(4, 4);
		assert_eq!(Quadrant::classify(c, Point::new(5, 5)), Quadrant::TopRight);
		assert_eq!(Quadrant::classify(c, Point::new(3, 5)), Quadrant::TopLeft);
		assert_eq!(Quadrant::classify(c, Point::new(3, 3)), Quadrant::BottomLeft);
		assert_eq!(Quadrant::classify(c, Point::new(5, 3)), Quadrant::BottomRight);
	}

	#[test]
	fn classify_ties_go_left_and_bottom() {
		let c = Point::new(4, 4);
		assert_eq!(Quadrant::classify(c, c), Quadrant::BottomLeft);
		assert_eq!(Quadrant::classify(c, Point::new(4, 5)), Quadrant::TopLeft);
		assert_eq!(Quadrant::classify(c, Point::new(5, 4)), Quadrant::BottomRight);
		assert_eq!(Quadrant::classify(c, Point::new(4, 3)), Quadrant::BottomLeft);
		assert_eq!(Quadrant::classify(c, Point::new(3, 4)), Quadrant::BottomLeft);
	}

	#[test]
	fn step_and_corner() {
		let c = Point::new(8, 8);
		assert_eq!(Quadrant::TopLeft.step(c, 2), Point::new(6, 10));
		assert_eq!(Quadrant::BottomRight.step(c, 2), Point::new(10, 6));
		assert_eq!(Quadrant::TopRight.corner(c, 4), c);
		assert_eq!(Quadrant::BottomLeft.corner(c, 4), Point::new(4, 4));
	}

	#[test]
	fn sizes() {
		assert!(validate_size(1).is_ok());
		assert!(validate_size(512).is_ok());
		assert_eq!(validate_size(0), Err(error::DimensionError::Empty));
		assert_eq!(validate_size(3), Err(error::DimensionError::NonPowerOfTwo(3)));
		assert_eq!(validate_size(1 << 31), Err(error::DimensionError::TooLarge(1 << 31)));
	}

	#[test]
	fn counting() {
		let black = ::image::Rgb([0, 0, 0]);
		let mut children: Children = Box::new([None, None, None, None]);
		children[0] = Some(Node::region(black));
		children[2] = Some(Node::region(black));
		let n = Node::Branch { center: Point::new(1, 1), children };
		assert_eq!(n.count(), 3);
		assert_eq!(n.count_leaves(), 2);
		assert_eq!(n.depth(), 1);
		assert!(!n.is_leaf());
	}
}
