use super::{Node, Point, Quadrant};

/// Axis-aligned rectangle with its minimum corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
	pub x: i32,
	pub y: i32,
	pub width: i32,
	pub height: i32,
}

impl Rect {
	pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
		Rect { x, y, width, height }
	}

	/// Square of side `dim` with minimum corner `corner`.
	pub fn square(corner: Point, dim: i32) -> Self {
		Rect::new(corner.x, corner.y, dim, dim)
	}

	/// Point used to sample this rectangle's color.
	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2, self.y + self.height / 2)
	}

	pub fn area(&self) -> i64 {
		self.width as i64 * self.height as i64
	}

	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
	}
}

impl Node {
	/// Appends the rectangles of this node's subdivisions to `out`.
	///
	/// `dim` is the side of each of this node's quadrants. Children are
	/// visited in slot order; each present child contributes its own
	/// quadrant (always, or only if it is a leaf when `leaves_only`) followed
	/// by its own subdivisions.
	pub fn subdivisions(&self, dim: i32, leaves_only: bool, out: &mut Vec<Rect>) {
		if let Node::Branch { center, children } = self {
			for q in Quadrant::ALL.iter() {
				if let Some(child) = &children[q.index()] {
					if child.is_leaf() || !leaves_only {
						out.push(Rect::square(q.corner(*center, dim), dim));
					}
					child.subdivisions(dim / 2, leaves_only, out);
				}
			}
		}
	}
}
