use super::{Color, Node, Point, Quadrant, HIGHLIGHT};

impl Node {
	/// Descends towards `probe` and reports the color stored for `target`.
	///
	/// `probe` picks the child at each branch; `target` is compared
	/// against the coordinates of a point leaf. Region leaves answer for
	/// any target.
	pub fn get(&self, probe: Point, target: Point) -> Option<Color> {
		let mut node = self;
		loop {
			match node {
				Node::Branch { center, children } => {
					node = children[Quadrant::classify(*center, probe).index()].as_ref()?;
				}
				Node::Leaf { point, color } => {
					return match point {
						Some(p) if *p != target => None,
						_ => Some(*color),
					};
				}
			}
		}
	}

	/// Like `get`, but any leaf reached within `min_depth` steps reports
	/// `HIGHLIGHT` instead of its own color.
	///
	/// The counter starts at `min_depth` and drops by one on each descent;
	/// a leaf reached while it is still `>= 0` is highlighted.
	pub fn get_with_min_depth(&self, probe: Point, target: Point, min_depth: isize) -> Option<Color> {
		match self {
			Node::Branch { center, children } => children[Quadrant::classify(*center, probe).index()]
				.as_ref()?
				.get_with_min_depth(probe, target, min_depth - 1),
			Node::Leaf { .. } => {
				let c = self.get(probe, target)?;
				if min_depth >= 0 {
					Some(HIGHLIGHT)
				} else {
					Some(c)
				}
			}
		}
	}
}
