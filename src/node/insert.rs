use log::{debug, warn};

use super::{Children, Color, Node, Point, Quadrant};

impl Node {
	/// Inserts a sample below this node.
	///
	/// `dim` is the step used to derive a new center if this node is a
	/// leaf that has to split; it halves on every level of descent.
	/// `parent` is the center marker of this node's parent (for the root,
	/// the domain's far corner `(size, size)`).
	pub fn insert(&mut self, point: Point, color: Color, dim: i32, parent: Point) {
		match self {
			Node::Branch { center, children } => {
				let center = *center;
				match &mut children[Quadrant::classify(center, point).index()] {
					Some(child) => child.insert(point, color, dim / 2, center),
					slot => *slot = Some(Node::sample(point, color)),
				}
			}
			Node::Leaf { point: Some(existing), color: existing_color } if *existing == point => {
				*existing_color = color;
			}
			Node::Leaf { point: None, .. } => {
				warn!("point ({}, {}) replaces a region leaf", point.x, point.y);
				*self = Node::sample(point, color);
			}
			Node::Leaf { point: Some(existing), color: existing_color } => {
				let (existing, existing_color) = (*existing, *existing_color);
				self.split(existing, existing_color, point, color, dim, parent);
			}
		}
	}

	/// Turns a point leaf into a branch holding the old and the new sample.
	///
	/// The new center sits `dim` away from `parent` in the direction of the
	/// quadrant the old sample occupies. If both samples fall in the same
	/// quadrant of that center, the split continues one level down with
	/// half the step.
	fn split(&mut self, old: Point, old_color: Color, new: Point, new_color: Color, dim: i32, parent: Point) {
		if dim == 0 {
			debug!(
				"no room to separate ({}, {}) from ({}, {}); keeping the newer sample",
				new.x, new.y, old.x, old.y
			);
			*self = Node::sample(new, new_color);
			return;
		}
		let center = Quadrant::classify(parent, old).step(parent, dim);
		let (q_old, q_new) = (Quadrant::classify(center, old), Quadrant::classify(center, new));

		let mut children: Children = Default::default();
		children[q_old.index()] = Some(Node::sample(old, old_color));
		if q_old != q_new {
			children[q_new.index()] = Some(Node::sample(new, new_color));
			*self = Node::Branch { center, children };
			return;
		}
		if dim / 2 == 0 {
			debug!(
				"({}, {}) and ({}, {}) collide at the finest step; keeping the newer sample",
				new.x, new.y, old.x, old.y
			);
			children[q_new.index()] = Some(Node::sample(new, new_color));
			*self = Node::Branch { center, children };
			return;
		}
		*self = Node::Branch { center, children };
		self.insert(new, new_color, dim, parent);
	}
}
