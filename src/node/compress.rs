use super::error::DimensionError;
use super::{Children, Color, Node, Point};

/// Square grid of color samples with a power-of-two side length.
///
/// Samples are stored row by row; `get(x, y)` reads row `y`, column `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorGrid {
	size: u32,
	samples: Vec<Color>,
}

impl ColorGrid {
	/// Validates and copies a grid given as rows.
	pub fn from_rows(rows: &[Vec<Color>]) -> Result<ColorGrid, DimensionError> {
		let height = rows.len();
		let width = match rows.first() {
			Some(r) => r.len(),
			None => return Err(DimensionError::Empty),
		};
		if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
			return Err(DimensionError::RaggedRows { row, len: r.len(), expected: width });
		}
		if width != height {
			return Err(DimensionError::NonSquare { width, height });
		}
		if width > super::MAX_SIZE as usize {
			return Err(DimensionError::TooLarge(width.min(u32::MAX as usize) as u32));
		}
		super::validate_size(width as u32)?;
		Ok(ColorGrid {
			size: width as u32,
			samples: rows.iter().flat_map(|r| r.iter().copied()).collect(),
		})
	}

	/// Builds a grid from already row-major samples.
	///
	/// `samples.len()` must equal `size * size`; used by callers that
	/// validated `size` themselves.
	pub(crate) fn from_raw(size: u32, samples: Vec<Color>) -> ColorGrid {
		debug_assert_eq!(samples.len(), size as usize * size as usize);
		ColorGrid { size, samples }
	}

	/// Side length.
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Sample at column `x`, row `y`.
	///
	/// # Panics
	///
	/// Panics if `x` or `y` is not below `size()`.
	pub fn get(&self, x: u32, y: u32) -> Color {
		assert!(x < self.size && y < self.size, "({}, {}) outside {}x{} grid", x, y, self.size, self.size);
		self.samples[y as usize * self.size as usize + x as usize]
	}
}

/// Average color of a region, or `None` if the region's error exceeds
/// `tolerance` and it must be subdivided.
///
/// Each channel is averaged with rounding to the nearest integer. The
/// region error is the sum over all three channels of the absolute
/// deviations from those averages, divided by 3.
fn region_color(grid: &ColorGrid, x: u32, y: u32, w: u32, h: u32, tolerance: f32) -> Option<Color> {
	let area = w as u64 * h as u64;
	if area == 0 {
		return None;
	}
	let samples = || (y..y + h).flat_map(move |row| (x..x + w).map(move |col| grid.get(col, row)));

	let sums = samples().fold([0u64; 3], |mut s, c| {
		for ch in 0..3 {
			s[ch] += c.0[ch] as u64;
		}
		s
	});
	// Rounds half up.
	let mut avg = [0u8; 3];
	for ch in 0..3 {
		avg[ch] = ((2 * sums[ch] + area) / (2 * area)) as u8;
	}

	let err = samples().fold(0u64, |e, c| {
		e + (0..3).map(|ch| (c.0[ch] as i64 - avg[ch] as i64).abs() as u64).sum::<u64>()
	});
	if err as f32 / 3. > tolerance {
		None
	} else {
		Some(::image::Rgb(avg))
	}
}

impl Node {
	/// Compresses the region `(x, y, w, h)` of `grid` into a subtree.
	///
	/// Regions within `tolerance` become a single averaged leaf; all others
	/// are split into four half-sized quadrants around `(x + w/2, y + w/2)`.
	/// A 1x1 region is always a leaf.
	pub fn compress(grid: &ColorGrid, x: u32, y: u32, w: u32, h: u32, tolerance: f32) -> Node {
		let limit = if w <= 1 && h <= 1 { f32::INFINITY } else { tolerance };
		if let Some(c) = region_color(grid, x, y, w, h, limit) {
			return Node::region(c);
		}
		let (hw, hh) = (w / 2, h / 2);
		let children: Children = Box::new([
			Some(Node::compress(grid, x + hw, y + hh, hw, hh, tolerance)),
			Some(Node::compress(grid, x, y + hh, hw, hh, tolerance)),
			Some(Node::compress(grid, x, y, hw, hh, tolerance)),
			Some(Node::compress(grid, x + hw, y, hw, hh, tolerance)),
		]);
		Node::Branch {
			center: Point::new((x + hw) as i32, (y + hw) as i32),
			children,
		}
	}
}
