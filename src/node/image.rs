use super::compress::ColorGrid;
use super::error::DimensionError;
use super::rect::Rect;
use super::{Color, Point};
use crate::SpatialQuadTree;

const BACKGROUND: Color = image::Rgb([0, 0, 0]);
const BOUNDARY: Color = image::Rgb([0, 255, 255]);
const PAPER: Color = image::Rgb([255, 255, 255]);
const INK: Color = image::Rgb([0, 0, 0]);
const MARK: Color = image::Rgb([255, 0, 0]);

/// How `SpatialQuadTree::render` draws a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
	/// Fill every subdivision (parents before children) instead of only
	/// the leaves.
	pub all_subdivisions: bool,
	/// Outline each rectangle.
	pub boundaries: bool,
	/// Highlight leaves at this depth or shallower.
	pub min_depth: Option<isize>,
}

impl ColorGrid {
	/// Copies the samples of a square, power-of-two sized image.
	///
	/// Image row `y` becomes grid row `y`.
	pub fn from_image(img: &image::RgbImage) -> Result<ColorGrid, DimensionError> {
		if img.width() != img.height() {
			return Err(DimensionError::NonSquare {
				width: img.width() as usize,
				height: img.height() as usize,
			});
		}
		super::validate_size(img.width())?;
		Ok(ColorGrid::from_raw(img.width(), img.pixels().copied().collect()))
	}
}

/// Clips `rect` to a `size`-sided image, returning `(x, y, w, h)`.
fn clip(rect: &Rect, size: u32) -> Option<(u32, u32, u32, u32)> {
	let size = size as i64;
	let (x0, y0) = ((rect.x as i64).max(0), (rect.y as i64).max(0));
	let x1 = (rect.x as i64 + rect.width as i64).min(size);
	let y1 = (rect.y as i64 + rect.height as i64).min(size);
	if x0 >= x1 || y0 >= y1 {
		return None;
	}
	Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
}

fn outline(img: &mut image::RgbImage, rect: &Rect, color: Color) {
	if let Some((x, y, w, h)) = clip(rect, img.width()) {
		for col in x..x + w {
			img.put_pixel(col, y, color);
			img.put_pixel(col, y + h - 1, color);
		}
		for row in y..y + h {
			img.put_pixel(x, row, color);
			img.put_pixel(x + w - 1, row, color);
		}
	}
}

impl SpatialQuadTree {
	/// Draws the tree into a new `size x size` image.
	///
	/// Each rectangle is filled with the color the tree reports at its
	/// center; rectangles without a color leave the black background.
	pub fn render(&self, options: &RenderOptions) -> image::RgbImage {
		let mut img = image::RgbImage::from_pixel(self.size(), self.size(), BACKGROUND);
		let rects = self.list_subdivisions(!options.all_subdivisions);
		for rect in rects.iter() {
			let c = rect.center();
			let color = match options.min_depth {
				Some(d) => self.query_with_min_depth(c.x, c.y, d),
				None => self.query(c.x, c.y),
			};
			if let (Some(color), Some((x, y, w, h))) = (color, clip(rect, self.size())) {
				image::imageops::replace(&mut img, &image::RgbImage::from_pixel(w, h, color), x, y);
			}
		}
		if options.boundaries {
			for rect in rects.iter() {
				outline(&mut img, rect, BOUNDARY);
			}
		}
		img
	}

	/// Draws every subdivision's outline on white, and marks `points` in red.
	pub fn render_outline(&self, points: &[Point]) -> image::RgbImage {
		let mut img = image::RgbImage::from_pixel(self.size(), self.size(), PAPER);
		for rect in self.list_subdivisions(false).iter() {
			outline(&mut img, rect, INK);
		}
		for p in points {
			if let Some((x, y, w, h)) = clip(&Rect::new(p.x.saturating_sub(1), p.y.saturating_sub(1), 3, 3), self.size()) {
				image::imageops::replace(&mut img, &image::RgbImage::from_pixel(w, h, MARK), x, y);
			}
		}
		img
	}
}
