use clap::{App, ArgMatches, SubCommand};
use image::error::ImageError;

use quadtree_compress::{Color, ColorGrid, DimensionError, Point, RenderOptions, SpatialQuadTree};

use std::fs::File;
use std::path::Path;

use std::io::{BufRead, BufReader};

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Default output path: INPUT with its extension swapped for `ext`.
fn default_output(input_path: &str, ext: &str) -> String {
	Path::new(input_path).with_extension(ext).to_string_lossy().into_owned()
}

fn parse_or_exit<T: std::str::FromStr>(matches: &ArgMatches, name: &str, default: &str) -> T {
	match matches.value_of(name).unwrap_or(default).parse() {
		Ok(n) => n,
		Err(_) => error_exit(&format!("Non-numeric value for {}", name), 2),
	}
}

fn save_or_exit(img: &image::RgbImage, path: &str) {
	match img.save(path) {
		Ok(_) => (),
		Err(_) => error_exit("Could not save output", 3),
	}
}

fn compress(matches: &ArgMatches) {
	let input_path = matches.value_of("INPUT").unwrap_or_else(|| error_exit("No input given", 2));
	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10),
			};
			error_exit(msg, code)
		}
	}
	.into_rgb();
	let tolerance: f32 = parse_or_exit(matches, "tolerance", "0");
	let options = RenderOptions {
		all_subdivisions: matches.is_present("all"),
		boundaries: matches.is_present("boundaries"),
		min_depth: matches.value_of("min-depth").map(|_| parse_or_exit(matches, "min-depth", "0")),
	};

	let grid = match ColorGrid::from_image(&source) {
		Ok(g) => g,
		Err(e @ DimensionError::NonSquare { .. }) | Err(e @ DimensionError::NonPowerOfTwo(_)) => {
			error_exit(&format!("Input image has invalid dimensions: {}", e), 4)
		}
		Err(e) => error_exit(&format!("{}", e), 10),
	};
	let tree = SpatialQuadTree::build_from_grid(&grid, tolerance);
	eprintln!("Number of leaves: {}", tree.count_leaves());
	eprintln!("Total number of nodes: {}", tree.count_nodes());

	save_or_exit(
		&tree.render(&options),
		&matches
			.value_of("OUTPUT")
			.map(str::to_string)
			.unwrap_or_else(|| default_output(input_path, "qt.png")),
	);
}

/// Parses one `x y [rrggbb]` line.
fn parse_point(line: &str) -> Option<(Point, Color)> {
	let mut fields = line.split_whitespace();
	let x = fields.next()?.parse().ok()?;
	let y = fields.next()?.parse().ok()?;
	let color = match fields.next() {
		Some(hex) if hex.len() == 6 => {
			let v = u32::from_str_radix(hex, 16).ok()?;
			image::Rgb([(v >> 16) as u8, (v >> 8) as u8, v as u8])
		}
		Some(_) => return None,
		None => image::Rgb([0, 0, 0]),
	};
	if fields.next().is_some() {
		return None;
	}
	Some((Point::new(x, y), color))
}

fn points(matches: &ArgMatches) {
	let input_path = matches.value_of("INPUT").unwrap_or_else(|| error_exit("No input given", 2));
	let size: u32 = parse_or_exit(matches, "size", "512");
	let mut tree = match SpatialQuadTree::new_empty(size) {
		Ok(t) => t,
		Err(e) => error_exit(&format!("Invalid size: {}", e), 2),
	};
	let source = match File::open(input_path) {
		Ok(f) => BufReader::new(f),
		Err(_) => error_exit("File not found or could not be read", 3),
	};
	let mut inserted = Vec::new();
	for (num, line) in source.lines().enumerate() {
		let line = match line {
			Ok(l) => l,
			Err(_) => error_exit("Could not read from input file", 3),
		};
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		match parse_point(line) {
			Some((p, c)) => {
				tree.insert(p, c);
				inserted.push(p);
			}
			None => error_exit(&format!("Malformed point on line {}", num + 1), 4),
		}
	}
	eprintln!("{} points inserted", inserted.len());
	eprintln!("Total number of nodes: {}", tree.count_nodes());

	save_or_exit(
		&tree.render_outline(&inserted),
		&matches
			.value_of("OUTPUT")
			.map(str::to_string)
			.unwrap_or_else(|| default_output(input_path, "png")),
	);
}

/// `clap`-based CLI for compressing images into quadtrees and for
/// visualizing point insertion.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image or point data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	env_logger::init();

	let clap_matches = App::new("quadtree_compress")
		.version("0.1.0")
		.author("vkcz")
		.about("Compresses images into error-bounded quadtrees and draws point quadtrees.")
		.subcommand(SubCommand::with_name("compress")
			.about("Compress a square, power-of-two sized image and render the result as PNG")
			.arg_from_usage("-t, --tolerance=[N] 'Maximum color error of a leaf region; 0 is lossless; defaults to 0'")
			.arg_from_usage("-b, --boundaries 'Outline subdivision boundaries'")
			.arg_from_usage("-m, --min-depth=[N] 'Highlight leaves at depth N or shallower'")
			.arg_from_usage("-a, --all 'Draw every subdivision, not only leaves'")
			.arg_from_usage("<INPUT> 'Path to input image'")
			.arg_from_usage("[OUTPUT] 'Path to output file; defaults to INPUT with a .qt.png extension'"))
		.subcommand(SubCommand::with_name("points")
			.about("Insert points read from a text file (`x y [rrggbb]` per line) and draw the tree")
			.arg_from_usage("-s, --size=[N] 'Side length of the domain; must be a power of two; defaults to 512'")
			.arg_from_usage("<INPUT> 'Path to point list'")
			.arg_from_usage("[OUTPUT] 'Path to output file; defaults to INPUT with a .png extension'"))
		.get_matches();

	match clap_matches.subcommand() {
		("compress", Some(m)) => compress(m),
		("points", Some(m)) => points(m),
		_ => error_exit("One of the compress or points subcommands must be given", 2),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn point_lines() {
		assert_eq!(parse_point("3 4"), Some((Point::new(3, 4), image::Rgb([0, 0, 0]))));
		assert_eq!(parse_point("3 4 ff0080"), Some((Point::new(3, 4), image::Rgb([255, 0, 128]))));
		assert_eq!(parse_point("3"), None);
		assert_eq!(parse_point("3 4 red"), None);
		assert_eq!(parse_point("3 4 ff0080 x"), None);
	}

	#[test]
	fn output_paths() {
		assert_eq!(default_output("dir/pic.png", "qt.png"), "dir/pic.qt.png");
		assert_eq!(default_output("points", "png"), "points.png");
		assert_eq!(default_output("dir.v2/points", "png"), "dir.v2/points.png");
	}
}
