use quadtree_compress::{Color, ColorGrid, DimensionError, Mode, Point, Rect, SpatialQuadTree};

const BLACK: Color = image::Rgb([0, 0, 0]);
const WHITE: Color = image::Rgb([255, 255, 255]);

/// 4x4 black grid whose top-right 2x2 block is white.
fn corner_block() -> Vec<Vec<Color>> {
	let mut rows = vec![vec![BLACK; 4]; 4];
	for y in 2..4 {
		for x in 2..4 {
			rows[y][x] = WHITE;
		}
	}
	rows
}

#[test]
fn corner_block_compresses_to_four_leaves() {
	let tree = SpatialQuadTree::from_rows(&corner_block(), 0.).unwrap();
	assert_eq!(tree.mode(), Mode::Region);
	assert_eq!(tree.count_nodes(), 5);
	assert_eq!(tree.count_leaves(), 4);
	assert_eq!(
		tree.list_subdivisions(true),
		vec![
			Rect::new(2, 2, 2, 2),
			Rect::new(0, 2, 2, 2),
			Rect::new(0, 0, 2, 2),
			Rect::new(2, 0, 2, 2),
		]
	);
	for y in 0..4 {
		for x in 0..4 {
			let expected = if x >= 2 && y >= 2 { WHITE } else { BLACK };
			assert_eq!(tree.query(x, y), Some(expected), "at ({}, {})", x, y);
		}
	}
}

#[test]
fn all_subdivisions_of_a_flat_tree_match_leaves() {
	let tree = SpatialQuadTree::from_rows(&corner_block(), 0.).unwrap();
	assert_eq!(tree.list_subdivisions(false), tree.list_subdivisions(true));
}

#[test]
fn points_in_a_512_domain() {
	let (c1, c2) = (image::Rgb([10, 20, 30]), image::Rgb([40, 50, 60]));
	let mut tree = SpatialQuadTree::new_empty(512).unwrap();
	tree.insert(Point::new(500, 500), c1);
	tree.insert(Point::new(0, 0), c2);
	assert_eq!(tree.query(500, 500), Some(c1));
	assert_eq!(tree.query(0, 0), Some(c2));
	assert_eq!(tree.query(256, 256), None);
	assert_eq!(tree.count_nodes(), 3);
	assert_eq!(
		tree.list_subdivisions(false),
		vec![Rect::new(256, 256, 256, 256), Rect::new(0, 0, 256, 256)]
	);
}

#[test]
fn non_square_grid_is_rejected() {
	let rows = vec![vec![BLACK; 4]; 3];
	assert_eq!(
		SpatialQuadTree::from_rows(&rows, 0.),
		Err(DimensionError::NonSquare { width: 4, height: 3 })
	);
}

#[test]
fn other_malformed_grids_are_rejected() {
	assert_eq!(SpatialQuadTree::from_rows(&[], 0.), Err(DimensionError::Empty));
	assert_eq!(
		SpatialQuadTree::from_rows(&vec![vec![BLACK; 6]; 6], 0.),
		Err(DimensionError::NonPowerOfTwo(6))
	);
	assert!(matches!(
		ColorGrid::from_rows(&vec![vec![BLACK; 4], vec![BLACK; 4], vec![BLACK; 3], vec![BLACK; 4]]),
		Err(DimensionError::RaggedRows { row: 2, .. })
	));
}

#[test]
fn depth_query_highlights_coarse_regions() {
	let mut rows = corner_block();
	rows[0][0] = image::Rgb([90, 90, 90]);
	let tree = SpatialQuadTree::from_rows(&rows, 0.).unwrap();
	let red = quadtree_compress::HIGHLIGHT;
	// The white block is a leaf at depth 1; the bottom-left block is split.
	assert_eq!(tree.query_with_min_depth(3, 3, 1), Some(red));
	assert_eq!(tree.query_with_min_depth(0, 0, 1), Some(image::Rgb([90, 90, 90])));
	assert_eq!(tree.query_with_min_depth(1, 1, 2), Some(red));
	assert_eq!(tree.depth(), 2);
	// Plain queries are unaffected.
	assert_eq!(tree.query(3, 3), Some(WHITE));
}

#[test]
fn rebuilding_at_higher_tolerance_shrinks_the_tree() {
	let rows: Vec<Vec<Color>> = (0..16)
		.map(|y| (0..16).map(|x| image::Rgb([(x * 16) as u8, (y * 16) as u8, 128])).collect())
		.collect();
	let grid = ColorGrid::from_rows(&rows).unwrap();
	let counts: Vec<usize> = [0., 10., 100., 1000., 1e9]
		.iter()
		.map(|t| SpatialQuadTree::build_from_grid(&grid, *t).count_nodes())
		.collect();
	assert_eq!(counts[0], 341);
	assert_eq!(counts[4], 1);
	assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{:?}", counts);
}
