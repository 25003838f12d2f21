use maze_runner::carve;
use maze_runner::select::select;
use maze_runner::{Cell, CellState, Maze, DEFAULT_MIN_DISTANCE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn ten_by_ten_maze_is_one_region_with_far_pair() {
    for seed in [0, 1, 17, 256, 9001] {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = carve::generate(&mut rng, 10);

        assert_eq!(grid.get(Cell::ORIGIN), CellState::Empty);
        assert!(grid.is_connected());

        let pair = select(&mut rng, &grid, DEFAULT_MIN_DISTANCE);
        assert_ne!(pair.start, pair.exit);
        assert!(pair.start.manhattan(pair.exit) >= DEFAULT_MIN_DISTANCE);
        assert_eq!(grid.get(pair.start), CellState::Empty);
        assert_eq!(grid.get(pair.exit), CellState::Empty);
    }
}

#[test]
fn degenerate_two_by_two_still_plays() {
    for seed in 0..10 {
        let maze = Maze::generate(&mut StdRng::seed_from_u64(seed), 2, DEFAULT_MIN_DISTANCE);
        assert_ne!(maze.start, maze.exit);
        assert_eq!(maze.grid.get(maze.exit), CellState::Exit);
        assert_eq!(maze.grid.count(CellState::Wall), 1);
        assert!(maze.grid.is_connected());
    }
}

#[test]
fn oversized_threshold_falls_back_to_empty_cells() {
    let mut rng = StdRng::seed_from_u64(77);
    let grid = carve::generate(&mut rng, 10);
    let empties = grid.empty_cells();
    let pair = select(&mut rng, &grid, 1_000);
    assert!(empties.contains(&pair.start));
    assert!(empties.contains(&pair.exit));
}

#[test]
fn large_maze_does_not_overflow_the_stack() {
    let grid = carve::generate(&mut StdRng::seed_from_u64(3), 401);
    assert!(grid.is_connected());
}

#[test]
fn grid_serializes_as_nested_tags() {
    let maze = Maze::generate(&mut StdRng::seed_from_u64(12), 10, DEFAULT_MIN_DISTANCE);
    let value = serde_json::to_value(&maze.grid).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    for row in rows {
        for tag in row.as_array().unwrap() {
            let tag = tag.as_str().unwrap();
            assert!(matches!(tag, "wall" | "empty" | "exit"), "unexpected tag {tag}");
        }
    }
}
