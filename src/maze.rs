use rand::Rng;
use serde::Serialize;

use crate::carve;
use crate::grid::{Cell, Grid};
use crate::select;

/// A generated grid together with the start and exit chosen on it.
///
/// The three fields always come from the same generation run; the exit cell
/// is already marked in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    pub grid: Grid,
    pub start: Cell,
    pub exit: Cell,
}

impl Maze {
    pub fn generate(rng: &mut impl Rng, size: usize, min_distance: usize) -> Self {
        let mut grid = carve::generate(rng, size);
        let pair = select::select(rng, &grid, min_distance);
        grid.mark_exit(pair.exit);
        tracing::debug!(
            size,
            start = ?pair.start,
            exit = ?pair.exit,
            distance = pair.start.manhattan(pair.exit),
            "generated maze"
        );
        Self {
            grid,
            start: pair.start,
            exit: pair.exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn exit_is_marked_once() {
        let maze = Maze::generate(&mut StdRng::seed_from_u64(1), 10, 10);
        assert_eq!(maze.grid.get(maze.exit), CellState::Exit);
        assert_eq!(maze.grid.count(CellState::Exit), 1);
        assert_eq!(maze.grid.get(maze.start), CellState::Empty);
        assert!(maze.start.manhattan(maze.exit) >= 10);
    }

    #[test]
    fn marked_maze_stays_connected() {
        for seed in 0..20 {
            let maze = Maze::generate(&mut StdRng::seed_from_u64(seed), 9, 10);
            assert!(maze.grid.is_connected());
            let reach = maze.grid.reachable_from(maze.start);
            assert!(reach[maze.exit.y][maze.exit.x]);
        }
    }
}
