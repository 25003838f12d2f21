//! Maze carving.
//!
//! A depth-first carve over the even-coordinate sub-lattice opens a spanning
//! tree rooted at the origin, with one-cell walls between passages. A second,
//! unconditional pass then opens a monotone staircase from the bottom-right
//! corner back to the origin so the far corner is always reachable.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, CellState, Grid};

/// Two-cell strides: up, down, left, right.
const STRIDES: [(isize, isize); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

struct Frame {
    cell: Cell,
    strides: [(isize, isize); 4],
    next: usize,
}

impl Frame {
    fn new(cell: Cell, rng: &mut impl Rng) -> Self {
        let mut strides = STRIDES;
        strides.shuffle(rng);
        Self {
            cell,
            strides,
            next: 0,
        }
    }
}

/// Builds a fully connected `size × size` maze.
pub fn generate(rng: &mut impl Rng, size: usize) -> Grid {
    debug_assert!(size >= 2, "maze size must be at least 2");
    let mut grid = Grid::filled(size, CellState::Wall);
    carve_from(rng, &mut grid, Cell::ORIGIN);
    carve_path_to_exit(rng, &mut grid);
    tracing::trace!(size, open = grid.count(CellState::Empty), "carved maze");
    grid
}

pub fn generate_default(size: usize) -> Grid {
    generate(&mut rand::thread_rng(), size)
}

/// Depth-first carve from `origin`, driven by an explicit frame stack.
///
/// Each frame walks its own shuffled strides in order and a child frame is
/// pushed as soon as a stride opens a new cell, which visits cells in the
/// same order as the recursive formulation.
pub(crate) fn carve_from(rng: &mut impl Rng, grid: &mut Grid, origin: Cell) {
    let size = grid.size();
    grid.open(origin);
    let mut stack = vec![Frame::new(origin, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&(dx, dy)) = frame.strides.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let Some(target) = cell.offset((dx, dy), size) else {
            continue;
        };
        if grid.get(target) != CellState::Wall {
            continue;
        }
        let between = Cell {
            x: (cell.x as isize + dx / 2) as usize,
            y: (cell.y as isize + dy / 2) as usize,
        };
        grid.open(between);
        grid.open(target);
        stack.push(Frame::new(target, rng));
    }
}

/// Opens a staircase from `(size-1, size-1)` towards the origin, one axial
/// step at a time. Never reads the grid, so it can only open cells.
pub fn carve_path_to_exit(rng: &mut impl Rng, grid: &mut Grid) {
    let last = grid.size() - 1;
    let mut cell = Cell::new(last, last);

    while cell != Cell::ORIGIN {
        grid.open(cell);
        if cell.x > 0 && cell.y > 0 {
            if rng.gen_bool(0.5) {
                cell.x -= 1;
            } else {
                cell.y -= 1;
            }
        } else if cell.x > 0 {
            cell.x -= 1;
        } else {
            cell.y -= 1;
        }
    }
}
