use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::grid::{Cell, Grid};

pub const DEFAULT_MIN_DISTANCE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellPair {
    pub start: Cell,
    pub exit: Cell,
}

/// Picks a start and an exit among the grid's empty cells.
///
/// The empty cells are shuffled and the first pair at least `min_distance`
/// apart (Manhattan) wins. When no pair qualifies the first two shuffled
/// cells are returned regardless of distance, so a game can always start.
/// A grid with a single empty cell yields that cell twice.
///
/// # Panics
///
/// Panics if the grid has no empty cell at all.
pub fn select(rng: &mut impl Rng, grid: &Grid, min_distance: usize) -> CellPair {
    let mut empties = grid.empty_cells();
    assert!(!empties.is_empty(), "grid has no empty cells");
    empties.shuffle(rng);

    for &a in &empties {
        for &b in &empties {
            if a.manhattan(b) >= min_distance {
                return CellPair { start: a, exit: b };
            }
        }
    }

    let start = empties[0];
    let exit = empties.get(1).copied().unwrap_or(start);
    CellPair { start, exit }
}
