use serde::{Deserialize, Serialize, Serializer};
use std::collections::VecDeque;

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Wall,
    Empty,
    Exit,
}

/// A coordinate in a grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The neighbouring cell in `dir`, or `None` if it falls outside a
    /// `size × size` grid.
    pub fn step(self, dir: Direction, size: usize) -> Option<Cell> {
        self.offset(dir.delta(), size)
    }

    pub(crate) fn offset(self, (dx, dy): (isize, isize), size: usize) -> Option<Cell> {
        let nx = self.x as isize + dx;
        let ny = self.y as isize + dy;
        if nx < 0 || ny < 0 {
            return None;
        }
        let (nx, ny) = (nx as usize, ny as usize);
        if nx >= size || ny >= size {
            return None;
        }
        Some(Cell { x: nx, y: ny })
    }
}

/// Square maze grid, stored row-major (`rows[y][x]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<CellState>>,
}

impl Grid {
    pub fn filled(size: usize, state: CellState) -> Self {
        Self {
            size,
            rows: vec![vec![state; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }

    pub fn get(&self, cell: Cell) -> CellState {
        self.rows[cell.y][cell.x]
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Carve write. Carving only ever opens cells.
    pub(crate) fn open(&mut self, cell: Cell) {
        debug_assert!(self.get(cell) != CellState::Exit);
        self.rows[cell.y][cell.x] = CellState::Empty;
    }

    pub fn mark_exit(&mut self, cell: Cell) {
        self.rows[cell.y][cell.x] = CellState::Exit;
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.contains(cell) && self.get(cell) != CellState::Wall
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, state) in row.iter().enumerate() {
                if *state == CellState::Empty {
                    cells.push(Cell { x, y });
                }
            }
        }
        cells
    }

    pub fn count(&self, state: CellState) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&s| s == state)
            .count()
    }

    /// Flood fill over walkable cells, 4-connected.
    pub fn reachable_from(&self, start: Cell) -> Vec<Vec<bool>> {
        let mut seen = vec![vec![false; self.size]; self.size];
        if !self.is_walkable(start) {
            return seen;
        }
        let mut q = VecDeque::new();
        seen[start.y][start.x] = true;
        q.push_back(start);
        while let Some(pos) = q.pop_front() {
            for dir in Direction::ALL {
                let Some(next) = pos.step(dir, self.size) else {
                    continue;
                };
                if seen[next.y][next.x] || !self.is_walkable(next) {
                    continue;
                }
                seen[next.y][next.x] = true;
                q.push_back(next);
            }
        }
        seen
    }

    /// True when every walkable cell can reach every other one.
    pub fn is_connected(&self) -> bool {
        let walkable: Vec<Cell> = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| Cell { x, y }))
            .filter(|c| self.is_walkable(*c))
            .collect();
        let Some(first) = walkable.first() else {
            return true;
        };
        let reachable = self.reachable_from(*first);
        walkable.iter().all(|c| reachable[c.y][c.x])
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_serialize_as_tags() {
        let mut grid = Grid::filled(2, CellState::Wall);
        grid.open(Cell::new(0, 0));
        grid.mark_exit(Cell::new(1, 1));
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["empty","wall"],["wall","exit"]]"#);
    }

    #[test]
    fn step_stays_inside_grid() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(corner.step(Direction::Right, 3), Some(Cell::new(1, 0)));
        assert_eq!(Cell::new(2, 2).step(Direction::Down, 3), None);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 7);
        let b = Cell::new(6, 2);
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(b.manhattan(a), 10);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn empty_cells_are_row_major() {
        let mut grid = Grid::filled(3, CellState::Wall);
        grid.open(Cell::new(2, 0));
        grid.open(Cell::new(0, 1));
        grid.open(Cell::new(1, 1));
        assert_eq!(
            grid.empty_cells(),
            vec![Cell::new(2, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }

    #[test]
    fn detects_split_regions() {
        let mut grid = Grid::filled(3, CellState::Wall);
        grid.open(Cell::new(0, 0));
        grid.open(Cell::new(2, 2));
        assert!(!grid.is_connected());
        grid.open(Cell::new(1, 0));
        grid.open(Cell::new(2, 0));
        grid.open(Cell::new(2, 1));
        assert!(grid.is_connected());
    }

    #[test]
    fn exit_counts_as_walkable() {
        let mut grid = Grid::filled(2, CellState::Wall);
        grid.open(Cell::new(0, 0));
        grid.mark_exit(Cell::new(1, 0));
        let reach = grid.reachable_from(Cell::ORIGIN);
        assert!(reach[0][1]);
        assert!(grid.is_connected());
    }
}
