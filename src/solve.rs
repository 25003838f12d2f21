use std::collections::VecDeque;

use crate::game::Direction;
use crate::grid::{Cell, Grid};

/// Breadth-first walking distances from `start`. `None` marks walls and
/// cells that cannot be reached.
pub fn distance_map(grid: &Grid, start: Cell) -> Vec<Vec<Option<usize>>> {
    let size = grid.size();
    let mut dist = vec![vec![None; size]; size];
    if !grid.is_walkable(start) {
        return dist;
    }
    let mut q = VecDeque::new();
    dist[start.y][start.x] = Some(0);
    q.push_back(start);

    while let Some(pos) = q.pop_front() {
        let base = dist[pos.y][pos.x].unwrap_or_default();
        for dir in Direction::ALL {
            let Some(next) = pos.step(dir, size) else {
                continue;
            };
            if !grid.is_walkable(next) || dist[next.y][next.x].is_some() {
                continue;
            }
            dist[next.y][next.x] = Some(base + 1);
            q.push_back(next);
        }
    }
    dist
}

/// Moves leading from `from` to `to` along a shortest walkable route.
pub fn shortest_path(grid: &Grid, from: Cell, to: Cell) -> Option<Vec<Direction>> {
    // Walk back from the target, always stepping to a cell one closer.
    let dist = distance_map(grid, from);
    let mut remaining = dist[to.y][to.x]?;
    let mut path = Vec::with_capacity(remaining);
    let mut pos = to;
    while remaining > 0 {
        let (dir, prev) = Direction::ALL.into_iter().find_map(|dir| {
            let prev = pos.step(dir, grid.size())?;
            (dist[prev.y][prev.x] == Some(remaining - 1)).then_some((dir, prev))
        })?;
        path.push(opposite(dir));
        pos = prev;
        remaining -= 1;
    }
    path.reverse();
    Some(path)
}

fn opposite(dir: Direction) -> Direction {
    match dir {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    }
}
