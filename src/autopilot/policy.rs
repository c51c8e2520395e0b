//! The per-tick decision policy
//!
//! Two modes, re-evaluated fresh on every call: PATHING steers along a
//! shortest path to the food; EVADING, entered only when no usable path
//! exists, picks the legal immediate move with the most surviving free
//! space. With no legal move left the policy emits an explicit stall and
//! the hosting loop handles the collision that follows.

use super::grid::OccupancyGrid;
use super::pathfinder::shortest_path;
use super::space::reachable_area;
use crate::game::{Decision, Direction, GameState, Position};

/// Candidate probe order for the evasion fallback; the first candidate
/// wins ties on reachable space
const CANDIDATES: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// Compute the snake's next move for the current tick.
///
/// Pure with respect to `state`; calling it twice on the same snapshot
/// returns the same decision.
pub fn decide(state: &GameState) -> Decision {
    let grid = OccupancyGrid::from_state(state);
    let head = state.snake.head();

    let path = shortest_path(&grid, head, state.food);
    if path.len() >= 2 {
        let dx = path[1].x - path[0].x;
        let dy = path[1].y - path[0].y;
        if let Some(direction) = Direction::from_delta(dx, dy) {
            return Decision::Move(direction);
        }
    }

    evade(&grid, head)
}

/// Pick the legal immediate move that maximizes reachable space
fn evade(grid: &OccupancyGrid, head: Position) -> Decision {
    let mut best: Option<(Direction, usize)> = None;

    for direction in CANDIDATES {
        let (dx, dy) = direction.delta();
        let target = head.moved_by(dx, dy);
        if !grid.is_free(target) {
            continue;
        }

        let area = reachable_area(grid, target);
        if best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((direction, area));
        }
    }

    match best {
        Some((direction, _)) => Decision::Move(direction),
        None => Decision::Stall,
    }
}
