use super::grid::OccupancyGrid;
use crate::game::Position;

/// Count the cells reachable from `from` by orthogonal steps through free
/// cells, including `from` itself.
///
/// Ranks how much room the snake keeps after a candidate move; the policy
/// only consults it when no path to the food exists. Traversal order
/// changes nothing about the count.
pub fn reachable_area(grid: &OccupancyGrid, from: Position) -> usize {
    if !grid.is_free(from) {
        return 0;
    }

    let mut visited = vec![false; grid.len()];
    let mut stack = vec![from];
    let mut count = 0;

    while let Some(cell) = stack.pop() {
        let idx = grid.index(cell);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        count += 1;

        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = cell.moved_by(dx, dy);
            if grid.is_free(next) && !visited[grid.index(next)] {
                stack.push(next);
            }
        }
    }

    count
}
