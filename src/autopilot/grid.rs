use crate::game::{GameState, Position};

/// Read-only occupancy snapshot of the board for one decision.
///
/// Cells are addressed by the flat index `x * height + y`, which keeps
/// the search bookkeeping in plain vectors.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    occupied: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-free grid of the given extent
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            occupied: vec![false; width * height],
        }
    }

    /// Snapshot the snake body of `state`.
    ///
    /// The whole body counts as occupied, tail included; the engine alone
    /// credits the tail cell that a non-eating move vacates.
    pub fn from_state(state: &GameState) -> Self {
        let mut grid = Self::empty(state.grid_width, state.grid_height);
        for segment in &state.snake.body {
            let idx = grid.index(*segment);
            grid.occupied[idx] = true;
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Flat index of an in-bounds cell
    pub fn index(&self, pos: Position) -> usize {
        pos.x as usize * self.height + pos.y as usize
    }

    /// Cell at a flat index
    pub fn position(&self, index: usize) -> Position {
        Position::new((index / self.height) as i32, (index % self.height) as i32)
    }

    /// True iff both coordinates fall within the board
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && (pos.x as usize) < self.width
            && pos.y >= 0
            && (pos.y as usize) < self.height
    }

    /// True iff the cell holds a snake segment
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.occupied[self.index(pos)]
    }

    /// In bounds and not covered by the snake
    pub fn is_free(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.occupied[self.index(pos)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;

    #[test]
    fn test_index_round_trip() {
        let grid = OccupancyGrid::empty(7, 5);
        for x in 0..7 {
            for y in 0..5 {
                let pos = Position::new(x, y);
                assert_eq!(grid.position(grid.index(pos)), pos);
            }
        }
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_snapshot_matches_state_queries() {
        let state = GameState::new(
            Snake {
                body: vec![
                    Position::new(2, 2),
                    Position::new(2, 3),
                    Position::new(3, 3),
                ],
            },
            Position::new(0, 0),
            6,
            6,
        );
        let grid = OccupancyGrid::from_state(&state);

        for x in 0..6 {
            for y in 0..6 {
                let pos = Position::new(x, y);
                assert_eq!(grid.in_bounds(pos), state.is_in_bounds(pos));
                assert_eq!(grid.is_occupied(pos), state.is_occupied_by_snake(pos));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_cells() {
        let grid = OccupancyGrid::empty(4, 4);
        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(4, 0),
            Position::new(0, 4),
        ] {
            assert!(!grid.in_bounds(pos));
            assert!(!grid.is_occupied(pos));
            assert!(!grid.is_free(pos));
        }
    }
}
