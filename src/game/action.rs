/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns the direction matching a unit delta, if any
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The move vector the autopilot emits for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Step one cell in the given direction
    Move(Direction),
    /// The zero vector: no safe move exists and the snake stands still
    Stall,
}

impl Decision {
    /// Head displacement for this decision
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Decision::Move(direction) => direction.delta(),
            Decision::Stall => (0, 0),
        }
    }
}

impl From<Direction> for Decision {
    fn from(direction: Direction) -> Self {
        Decision::Move(direction)
    }
}
