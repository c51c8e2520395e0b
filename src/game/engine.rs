use super::{
    action::{Decision, Direction},
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// Result of applying one decision to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that ended the run, if any
    pub collision: Option<CollisionType>,
}

/// The game engine that applies decisions to the game state
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Reset the game to initial state: a centered snake heading right and
    /// food on a random free cell
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Apply one decision to the state
    pub fn step(&mut self, state: &mut GameState, decision: Decision) -> StepResult {
        if !state.is_alive {
            return StepResult {
                ate_food: false,
                collision: None,
            };
        }

        let (dx, dy) = decision.delta();
        let new_head = state.snake.head().moved_by(dx, dy);
        let ate_food = new_head == state.food;

        if let Some(collision) = self.check_collision(state, new_head, ate_food) {
            state.is_alive = false;
            state.ticks += 1;

            return StepResult {
                ate_food: false,
                collision: Some(collision),
            };
        }

        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food_avoid_snake(&state.snake);
        }

        state.ticks += 1;

        StepResult {
            ate_food,
            collision: None,
        }
    }

    /// Check if moving the head to `pos` causes a collision.
    ///
    /// The self check runs against the cells still occupied after the
    /// move: the tail about to be vacated does not count unless the snake
    /// is eating.
    fn check_collision(
        &self,
        state: &GameState,
        pos: Position,
        grows: bool,
    ) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.hits_body_after_move(pos, grows) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random position off the snake
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !snake.contains(pos) {
                return pos;
            }
        }
    }
}
