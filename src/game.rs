use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::Config;
use crate::grid::{Cell, Direction};
use crate::input::DirectionKeys;
use crate::snake::{Growth, Snake};

/// Outcome of one game frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    Ate,
    Restarted,
    AteAndRestarted,
}

/// Everything one game instance owns. Each frame phase takes it explicitly.
pub struct GameState {
    config: Config,
    snake: Snake,
    board: Board,
    score: u32,
    restarts: u32,
    rng: StdRng,
}

impl GameState {
    /// Fails when `config` does not pass `Config::validate`.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_rng(config, rng))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        let snake = spawn_snake(&config);
        let board = Board::new(config.grid_width, config.grid_height);
        let mut game = Self { config, snake, board, score: 0, restarts: 0, rng };
        game.board.place_food(&mut game.rng, &game.snake, game.config.food_avoids_snake);
        game
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Applies at most one turn from this frame's key presses.
    pub fn handle_input(&mut self, keys: DirectionKeys) {
        if let Some(dir) = keys.choose(self.snake.direction()) {
            self.snake.turn(dir);
        }
    }

    /// Movement and growth, then the food check, then the self-collision
    /// check. The two checks are independent.
    pub fn update(&mut self) -> StepResult {
        let (w, h) = (self.config.grid_width, self.config.grid_height);
        if self.snake.advance(w, h) == Growth::Capped {
            warn!(length = self.snake.len(), "snake at capacity, dropping owed growth");
        }

        let ate = self.board.has_food_at(self.snake.head());
        if ate {
            self.score += 1;
            self.snake.owe_segment();
            let food =
                self.board.place_food(&mut self.rng, &self.snake, self.config.food_avoids_snake);
            debug!(score = self.score, ?food, "food eaten");
        }

        let bit = self.snake.bites_itself();
        if bit {
            self.restart();
        }

        debug!(
            head = ?self.snake.head(),
            length = self.snake.len(),
            pending = self.snake.pending_growth(),
            "frame"
        );

        match (ate, bit) {
            (false, false) => StepResult::Moved,
            (true, false) => StepResult::Ate,
            (false, true) => StepResult::Restarted,
            (true, true) => StepResult::AteAndRestarted,
        }
    }

    /// One full game frame: input, then update.
    pub fn step(&mut self, keys: DirectionKeys) -> StepResult {
        self.handle_input(keys);
        self.update()
    }

    /// Rebuilds snake and board from scratch. Score survives only when
    /// `keep_score_on_restart` is set.
    pub fn restart(&mut self) {
        info!(
            score = self.score,
            length = self.snake.len(),
            restarts = self.restarts + 1,
            "snake bit itself, restarting"
        );
        self.snake = spawn_snake(&self.config);
        self.board = Board::new(self.config.grid_width, self.config.grid_height);
        self.board.place_food(&mut self.rng, &self.snake, self.config.food_avoids_snake);
        if !self.config.keep_score_on_restart {
            self.score = 0;
        }
        self.restarts += 1;
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, cell: Cell) {
        self.board.set_food(cell);
    }
}

fn spawn_snake(config: &Config) -> Snake {
    let center = Cell::new(config.grid_width / 2, config.grid_height / 2);
    Snake::new(
        center,
        config.initial_length,
        Direction::Right,
        config.max_length,
        config.grid_width,
        config.grid_height,
    )
}
