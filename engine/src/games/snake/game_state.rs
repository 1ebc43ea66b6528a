use crate::config::Validate;
use crate::games::SessionRng;
use crate::{log, log_verbose};
use super::food::place_food;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Cell, CellState, Direction, FieldSize, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Single-snake simulation on a wrapping field.
///
/// The driver calls [`SnakeEngine::tick`] once per step and reads
/// [`SnakeEngine::current_state`] to draw. Direction changes apply from the
/// next tick on. Once the snake bites itself the engine stays over until
/// [`SnakeEngine::reset`].
#[derive(Clone, Debug)]
pub struct SnakeEngine {
    field_size: FieldSize,
    direction: Direction,
    is_over: bool,
    snake: Snake,
    food: Point,
    score: u32,
    ticks: u64,
    rng: SessionRng,
}

impl SnakeEngine {
    pub const INITIAL_DIRECTION: Direction = Direction::Right;

    pub fn new(width: i32, height: i32) -> Result<Self, String> {
        Self::with_rng(width, height, SessionRng::from_random())
    }

    pub fn with_rng(width: i32, height: i32, mut rng: SessionRng) -> Result<Self, String> {
        let field_size = FieldSize::new(width, height)?;
        let snake = Snake::new(&field_size);
        let food = place_food(&field_size, &snake, &mut rng);

        log!(
            "New {}x{} game, seed {}, head at ({}, {})",
            width,
            height,
            rng.seed(),
            snake.head().x,
            snake.head().y
        );

        Ok(Self {
            field_size,
            direction: Self::INITIAL_DIRECTION,
            is_over: false,
            snake,
            food,
            score: 0,
            ticks: 0,
            rng,
        })
    }

    pub fn from_settings(settings: &SnakeSettings) -> Result<Self, String> {
        settings.validate()?;
        Self::with_rng(
            settings.field_width,
            settings.field_height,
            SessionRng::from_optional_seed(settings.seed),
        )
    }

    pub fn tick(&mut self) {
        if self.is_over {
            log_verbose!("Tick ignored, game is over");
            return;
        }

        let next_head = self.field_size.wrap(self.snake.head().step(self.direction));
        self.snake.advance(next_head);
        self.ticks += 1;

        if self.snake.head_hits_body() {
            self.is_over = true;
            log!(
                "Game over at tick {}: bit itself at ({}, {}). Score: {}",
                self.ticks,
                next_head.x,
                next_head.y,
                self.score
            );
            return;
        }

        self.maybe_eat_food();
    }

    fn maybe_eat_food(&mut self) {
        if self.snake.head() != self.food {
            return;
        }

        let eaten = self.food;
        // The new tail shares the head's cell until the next shift moves the body up.
        self.snake.grow(eaten);
        self.score += 1;
        self.food = place_food(&self.field_size, &self.snake, &mut self.rng);
        log!(
            "Ate food at ({}, {}). Score: {}",
            eaten.x,
            eaten.y,
            self.score
        );
    }

    /// Food first, then the head, then the body from neck to tail.
    pub fn current_state(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.snake.len() + 1);
        cells.push(Cell::new(CellState::Food, self.food));
        cells.push(Cell::new(CellState::Head, self.snake.head()));
        cells.extend(self.snake.body().map(|point| Cell::new(CellState::Body, point)));
        cells
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(&self.field_size);
        self.food = place_food(&self.field_size, &self.snake, &mut self.rng);
        self.direction = Self::INITIAL_DIRECTION;
        self.is_over = false;
        self.score = 0;
        self.ticks = 0;
        log!("Game reset");
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns whether `value` named a direction. Unknown values leave the direction as is.
    pub fn set_direction_str(&mut self, value: &str) -> bool {
        match Direction::parse(value) {
            Some(direction) => {
                self.set_direction(direction);
                true
            }
            None => {
                log_verbose!("Ignoring unknown direction {:?}", value);
                false
            }
        }
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over {
            GameStatus::GameOver
        } else {
            GameStatus::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn field_size(&self) -> &FieldSize {
        &self.field_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: Vec<Point>) {
        self.snake = Snake::from_segments(segments);
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }
}
