use crate::games::SessionRng;
use crate::log_verbose;
use super::snake::Snake;
use super::types::{FieldSize, Point};

/// Draws uniformly over the whole field until the cell is not under the snake.
///
/// There is no attempt limit: the expected number of draws grows as the snake
/// covers more of the field, and a snake covering every cell never returns.
pub fn place_food(field_size: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Point {
    let mut attempts: u64 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        let x = rng.random_range(0..field_size.width());
        let y = rng.random_range(0..field_size.height());
        let candidate = Point::new(x, y);

        if !snake.contains(candidate) {
            log_verbose!(
                "Food placed at ({}, {}) after {} draw(s)",
                candidate.x,
                candidate.y,
                attempts
            );
            return candidate;
        }
    }
}
