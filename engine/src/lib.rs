pub mod config;
pub mod games;
pub mod logger;

pub use games::SessionRng;
pub use games::snake::{
    Cell, CellState, Direction, FieldSize, GameStatus, Point, SharedSnakeEngine, Snake,
    SnakeEngine, SnakeSettings, TickSnapshot,
};
