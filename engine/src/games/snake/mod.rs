mod food;
mod game_state;
mod render;
mod settings;
mod shared;
mod snake;
mod types;

pub use food::place_food;
pub use game_state::{GameStatus, SnakeEngine};
pub use settings::SnakeSettings;
pub use shared::{SharedSnakeEngine, TickSnapshot};
pub use snake::Snake;
pub use types::{Cell, CellState, Direction, FieldSize, Point};
