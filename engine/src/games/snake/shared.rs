use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use super::game_state::{GameStatus, SnakeEngine};
use super::types::{Cell, Direction};

/// What a driver needs after one step, captured under the same lock as the tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickSnapshot {
    pub cells: Vec<Cell>,
    pub status: GameStatus,
    pub score: u32,
    pub ticks: u64,
}

impl TickSnapshot {
    fn capture(engine: &SnakeEngine) -> Self {
        Self {
            cells: engine.current_state(),
            status: engine.status(),
            score: engine.score(),
            ticks: engine.ticks(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

/// Engine handle for a ticker task and an input task running side by side.
/// Ticks and direction writes go through one lock, so a write that completes
/// before a tick starts is seen by that tick.
#[derive(Clone)]
pub struct SharedSnakeEngine {
    engine: Arc<Mutex<SnakeEngine>>,
}

impl SharedSnakeEngine {
    pub fn new(engine: SnakeEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, SnakeEngine> {
        self.engine.lock().await
    }

    pub async fn tick(&self) -> TickSnapshot {
        let mut engine = self.engine.lock().await;
        engine.tick();
        TickSnapshot::capture(&engine)
    }

    pub async fn snapshot(&self) -> TickSnapshot {
        let engine = self.engine.lock().await;
        TickSnapshot::capture(&engine)
    }

    pub async fn set_direction(&self, direction: Direction) {
        self.engine.lock().await.set_direction(direction);
    }

    pub async fn set_direction_str(&self, value: &str) -> bool {
        self.engine.lock().await.set_direction_str(value)
    }

    /// Starts a fresh run if the current one has ended. Returns whether it reset.
    pub async fn reset_if_over(&self) -> bool {
        let mut engine = self.engine.lock().await;
        if engine.is_over() {
            engine.reset();
            true
        } else {
            false
        }
    }

    pub async fn render_text(&self) -> String {
        self.engine.lock().await.render_text()
    }
}
