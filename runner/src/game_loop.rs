use std::time::Duration;
use tokio::time::interval;
use torus_snake_engine::{log, SharedSnakeEngine};

pub struct LoopOptions {
    pub tick_interval: Duration,
    pub max_ticks: Option<u64>,
    pub restart: bool,
    pub render: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_ticks: u64,
    pub games_played: u32,
    pub best_score: u32,
}

/// Ticks the engine at a fixed period until the game ends (or the tick budget
/// runs out). With `restart` a finished game is reset and play continues.
pub async fn run_game_loop(shared: SharedSnakeEngine, options: LoopOptions) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut tick_interval_timer = interval(options.tick_interval);

    if shared.reset_if_over().await {
        log!("Previous game was over, starting a new one");
    }
    summary.games_played = 1;

    loop {
        if let Some(max_ticks) = options.max_ticks
            && summary.total_ticks >= max_ticks
        {
            log!("Tick limit of {} reached", max_ticks);
            break;
        }

        tick_interval_timer.tick().await;

        let snapshot = shared.tick().await;
        summary.total_ticks += 1;
        summary.best_score = summary.best_score.max(snapshot.score);

        log!(
            "Tick {}: score {}, length {}",
            snapshot.ticks,
            snapshot.score,
            snapshot.cells.len() - 1
        );
        if options.render {
            log!("\n{}", shared.render_text().await);
        }

        if snapshot.is_over() {
            log!("Game over. Final score: {}", snapshot.score);
            if !options.restart {
                break;
            }
            shared.reset_if_over().await;
            summary.games_played += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use torus_snake_engine::{Direction, SessionRng, SnakeEngine};

    fn create_shared(seed: u64) -> SharedSnakeEngine {
        let engine = SnakeEngine::with_rng(8, 6, SessionRng::new(seed)).unwrap();
        SharedSnakeEngine::new(engine)
    }

    fn options(max_ticks: Option<u64>, restart: bool) -> LoopOptions {
        LoopOptions {
            tick_interval: Duration::from_millis(1),
            max_ticks,
            restart,
            render: true,
        }
    }

    #[tokio::test]
    async fn test_loop_stops_at_tick_limit() {
        let shared = create_shared(42);
        let summary = run_game_loop(shared.clone(), options(Some(5), false)).await;
        assert_eq!(summary.total_ticks, 5);
        assert_eq!(summary.games_played, 1);
        assert!(shared.snapshot().await.ticks <= 5);
    }

    #[tokio::test]
    async fn test_loop_stops_on_game_over() {
        let shared = create_shared(42);
        shared.set_direction(Direction::Left).await;
        let summary = run_game_loop(shared.clone(), options(Some(100), false)).await;
        assert_eq!(summary.total_ticks, 1);
        assert!(shared.snapshot().await.is_over());
    }

    #[tokio::test]
    async fn test_loop_restarts_after_game_over() {
        let shared = create_shared(42);
        shared.set_direction(Direction::Left).await;
        let summary = run_game_loop(shared.clone(), options(Some(3), true)).await;
        assert_eq!(summary.total_ticks, 3);
        assert_eq!(summary.games_played, 2);
        assert_eq!(shared.lock().await.direction(), Direction::Right);
    }
}
