mod game_loop;
mod input;

use std::path::PathBuf;
use clap::Parser;
use torus_snake_engine::config::{ConfigManager, Validate};
use torus_snake_engine::{log, logger, SharedSnakeEngine, SnakeEngine, SnakeSettings};

use game_loop::{run_game_loop, LoopOptions};

const DEFAULT_CONFIG_FILE: &str = "torus_snake_config.yaml";

#[derive(Parser)]
#[command(name = "torus_snake_runner", about = "Runs the wrapping snake simulation headless")]
struct Args {
    /// YAML settings file; missing file means defaults
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    #[arg(long)]
    tick_interval_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks in total
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Start a new game after game over instead of exiting
    #[arg(long)]
    restart: bool,

    /// Log the board after every tick
    #[arg(long)]
    render: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut SnakeSettings) {
        if let Some(width) = self.width {
            settings.field_width = width;
        }
        if let Some(height) = self.height {
            settings.field_height = height;
        }
        if let Some(tick_interval_ms) = self.tick_interval_ms {
            settings.tick_interval_ms = tick_interval_ms;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager: ConfigManager<_, SnakeSettings> = ConfigManager::from_yaml_file(&args.config);
    let mut settings = config_manager.get_config()?;
    args.apply_overrides(&mut settings);
    settings.validate()?;

    if args.save_config {
        config_manager.set_config(&settings)?;
        log!("Settings saved to {}", args.config.display());
    }

    let engine = SnakeEngine::from_settings(&settings)?;
    let shared = SharedSnakeEngine::new(engine);

    let line_rx = input::spawn_stdin_reader();
    let input_handle = tokio::spawn(input::read_directions(shared.clone(), line_rx));

    let options = LoopOptions {
        tick_interval: settings.tick_interval(),
        max_ticks: args.max_ticks,
        restart: args.restart,
        render: args.render,
    };
    let summary = run_game_loop(shared, options).await;

    input_handle.abort();

    log!(
        "Finished after {} tick(s) and {} game(s), best score {}",
        summary.total_ticks,
        summary.games_played,
        summary.best_score
    );

    Ok(())
}
