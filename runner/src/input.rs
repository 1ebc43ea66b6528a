use std::io::BufRead;
use tokio::sync::mpsc;
use torus_snake_engine::{log, SharedSnakeEngine};

/// Reads stdin lines on a plain thread and forwards them over a channel.
///
/// A blocking stdin read cannot be cancelled, so it stays off the runtime; the
/// thread is left behind when `main` returns instead of holding the process open.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    line_rx
}

/// Applies one direction word per line until the sender side closes.
pub async fn read_directions(
    shared: SharedSnakeEngine,
    mut line_rx: mpsc::UnboundedReceiver<String>,
) {
    while let Some(line) = line_rx.recv().await {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if !shared.set_direction_str(word).await {
            log!("Unknown direction {:?}, keeping the current one", word);
        }
    }
}
