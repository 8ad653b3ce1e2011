//! Run the frame loop in-process with a wandering pointer and log the
//! leaderboard. Usage: `headless [frames] [seed]`.

use std::f64::consts::TAU;

use anyhow::Context;
use tokio::sync::watch;
use tokio::time::{interval, Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blobarena::config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, FRAME_DURATION_MS};
use blobarena::game::engine::{create_input, game_loop};
use blobarena::{GameConfig, World};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(raw) => raw.parse().context("frames must be a number")?,
        None => 600,
    };
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse().context("seed must be a number")?,
        None => 1,
    };

    let world = World::with_seed(GameConfig::default(), seed);
    let input = create_input();
    let (tx, mut rx) = watch::channel(world.snapshot(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT));

    // Scripted pointer: circles the viewport center and splits every 4 seconds.
    let pointer = input.clone();
    tokio::spawn(async move {
        let mut every = interval(Duration::from_millis(FRAME_DURATION_MS));
        let mut step: u64 = 0;
        loop {
            every.tick().await;
            let angle = (step as f64 / 240.0) * TAU;
            let mut frame_input = pointer.write().await;
            frame_input.pointer_x = DEFAULT_VIEWPORT_WIDTH / 2.0 + angle.cos() * 200.0;
            frame_input.pointer_y = DEFAULT_VIEWPORT_HEIGHT / 2.0 + angle.sin() * 200.0;
            if step % 240 == 0 {
                frame_input.split = true;
            }
            step += 1;
        }
    });

    // Stand-in renderer: report the leaderboard once a second.
    tokio::spawn(async move {
        let mut seen: u64 = 0;
        while rx.changed().await.is_ok() {
            seen += 1;
            if seen % 60 == 0 {
                let snap = rx.borrow_and_update().clone();
                let top: Vec<String> = snap
                    .leaderboard
                    .iter()
                    .take(3)
                    .map(|e| format!("{}={}", e.name, e.score))
                    .collect();
                info!(
                    frame = seen,
                    cells = snap.player.cells.len(),
                    mass = snap.player.total_mass,
                    top = %top.join(", "),
                    "leaderboard"
                );
            }
        }
    });

    let world = game_loop(world, input, tx, Some(frames)).await;
    info!(
        frames,
        mass = world.player_mass(),
        cells = world.player.cells.len(),
        "simulation finished"
    );
    Ok(())
}
