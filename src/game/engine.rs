use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::*;
use crate::game::collision::{self, CombatReport};
use crate::game::movement;
use crate::game::population::{self, Replenished};
use crate::game::split;
use crate::game::world::World;
use crate::protocol::messages::*;

/// Input shared between the input source and the frame loop. Pointer writes
/// are last-write-wins; the split flag is consumed by the next frame.
pub type SharedInput = Arc<RwLock<FrameInput>>;

pub fn create_input() -> SharedInput {
    Arc::new(RwLock::new(FrameInput::default()))
}

/// What happened during one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub cells_split: usize,
    pub cells_merged: usize,
    pub combat: CombatReport,
    pub replenished: Replenished,
}

/// One full simulation step: movement, split request, merge physics,
/// consumption, population upkeep.
pub fn tick(world: &mut World, input: &FrameInput, now_ms: u64) -> TickReport {
    let direction = movement::pointer_direction(
        input.pointer_x,
        input.pointer_y,
        input.viewport_width,
        input.viewport_height,
    );

    movement::step(world, direction);

    let cells_split = if input.split {
        split::split(world, direction, now_ms)
    } else {
        0
    };
    let cells_merged = split::resolve_merges(world, now_ms);

    let combat = collision::resolve(world);
    let replenished = population::maintain(world);

    TickReport {
        cells_split,
        cells_merged,
        combat,
        replenished,
    }
}

impl World {
    pub fn tick(&mut self, input: &FrameInput, now_ms: u64) -> TickReport {
        tick(self, input, now_ms)
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self, viewport_width: f64, viewport_height: f64) -> WorldSnapshot {
        build_snapshot(self, viewport_width, viewport_height)
    }
}

pub fn build_snapshot(world: &World, viewport_width: f64, viewport_height: f64) -> WorldSnapshot {
    let (cx, cy) = world.camera(viewport_width, viewport_height);

    let player = PlayerState {
        name: world.player.name.clone(),
        color: world.player.color.clone(),
        total_mass: world.player_mass(),
        cells: world
            .player
            .cells
            .iter()
            .map(|c| CellState {
                x: c.x,
                y: c.y,
                radius: c.radius(),
                mass: c.mass,
            })
            .collect(),
    };

    let bots = world
        .bots
        .iter()
        .map(|b| BotState {
            name: b.name.clone(),
            color: b.color.clone(),
            x: b.x,
            y: b.y,
            radius: b.radius(),
            mass: b.mass,
        })
        .collect();

    let food = world
        .food
        .iter()
        .map(|f| FoodState {
            x: f.x,
            y: f.y,
            color: f.color.clone(),
        })
        .collect();

    let leaderboard = world
        .leaderboard()
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .map(|(name, score)| LeaderboardEntry {
            name,
            score: score as u64,
        })
        .collect();

    WorldSnapshot {
        world_size: world.config.world_size,
        camera: CameraState { x: cx, y: cy },
        player,
        bots,
        food,
        leaderboard,
    }
}

/// Drive the world once per frame, publishing a snapshot after each tick.
///
/// Runs until `frames` ticks have elapsed, or forever when `None`. Input is
/// read at the start of each frame; a split raised mid-frame fires next frame.
pub async fn game_loop(
    mut world: World,
    input: SharedInput,
    snapshots: watch::Sender<WorldSnapshot>,
    frames: Option<u64>,
) -> World {
    let mut frame_interval = interval(Duration::from_millis(FRAME_DURATION_MS));
    frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let started = Instant::now();
    let mut frame: u64 = 0;

    info!(?frames, "frame loop started");
    while frames.map_or(true, |limit| frame < limit) {
        frame_interval.tick().await;
        let frame_input = input.write().await.take();
        let now_ms = started.elapsed().as_millis() as u64;

        let report = world.tick(&frame_input, now_ms);
        if report.combat.player_respawned {
            debug!(frame, "player eliminated");
        }

        let snapshot = world.snapshot(frame_input.viewport_width, frame_input.viewport_height);
        // No receivers left means nobody renders; keep simulating regardless.
        let _ = snapshots.send(snapshot);
        frame += 1;
    }
    info!(frame, "frame loop stopped");
    world
}
