use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

// ── Host → Simulation ──

/// Input sampled once at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Pointer position in viewport space.
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Split was requested since the previous frame.
    #[serde(default)]
    pub split: bool,
}

impl Default for FrameInput {
    /// Pointer resting on the center of a default-sized viewport.
    fn default() -> Self {
        FrameInput {
            pointer_x: DEFAULT_VIEWPORT_WIDTH / 2.0,
            pointer_y: DEFAULT_VIEWPORT_HEIGHT / 2.0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            split: false,
        }
    }
}

impl FrameInput {
    /// Copy out this frame's input and clear the split trigger.
    pub fn take(&mut self) -> FrameInput {
        let frame = *self;
        self.split = false;
        frame
    }
}

// ── Simulation → Renderer ──

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub world_size: f64,
    pub camera: CameraState,
    pub player: PlayerState,
    pub bots: Vec<BotState>,
    pub food: Vec<FoodState>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct CellState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub mass: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlayerState {
    pub name: String,
    pub color: String,
    pub total_mass: f64,
    pub cells: Vec<CellState>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BotState {
    pub name: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub mass: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FoodState {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
}
