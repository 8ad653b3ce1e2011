use serde::{Deserialize, Serialize};

// World constants
pub const WORLD_SIZE: f64 = 2000.0;
pub const FRAME_RATE: u64 = 60; // host frames per second
pub const FRAME_DURATION_MS: u64 = 1000 / FRAME_RATE;

// Population targets
pub const FOOD_COUNT: usize = 100;
pub const AI_COUNT: usize = 10;
pub const PLAYER_COUNT: usize = 1; // minimum live player cells

// Mass constants
pub const STARTING_MASS: f64 = 100.0;
pub const AI_STARTING_MASS: f64 = 50.0;
pub const FOOD_SCORE: f64 = 10.0;
pub const CONSUME_BONUS: f64 = 100.0; // flat gain on top of the loser's mass
pub const COLLISION_THRESHOLD: f64 = 1.1; // radius ratio, not mass

// Size and speed
pub const BASE_RADIUS: f64 = 20.0;
pub const BASE_SPEED: f64 = 5.0; // world units per frame at size == BASE_RADIUS
pub const FOOD_RADIUS: f64 = 5.0;
pub const VELOCITY_RETAIN: f64 = 0.9;
pub const AI_TURN_CHANCE: f64 = 0.02;

// Split / merge
pub const MIN_SPLIT_SCORE: f64 = 40.0;
pub const SPLIT_VELOCITY: f64 = 12.0;
pub const MAX_PLAYER_CELLS: usize = 16;
pub const MERGE_COOLDOWN_MS: u64 = 10_000;
pub const MERGE_DISTANCE_FACTOR: f64 = 2.0;
pub const MERGE_FORCE: f64 = 0.3;
pub const MERGE_START_FORCE: f64 = 0.1;
pub const REPULSION_STRENGTH: f64 = 0.5;

// Safe spawn search
pub const SAFE_SPAWN_DISTANCE: f64 = 100.0;
pub const SAFE_SPAWN_ATTEMPTS: usize = 50;
pub const SAFE_SPAWN_FALLBACK_SAMPLES: usize = 20;

// Viewport
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;
pub const LEADERBOARD_SIZE: usize = 10;

// Server
pub const SERVER_PORT: u16 = 63012;
pub const STATIC_DIR: &str = "static";

/// Tunable parameter surface of the simulation.
///
/// Fixed for the lifetime of a [`World`](crate::game::world::World); the
/// `Default` impl mirrors the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_size: f64,
    pub food_count: usize,
    pub ai_count: usize,
    pub starting_mass: f64,
    pub ai_starting_mass: f64,
    pub food_score: f64,
    pub food_radius: f64,
    pub consume_bonus: f64,
    pub collision_threshold: f64,
    pub base_speed: f64,
    pub ai_turn_chance: f64,
    pub min_split_score: f64,
    pub split_velocity: f64,
    pub max_player_cells: usize,
    pub merge_cooldown_ms: u64,
    pub merge_distance_factor: f64,
    pub merge_force: f64,
    pub merge_start_force: f64,
    pub repulsion_strength: f64,
    pub safe_spawn_distance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            world_size: WORLD_SIZE,
            food_count: FOOD_COUNT,
            ai_count: AI_COUNT,
            starting_mass: STARTING_MASS,
            ai_starting_mass: AI_STARTING_MASS,
            food_score: FOOD_SCORE,
            food_radius: FOOD_RADIUS,
            consume_bonus: CONSUME_BONUS,
            collision_threshold: COLLISION_THRESHOLD,
            base_speed: BASE_SPEED,
            ai_turn_chance: AI_TURN_CHANCE,
            min_split_score: MIN_SPLIT_SCORE,
            split_velocity: SPLIT_VELOCITY,
            max_player_cells: MAX_PLAYER_CELLS,
            merge_cooldown_ms: MERGE_COOLDOWN_MS,
            merge_distance_factor: MERGE_DISTANCE_FACTOR,
            merge_force: MERGE_FORCE,
            merge_start_force: MERGE_START_FORCE,
            repulsion_strength: REPULSION_STRENGTH,
            safe_spawn_distance: SAFE_SPAWN_DISTANCE,
        }
    }
}
