use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tracing::info;

use crate::config::*;
use crate::game::bot::{Bot, BOT_COLORS};
use crate::game::food::Food;
use crate::game::physics;
use crate::game::player::{Cell, Player};
use crate::game::population;

pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// The whole simulation state. Each tick stage borrows it mutably in turn.
#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub player: Player,
    pub bots: Vec<Bot>,
    pub food: Vec<Food>,
    pub(crate) rng: ChaCha12Rng,
}

impl World {
    /// A populated world seeded from OS entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::thread_rng().gen())
    }

    /// A populated world with a reproducible RNG stream.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let mut world = Self::empty(config, seed);
        population::maintain(&mut world);
        world
    }

    /// No food, no bots, and a player with zero cells. For building scenarios.
    pub fn empty(config: GameConfig, seed: u64) -> Self {
        World {
            config,
            player: Player {
                name: DEFAULT_PLAYER_NAME.to_string(),
                color: BOT_COLORS[4].to_string(),
                cells: Vec::new(),
            },
            bots: Vec::new(),
            food: Vec::new(),
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    pub fn set_player_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.player.name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            trimmed.chars().take(20).collect()
        };
    }

    /// `(x, y, mass)` of every player cell and bot.
    pub fn occupied(&self) -> Vec<(f64, f64, f64)> {
        self.player
            .cells
            .iter()
            .map(|c| (c.x, c.y, c.mass))
            .chain(self.bots.iter().map(|b| (b.x, b.y, b.mass)))
            .collect()
    }

    pub fn find_safe_spawn(&mut self) -> (f64, f64) {
        let occupied = self.occupied();
        physics::find_safe_spawn(
            &mut self.rng,
            self.config.world_size,
            &occupied,
            self.config.safe_spawn_distance,
        )
    }

    /// Give an eliminated player one fresh cell at a safe spot.
    /// Returns false when the player still had cells.
    pub fn respawn_player(&mut self) -> bool {
        if !self.player.is_eliminated() {
            return false;
        }
        let (x, y) = self.find_safe_spawn();
        self.player
            .cells
            .push(Cell::new(x, y, self.config.starting_mass));
        info!(x, y, "player respawned");
        true
    }

    pub fn player_mass(&self) -> f64 {
        self.player.total_mass()
    }

    /// Top-left of the view: player center of mass minus half the viewport.
    pub fn camera(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        let (cx, cy) = self.player.center();
        (cx - viewport_width / 2.0, cy - viewport_height / 2.0)
    }

    /// Player and bots ranked by score, highest first. Ties keep insertion
    /// order with the player ahead of bots.
    pub fn leaderboard(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = std::iter::once((
            self.player.name.clone(),
            self.player.total_mass(),
        ))
        .chain(self.bots.iter().map(|b| (b.name.clone(), b.mass)))
        .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}
