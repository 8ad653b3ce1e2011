use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::TAU;

use crate::game::error::{validate, EntityError};
use crate::game::physics::{self, Body};

pub const BOT_NAMES: [&str; 20] = [
    "Blinky", "Chomper", "Gobbler", "Nibbles", "Pac", "Muncher", "Slurp", "Bubbles",
    "Dot", "Jelly", "Sprout", "Orbit", "Pebble", "Wobble", "Zippy", "Mochi",
    "Pixel", "Comet", "Noodle", "Tofu",
];

pub const BOT_COLORS: [&str; 15] = [
    "#FF4136", "#FF6B35", "#FFDC00", "#2ECC40", "#0074D9",
    "#7FDBFF", "#B10DC9", "#F012BE", "#FF69B4", "#01FF70",
    "#3D9970", "#39CCCC", "#E65100", "#00BCD4", "#8BC34A",
];

/// Single-cell AI wanderer. Never splits or merges.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub x: f64,
    pub y: f64,
    pub mass: f64,
    pub color: String,
    /// Movement heading in radians.
    pub heading: f64,
    pub name: String,
}

impl Bot {
    pub fn new(name: impl Into<String>, x: f64, y: f64, mass: f64) -> Self {
        Bot {
            x,
            y,
            mass,
            color: BOT_COLORS[0].to_string(),
            heading: 0.0,
            name: name.into(),
        }
    }

    /// Checked constructor for bots coming from outside the simulation.
    pub fn spawn(
        name: impl Into<String>,
        x: f64,
        y: f64,
        mass: f64,
        world_size: f64,
    ) -> Result<Self, EntityError> {
        validate(x, y, mass, world_size)?;
        Ok(Bot::new(name, x, y, mass))
    }

    /// A bot with a random color and heading.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, name: &str, x: f64, y: f64, mass: f64) -> Self {
        Bot {
            x,
            y,
            mass,
            color: BOT_COLORS[rng.gen_range(0..BOT_COLORS.len())].to_string(),
            heading: rng.gen_range(0.0..TAU),
            name: name.to_string(),
        }
    }

    pub fn radius(&self) -> f64 {
        physics::size(self.mass)
    }
}

impl Body for Bot {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// Pick a random pool name not held by any bot in `taken`. Once the pool is
/// exhausted the first pool name is reused; uniqueness is not guaranteed then.
pub fn pick_name<R: Rng + ?Sized>(rng: &mut R, taken: &[Bot]) -> &'static str {
    let free: Vec<&'static str> = BOT_NAMES
        .iter()
        .copied()
        .filter(|name| !taken.iter().any(|b| b.name == *name))
        .collect();
    free.choose(rng).copied().unwrap_or(BOT_NAMES[0])
}
