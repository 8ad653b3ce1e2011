use crate::game::error::{validate, EntityError};
use crate::game::physics::{self, Body};

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub mass: f64,
    pub vx: f64,
    pub vy: f64,
    /// Timestamp (ms) of the last split. `None` = never split or just merged.
    pub split_time: Option<u64>,
}

impl Cell {
    pub fn new(x: f64, y: f64, mass: f64) -> Self {
        Cell {
            x,
            y,
            mass,
            vx: 0.0,
            vy: 0.0,
            split_time: None,
        }
    }

    /// Checked constructor for cells coming from outside the simulation.
    pub fn spawn(x: f64, y: f64, mass: f64, world_size: f64) -> Result<Self, EntityError> {
        validate(x, y, mass, world_size)?;
        Ok(Cell::new(x, y, mass))
    }

    pub fn radius(&self) -> f64 {
        physics::size(self.mass)
    }

    /// Whether the merge cooldown has elapsed at `now_ms`.
    pub fn merge_ready(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        match self.split_time {
            None => true,
            Some(t) => now_ms.saturating_sub(t) > cooldown_ms,
        }
    }
}

impl Body for Cell {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// The local player: a name and 1..=max cells.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub color: String,
    pub cells: Vec<Cell>,
}

impl Player {
    pub fn new(name: String, color: String, x: f64, y: f64, mass: f64) -> Self {
        Player {
            name,
            color,
            cells: vec![Cell::new(x, y, mass)],
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.cells.iter().map(|c| c.mass).sum()
    }

    pub fn center(&self) -> (f64, f64) {
        physics::center_of_mass(&self.cells)
    }

    pub fn is_eliminated(&self) -> bool {
        self.cells.is_empty()
    }
}
