use rand::Rng;

pub const FOOD_COLORS: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF",
    "#FF9F40", "#E7E9ED", "#7CB342", "#F06292", "#4DD0E1",
];

/// A pellet with a fixed radius and no mass of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

impl Food {
    pub fn new(x: f64, y: f64) -> Self {
        Food {
            x,
            y,
            color: FOOD_COLORS[0].to_string(),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, world_size: f64) -> Self {
        Food {
            x: rng.gen_range(0.0..world_size),
            y: rng.gen_range(0.0..world_size),
            color: FOOD_COLORS[rng.gen_range(0..FOOD_COLORS.len())].to_string(),
        }
    }
}
