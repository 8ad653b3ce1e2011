use crate::config::*;
use rand::Rng;

/// Anything with a position and a mass: player cells and bots.
pub trait Body {
    fn position(&self) -> (f64, f64);
    fn mass(&self) -> f64;
}

/// Radius of a body with `mass`. NaN for negative mass; callers validate.
pub fn size(mass: f64) -> f64 {
    mass.sqrt() + BASE_RADIUS
}

/// Per-frame speed for `mass`; twice the radius moves at half the speed.
pub fn speed_for_mass(mass: f64, base_speed: f64) -> f64 {
    base_speed / (size(mass) / BASE_RADIUS)
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

pub fn circles_overlap(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> bool {
    distance(x1, y1, x2, y2) < r1 + r2
}

/// True when radius `r1` exceeds `r2` by strictly more than `threshold`.
pub fn outranks(r1: f64, r2: f64, threshold: f64) -> bool {
    r1 > r2 * threshold
}

/// Clamp a coordinate into `[0, world_size]`. Velocity is left untouched.
pub fn clamp_to_world(x: f64, y: f64, world_size: f64) -> (f64, f64) {
    (x.max(0.0).min(world_size), y.max(0.0).min(world_size))
}

/// Unit vector of (x, y), or `None` for an exactly zero vector.
pub fn normalize(x: f64, y: f64) -> Option<(f64, f64)> {
    let len = (x * x + y * y).sqrt();
    if len == 0.0 {
        None
    } else {
        Some((x / len, y / len))
    }
}

/// Mass-weighted centroid. Returns the origin for an empty slice or zero total
/// mass rather than dividing by zero.
pub fn center_of_mass<B: Body>(bodies: &[B]) -> (f64, f64) {
    let total: f64 = bodies.iter().map(Body::mass).sum();
    if bodies.is_empty() || total == 0.0 {
        return (0.0, 0.0);
    }
    let (sx, sy) = bodies.iter().fold((0.0, 0.0), |(sx, sy), b| {
        let (x, y) = b.position();
        (sx + x * b.mass(), sy + y * b.mass())
    });
    (sx / total, sy / total)
}

/// Smallest gap between (x, y) and any body edge.
fn clearance(x: f64, y: f64, occupied: &[(f64, f64, f64)]) -> f64 {
    occupied
        .iter()
        .map(|&(ox, oy, mass)| distance(x, y, ox, oy) - size(mass))
        .fold(f64::INFINITY, f64::min)
}

/// Pick a spawn point at least `min_distance` clear of every body edge.
///
/// `occupied` holds `(x, y, mass)` for each existing body. Tries
/// [`SAFE_SPAWN_ATTEMPTS`] uniform draws; if none qualifies, returns the best of
/// [`SAFE_SPAWN_FALLBACK_SAMPLES`] further draws by clearance. Never fails.
pub fn find_safe_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    world_size: f64,
    occupied: &[(f64, f64, f64)],
    min_distance: f64,
) -> (f64, f64) {
    for _ in 0..SAFE_SPAWN_ATTEMPTS {
        let x = rng.gen_range(0.0..world_size);
        let y = rng.gen_range(0.0..world_size);
        let clear = occupied
            .iter()
            .all(|&(ox, oy, mass)| distance(x, y, ox, oy) > size(mass) + min_distance);
        if clear {
            return (x, y);
        }
    }

    let mut best = (world_size / 2.0, world_size / 2.0);
    let mut best_clearance = f64::NEG_INFINITY;
    for _ in 0..SAFE_SPAWN_FALLBACK_SAMPLES {
        let x = rng.gen_range(0.0..world_size);
        let y = rng.gen_range(0.0..world_size);
        let c = clearance(x, y, occupied);
        if c > best_clearance {
            best_clearance = c;
            best = (x, y);
        }
    }
    tracing::trace!(best_clearance, "safe spawn fell back to best-effort sample");
    best
}
