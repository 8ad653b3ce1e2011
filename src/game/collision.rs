//! Consumption passes, run in order: food, player vs bots, bots vs bots.
//!
//! The two combat passes score every pair first, then commit: gains go to
//! survivors, and removals run highest index first.

use tracing::debug;

use crate::game::physics::{self, outranks};
use crate::game::world::World;

/// Every cell (player cells, then bots) eats all food within reach.
/// Returns the number of pellets eaten.
pub fn eat_food(world: &mut World) -> usize {
    let food_radius = world.config.food_radius;
    let food_score = world.config.food_score;
    let food = &mut world.food;
    let before = food.len();

    let bodies = world
        .player
        .cells
        .iter_mut()
        .map(|c| (c.x, c.y, &mut c.mass))
        .chain(world.bots.iter_mut().map(|b| (b.x, b.y, &mut b.mass)));

    for (x, y, mass) in bodies {
        let radius = physics::size(*mass);
        let remaining = food.len();
        food.retain(|f| !physics::circles_overlap(x, y, radius, f.x, f.y, food_radius));
        *mass += (remaining - food.len()) as f64 * food_score;
    }

    before - food.len()
}

/// Outcome of one combat pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CombatReport {
    pub food_eaten: usize,
    pub bots_eaten: usize,
    pub cells_eaten: usize,
    pub player_respawned: bool,
}

/// Player cells against bots over the full cross product.
pub fn player_vs_bots(world: &mut World) -> CombatReport {
    let cfg = world.config;
    let cells = &world.player.cells;
    let bots = &world.bots;

    let mut cell_gain = vec![0.0; cells.len()];
    let mut bot_gain = vec![0.0; bots.len()];
    let mut cell_eaten = vec![false; cells.len()];
    let mut bot_eaten = vec![false; bots.len()];

    for (ci, cell) in cells.iter().enumerate() {
        for (bi, bot) in bots.iter().enumerate() {
            if cell_eaten[ci] {
                break;
            }
            if bot_eaten[bi] {
                continue;
            }
            let (rc, rb) = (cell.radius(), bot.radius());
            if !physics::circles_overlap(cell.x, cell.y, rc, bot.x, bot.y, rb) {
                continue;
            }
            if outranks(rc, rb, cfg.collision_threshold) {
                cell_gain[ci] += bot.mass + cfg.consume_bonus;
                bot_eaten[bi] = true;
            } else if outranks(rb, rc, cfg.collision_threshold) {
                bot_gain[bi] += cell.mass + cfg.consume_bonus;
                cell_eaten[ci] = true;
            }
        }
    }

    for (cell, gain) in world.player.cells.iter_mut().zip(&cell_gain) {
        cell.mass += gain;
    }
    for (bot, gain) in world.bots.iter_mut().zip(&bot_gain) {
        bot.mass += gain;
    }

    let bots_eaten = remove_flagged(&mut world.bots, &bot_eaten);
    let cells_eaten = remove_flagged(&mut world.player.cells, &cell_eaten);
    if bots_eaten + cells_eaten > 0 {
        debug!(bots_eaten, cells_eaten, "player vs bot consumption");
    }
    let player_respawned = world.respawn_player();

    CombatReport {
        bots_eaten,
        cells_eaten,
        player_respawned,
        ..CombatReport::default()
    }
}

/// Bots against each other. When bot `j` eats bot `i`, the scan for `i` stops.
pub fn bots_vs_bots(world: &mut World) -> usize {
    let cfg = world.config;
    let bots = &world.bots;
    let mut gain = vec![0.0; bots.len()];
    let mut eaten = vec![false; bots.len()];

    for i in 0..bots.len() {
        if eaten[i] {
            continue;
        }
        for j in (i + 1)..bots.len() {
            if eaten[j] {
                continue;
            }
            let (a, b) = (&bots[i], &bots[j]);
            let (ra, rb) = (a.radius(), b.radius());
            if !physics::circles_overlap(a.x, a.y, ra, b.x, b.y, rb) {
                continue;
            }
            if outranks(ra, rb, cfg.collision_threshold) {
                gain[i] += b.mass + cfg.consume_bonus;
                eaten[j] = true;
            } else if outranks(rb, ra, cfg.collision_threshold) {
                gain[j] += a.mass + cfg.consume_bonus;
                eaten[i] = true;
                break;
            }
        }
    }

    for (bot, g) in world.bots.iter_mut().zip(&gain) {
        bot.mass += g;
    }
    let removed = remove_flagged(&mut world.bots, &eaten);
    if removed > 0 {
        debug!(removed, "bot vs bot consumption");
    }
    removed
}

/// Remove flagged entries, highest index first. Returns how many were removed.
fn remove_flagged<T>(items: &mut Vec<T>, flags: &[bool]) -> usize {
    let mut removed = 0;
    for idx in (0..flags.len()).rev() {
        if flags[idx] {
            items.remove(idx);
            removed += 1;
        }
    }
    removed
}

/// All three passes in order.
pub fn resolve(world: &mut World) -> CombatReport {
    let food_eaten = eat_food(world);
    let mut report = player_vs_bots(world);
    report.bots_eaten += bots_vs_bots(world);
    report.food_eaten = food_eaten;
    report
}
