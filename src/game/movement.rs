use rand::Rng;
use std::f64::consts::TAU;

use crate::config::VELOCITY_RETAIN;
use crate::game::physics;
use crate::game::world::World;

/// Unit direction from the viewport center toward the pointer, or `None` when
/// the pointer sits exactly on the center.
pub fn pointer_direction(
    pointer_x: f64,
    pointer_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> Option<(f64, f64)> {
    physics::normalize(
        pointer_x - viewport_width / 2.0,
        pointer_y - viewport_height / 2.0,
    )
}

/// Steer player cells with inertia, then integrate and clamp.
///
/// With no direction, velocities are kept as they are and cells still drift.
pub fn move_player(world: &mut World, direction: Option<(f64, f64)>) {
    let world_size = world.config.world_size;
    let base_speed = world.config.base_speed;
    for cell in &mut world.player.cells {
        if let Some((dx, dy)) = direction {
            let speed = physics::speed_for_mass(cell.mass, base_speed);
            let gain = 1.0 - VELOCITY_RETAIN;
            cell.vx = cell.vx * VELOCITY_RETAIN + dx * speed * gain;
            cell.vy = cell.vy * VELOCITY_RETAIN + dy * speed * gain;
        }
        cell.x += cell.vx;
        cell.y += cell.vy;
        (cell.x, cell.y) = physics::clamp_to_world(cell.x, cell.y, world_size);
    }
}

/// Independent random walk per bot.
pub fn move_bots(world: &mut World) {
    let world_size = world.config.world_size;
    let base_speed = world.config.base_speed;
    let turn_chance = world.config.ai_turn_chance;
    for bot in &mut world.bots {
        if world.rng.gen_bool(turn_chance) {
            bot.heading = world.rng.gen_range(0.0..TAU);
        }
        let speed = physics::speed_for_mass(bot.mass, base_speed);
        bot.x += speed * bot.heading.cos();
        bot.y += speed * bot.heading.sin();
        (bot.x, bot.y) = physics::clamp_to_world(bot.x, bot.y, world_size);
    }
}

pub fn step(world: &mut World, direction: Option<(f64, f64)>) {
    move_player(world, direction);
    move_bots(world);
}
