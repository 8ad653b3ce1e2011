use tracing::trace;

use crate::config::PLAYER_COUNT;
use crate::game::bot::{self, Bot};
use crate::game::food::Food;
use crate::game::world::World;

/// What a maintenance pass added.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Replenished {
    pub food: usize,
    pub bots: usize,
    pub player_cells: usize,
}

impl Replenished {
    pub fn is_empty(&self) -> bool {
        *self == Replenished::default()
    }
}

pub fn replenish_food(world: &mut World) -> usize {
    let mut added = 0;
    while world.food.len() < world.config.food_count {
        let food = Food::random(&mut world.rng, world.config.world_size);
        world.food.push(food);
        added += 1;
    }
    added
}

pub fn replenish_bots(world: &mut World) -> usize {
    let mut added = 0;
    while world.bots.len() < world.config.ai_count {
        let (x, y) = world.find_safe_spawn();
        let name = bot::pick_name(&mut world.rng, &world.bots);
        let bot = Bot::random(&mut world.rng, name, x, y, world.config.ai_starting_mass);
        world.bots.push(bot);
        added += 1;
    }
    added
}

/// Restore food, bot and player counts to their targets. No-op when every
/// count is already met.
pub fn maintain(world: &mut World) -> Replenished {
    let food = replenish_food(world);
    let bots = replenish_bots(world);
    let mut player_cells = 0;
    while world.player.cells.len() < PLAYER_COUNT && world.respawn_player() {
        player_cells += 1;
    }
    let added = Replenished {
        food,
        bots,
        player_cells,
    };
    if !added.is_empty() {
        trace!(?added, "population replenished");
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn fills_an_empty_world() {
        let mut world = World::empty(GameConfig::default(), 8);
        let added = maintain(&mut world);
        assert_eq!(added.food, 100);
        assert_eq!(added.bots, 10);
        assert_eq!(added.player_cells, 1);
    }

    #[test]
    fn is_idempotent_at_target() {
        let mut world = World::with_seed(GameConfig::default(), 8);
        let before = (world.food.clone(), world.bots.clone(), world.player.cells.clone());
        assert!(maintain(&mut world).is_empty());
        assert_eq!(before, (world.food.clone(), world.bots.clone(), world.player.cells.clone()));
    }

    #[test]
    fn tops_up_only_the_missing() {
        let mut world = World::with_seed(GameConfig::default(), 8);
        world.food.truncate(97);
        world.bots.remove(0);
        let added = maintain(&mut world);
        assert_eq!(added, Replenished { food: 3, bots: 1, player_cells: 0 });
    }

    #[test]
    fn new_bot_takes_an_unused_name() {
        let mut world = World::with_seed(GameConfig::default(), 8);
        world.bots.remove(3);
        let others: Vec<String> = world.bots.iter().map(|b| b.name.clone()).collect();
        maintain(&mut world);
        let newcomer = &world.bots.last().unwrap().name;
        assert!(!others.contains(newcomer));
    }
}
