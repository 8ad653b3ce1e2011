use blobarena::config::{FOOD_SCORE, SAFE_SPAWN_DISTANCE, STARTING_MASS};
use blobarena::game::bot::Bot;
use blobarena::game::collision;
use blobarena::game::food::Food;
use blobarena::game::physics::{distance, size};
use blobarena::game::player::Cell;
use blobarena::game::population;
use blobarena::game::split;
use blobarena::{FrameInput, GameConfig, World};

fn empty_world(seed: u64) -> World {
    World::empty(GameConfig::default(), seed)
}

#[test]
fn scenario_a_cell_eats_food_at_same_spot() {
    let mut world = empty_world(1);
    world.player.cells.push(Cell::new(640.0, 480.0, 100.0));
    world.food.push(Food::new(640.0, 480.0));

    assert_eq!(collision::eat_food(&mut world), 1);

    assert!(world.food.is_empty());
    assert_eq!(world.player.cells[0].mass, 100.0 + FOOD_SCORE);
}

#[test]
fn scenario_b_player_eats_smaller_bot() {
    let mut world = empty_world(2);
    world.player.cells.push(Cell::new(700.0, 700.0, 400.0));
    world.bots.push(Bot::new("Snack", 700.0, 700.0, 100.0));

    let report = collision::player_vs_bots(&mut world);

    assert_eq!(report.bots_eaten, 1);
    assert!(world.bots.is_empty());
    assert_eq!(world.player.cells[0].mass, 600.0);
}

#[test]
fn scenario_c_bigger_bot_absorbs_smaller_bot() {
    let mut world = empty_world(3);
    world.bots.push(Bot::new("Large", 300.0, 300.0, 400.0));
    world.bots.push(Bot::new("Small", 320.0, 300.0, 100.0));

    collision::bots_vs_bots(&mut world);

    assert_eq!(world.bots.len(), 1);
    assert_eq!(world.bots[0].mass, 600.0);
}

#[test]
fn scenario_d_eliminated_player_respawns_clear_of_everyone() {
    let mut world = empty_world(4);
    world.player.cells.push(Cell::new(1000.0, 1000.0, 100.0));
    world.bots.push(Bot::new("Hunter", 1000.0, 1000.0, 400.0));
    world.bots.push(Bot::new("Lurker", 300.0, 1600.0, 50.0));
    world.bots.push(Bot::new("Drifter", 1700.0, 200.0, 50.0));

    let report = collision::player_vs_bots(&mut world);

    assert_eq!(report.cells_eaten, 1);
    assert!(report.player_respawned);
    assert_eq!(world.player.cells.len(), 1);
    let cell = &world.player.cells[0];
    assert_eq!(cell.mass, STARTING_MASS);
    for bot in &world.bots {
        let gap = distance(cell.x, cell.y, bot.x, bot.y);
        assert!(gap > size(bot.mass) + SAFE_SPAWN_DISTANCE, "{} too close", bot.name);
    }
}

#[test]
fn split_then_merge_after_cooldown_conserves_mass() {
    let mut world = empty_world(5);
    world.player.cells.push(Cell::new(1000.0, 1000.0, 200.0));

    assert_eq!(split::split(&mut world, Some((1.0, 0.0)), 1_000), 1);
    assert_eq!(world.player.cells.len(), 2);
    assert_eq!(world.player.cells[0].mass, 100.0);
    assert_eq!(world.player.cells[1].mass, 100.0);

    // Still cooling down: no merge even when stacked.
    for cell in &mut world.player.cells {
        cell.x = 1000.0;
        cell.y = 1000.0;
    }
    assert_eq!(split::resolve_merges(&mut world, 5_000), 0);
    assert_eq!(world.player.cells.len(), 2);

    for cell in &mut world.player.cells {
        cell.x = 1000.0;
        cell.y = 1000.0;
    }
    assert_eq!(split::resolve_merges(&mut world, 11_001), 1);
    assert_eq!(world.player.cells.len(), 1);
    assert_eq!(world.player.cells[0].mass, 200.0);
    assert_eq!(world.player.cells[0].split_time, None);
}

#[test]
fn population_is_noop_when_targets_met() {
    let mut world = World::with_seed(GameConfig::default(), 6);
    let food = world.food.clone();
    let bots = world.bots.clone();
    let cells = world.player.cells.clone();

    assert!(population::maintain(&mut world).is_empty());

    assert_eq!(world.food, food);
    assert_eq!(world.bots, bots);
    assert_eq!(world.player.cells, cells);
}

#[test]
fn long_run_preserves_world_invariants() {
    let mut world = World::with_seed(GameConfig::default(), 7);
    let mut input = FrameInput {
        pointer_x: 900.0,
        pointer_y: 100.0,
        ..FrameInput::default()
    };
    for frame in 0..1_200u64 {
        input.split = frame % 200 == 0;
        world.tick(&input, frame * 16);

        let size = world.config.world_size;
        let in_bounds = |x: f64, y: f64| (0.0..=size).contains(&x) && (0.0..=size).contains(&y);
        assert!(world.player.cells.iter().all(|c| in_bounds(c.x, c.y)));
        assert!(world.bots.iter().all(|b| in_bounds(b.x, b.y)));
        assert!(!world.player.cells.is_empty());
        assert!(world.player.cells.len() <= world.config.max_player_cells);
        assert!(world.player.cells.iter().all(|c| c.mass.is_finite() && c.mass >= 0.0));
    }
}
