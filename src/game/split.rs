//! Split and merge physics for the player's cells.
//!
//! Merging is planned by index during the pair scan and committed afterwards.
//! Marked indices are grouped into runs of consecutive integers, so only cells
//! that sit next to each other in the backing list collapse together in one
//! tick, even when a non-adjacent cell is also in range.

use tracing::debug;

use crate::game::physics;
use crate::game::player::Cell;
use crate::game::world::World;

/// Split every cell with enough mass, while the player has room for more.
///
/// The child is ejected along `direction` at the split velocity; the parent
/// recoils at half that speed. Returns how many cells were created.
pub fn split(world: &mut World, direction: Option<(f64, f64)>, now_ms: u64) -> usize {
    let cfg = world.config;
    let (dx, dy) = direction.unwrap_or((0.0, 0.0));
    let cells = &mut world.player.cells;
    let existing = cells.len();
    let mut children = Vec::new();

    for cell in cells.iter_mut() {
        if existing + children.len() >= cfg.max_player_cells {
            break;
        }
        if cell.mass < cfg.min_split_score {
            continue;
        }
        let half = cell.mass / 2.0;
        cell.mass = half;
        cell.vx -= dx * cfg.split_velocity * 0.5;
        cell.vy -= dy * cfg.split_velocity * 0.5;
        cell.split_time = Some(now_ms);

        let mut child = Cell::new(cell.x, cell.y, half);
        child.vx = dx * cfg.split_velocity;
        child.vy = dy * cfg.split_velocity;
        child.split_time = Some(now_ms);
        children.push(child);
    }

    let created = children.len();
    cells.extend(children);
    if created > 0 {
        debug!(created, cells = cells.len(), "player split");
    }
    created
}

/// Push `a` and `b` along `(fx, fy)` in opposite directions.
fn apply_pair_force(cells: &mut [Cell], a: usize, b: usize, fx: f64, fy: f64) {
    cells[a].vx += fx;
    cells[a].vy += fy;
    cells[b].vx -= fx;
    cells[b].vy -= fy;
}

/// Score every cell pair, apply attraction and repulsion, and commit merges.
/// Returns the number of merged cells produced.
pub fn resolve_merges(world: &mut World, now_ms: u64) -> usize {
    let cfg = world.config;
    let cells = &mut world.player.cells;
    let mut marked: Vec<usize> = Vec::new();

    for i in 0..cells.len() {
        for j in (i + 1)..cells.len() {
            let (a, b) = (&cells[i], &cells[j]);
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let dist = physics::distance(a.x, a.y, b.x, b.y);
            let touch = a.radius() + b.radius();
            let merge_distance = touch * cfg.merge_distance_factor;
            let eligible = a.merge_ready(now_ms, cfg.merge_cooldown_ms)
                && b.merge_ready(now_ms, cfg.merge_cooldown_ms);

            if dist < merge_distance && eligible {
                if dist < touch * 0.5 {
                    marked.push(i);
                    marked.push(j);
                } else {
                    let pull = cfg.merge_force / dist.max(1.0);
                    apply_pair_force(cells, i, j, dx * pull, dy * pull);
                }
                continue;
            }

            if dist < touch {
                let push = (touch - dist) / touch * cfg.repulsion_strength;
                let (nx, ny) = (dx / dist.max(1.0), dy / dist.max(1.0));
                apply_pair_force(cells, i, j, -nx * push, -ny * push);
            }
            if dist > touch {
                let force = if eligible {
                    cfg.merge_force
                } else {
                    cfg.merge_start_force
                };
                let pull = force / dist.max(1.0);
                apply_pair_force(cells, i, j, dx * pull, dy * pull);
            }
        }
    }

    commit_merges(cells, marked)
}

/// Group sorted, deduplicated indices into runs of consecutive integers.
pub fn contiguous_runs(mut indices: Vec<usize>) -> Vec<Vec<usize>> {
    indices.sort_unstable();
    indices.dedup();
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for idx in indices {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|&last| last + 1 == idx) => run.push(idx),
            _ => runs.push(vec![idx]),
        }
    }
    runs
}

/// Collapse each run into one cell: summed mass, mass-weighted position and
/// velocity, split time cleared. Members are removed highest index first and
/// the merged cells appended.
fn commit_merges(cells: &mut Vec<Cell>, marked: Vec<usize>) -> usize {
    if marked.is_empty() {
        return 0;
    }
    let runs = contiguous_runs(marked);
    let merged: Vec<Cell> = runs
        .iter()
        .map(|run| {
            let mass: f64 = run.iter().map(|&i| cells[i].mass).sum();
            let weighted = |f: fn(&Cell) -> f64| -> f64 {
                if mass == 0.0 {
                    f(&cells[run[0]])
                } else {
                    run.iter().map(|&i| f(&cells[i]) * cells[i].mass).sum::<f64>() / mass
                }
            };
            let mut cell = Cell::new(weighted(|c| c.x), weighted(|c| c.y), mass);
            cell.vx = weighted(|c| c.vx);
            cell.vy = weighted(|c| c.vy);
            cell
        })
        .collect();

    let mut doomed: Vec<usize> = runs.into_iter().flatten().collect();
    doomed.sort_unstable_by(|a, b| b.cmp(a));
    for idx in doomed {
        cells.remove(idx);
    }

    let produced = merged.len();
    debug!(produced, "player cells merged");
    cells.extend(merged);
    produced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn world_with(cells: Vec<Cell>) -> World {
        let mut world = World::empty(GameConfig::default(), 2);
        world.player.cells = cells;
        world
    }

    #[test]
    fn small_cell_does_not_split() {
        let mut world = world_with(vec![Cell::new(100.0, 100.0, 39.0)]);
        assert_eq!(split(&mut world, Some((1.0, 0.0)), 0), 0);
        assert_eq!(world.player.cells.len(), 1);
        assert_eq!(world.player.cells[0].mass, 39.0);
        assert_eq!(world.player.cells[0].split_time, None);
    }

    #[test]
    fn split_halves_mass_and_ejects_child() {
        let mut world = world_with(vec![Cell::new(100.0, 100.0, 40.0)]);
        assert_eq!(split(&mut world, Some((0.0, 1.0)), 500), 1);
        let cells = &world.player.cells;
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].mass, 20.0);
        assert_eq!(cells[1].mass, 20.0);
        assert_eq!(cells[1].vy, 12.0);
        assert_eq!(cells[0].vy, -6.0);
        assert_eq!((cells[1].x, cells[1].y), (100.0, 100.0));
        assert!(cells.iter().all(|c| c.split_time == Some(500)));
    }

    #[test]
    fn split_stops_at_cell_cap() {
        let cells = (0..15).map(|i| Cell::new(i as f64 * 100.0, 0.0, 200.0)).collect();
        let mut world = world_with(cells);
        assert_eq!(split(&mut world, Some((1.0, 0.0)), 0), 1);
        assert_eq!(world.player.cells.len(), 16);
        assert_eq!(split(&mut world, Some((1.0, 0.0)), 0), 0);
        assert_eq!(world.player.cells.len(), 16);
    }

    #[test]
    fn split_without_direction_leaves_velocity() {
        let mut world = world_with(vec![Cell::new(100.0, 100.0, 80.0)]);
        split(&mut world, None, 0);
        assert!(world.player.cells.iter().all(|c| c.vx == 0.0 && c.vy == 0.0));
    }

    #[test]
    fn runs_chain_consecutive_indices_only() {
        assert_eq!(contiguous_runs(vec![3, 0, 1, 1, 5, 4]), vec![vec![0, 1], vec![3, 4, 5]]);
        assert_eq!(contiguous_runs(vec![0, 2]), vec![vec![0], vec![2]]);
        assert!(contiguous_runs(Vec::new()).is_empty());
    }

    #[test]
    fn close_ready_cells_merge_into_one() {
        let mut a = Cell::new(100.0, 100.0, 60.0);
        let mut b = Cell::new(101.0, 100.0, 40.0);
        a.vx = 1.0;
        b.vx = -1.0;
        let mut world = world_with(vec![a, b]);
        assert_eq!(resolve_merges(&mut world, 0), 1);
        let cells = &world.player.cells;
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].mass, 100.0);
        assert!((cells[0].x - 100.4).abs() < 1e-9);
        assert!((cells[0].vx - 0.2).abs() < 1e-9);
        assert_eq!(cells[0].split_time, None);
    }

    #[test]
    fn cooling_down_cells_repel_instead_of_merging() {
        let mut a = Cell::new(100.0, 100.0, 60.0);
        let mut b = Cell::new(110.0, 100.0, 40.0);
        a.split_time = Some(1_000);
        b.split_time = Some(1_000);
        let mut world = world_with(vec![a, b]);
        assert_eq!(resolve_merges(&mut world, 2_000), 0);
        let cells = &world.player.cells;
        assert_eq!(cells.len(), 2);
        assert!(cells[0].vx < 0.0);
        assert!(cells[1].vx > 0.0);
        assert_eq!(cells[0].vx, -cells[1].vx);
    }

    #[test]
    fn ready_cells_in_range_attract() {
        // touch = 30 + 30 = 60, merge zone = 120
        let a = Cell::new(100.0, 100.0, 100.0);
        let b = Cell::new(200.0, 100.0, 100.0);
        let mut world = world_with(vec![a, b]);
        resolve_merges(&mut world, 0);
        let cells = &world.player.cells;
        assert!((cells[0].vx - 0.3).abs() < 1e-12);
        assert!((cells[1].vx + 0.3).abs() < 1e-12);
    }

    #[test]
    fn distant_cooling_cells_drift_together_weakly() {
        let mut a = Cell::new(100.0, 100.0, 100.0);
        let mut b = Cell::new(400.0, 100.0, 100.0);
        a.split_time = Some(0);
        b.split_time = Some(0);
        let mut world = world_with(vec![a, b]);
        resolve_merges(&mut world, 10);
        let cells = &world.player.cells;
        assert!((cells[0].vx - 0.1).abs() < 1e-12);
        assert!((cells[1].vx + 0.1).abs() < 1e-12);
    }

    #[test]
    fn non_adjacent_pair_does_not_collapse_together() {
        // Cells 0 and 2 overlap; cell 1 is far away from both.
        let cells = vec![
            Cell::new(100.0, 100.0, 50.0),
            Cell::new(1500.0, 1500.0, 50.0),
            Cell::new(100.0, 100.0, 50.0),
        ];
        let mut world = world_with(cells);
        assert_eq!(resolve_merges(&mut world, 0), 2);
        let cells = &world.player.cells;
        assert_eq!(cells.len(), 3);
        assert_eq!(cells.iter().map(|c| c.mass).sum::<f64>(), 150.0);
    }
}
