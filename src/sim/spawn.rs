//! Procedural spawning of obstacles and pickups
//!
//! Two independent cursors hold the world distance to the next spawn of each
//! kind. Both count down by the scroll speed, so spawn spacing is measured in
//! traversed world units rather than frames. When a cursor enters the
//! visible area the matching generator fires at that position and the cursor
//! jumps ahead by a random interval.
//!
//! Draw order per obstacle: kind roll, then drift or height, then interval.
//! Per item: lift, then interval.

use super::random::RandomSource;
use super::rect::Rect;
use super::state::{DamageClass, Item, ItemKind, Obstacle, ObstacleKind, World};
use crate::tuning::Tuning;

/// What the spawner produced this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub obstacles: usize,
    pub items: usize,
}

/// Advance both spawn cursors and emit anything that came into view
pub fn run_spawner<R: RandomSource>(
    world: &mut World,
    obstacles: &mut Vec<Obstacle>,
    items: &mut Vec<Item>,
    rng: &mut R,
    tuning: &Tuning,
) -> SpawnReport {
    let mut report = SpawnReport::default();
    let trigger_x = tuning.viewport.width;

    // A spawn further left than the widest entity would already be off
    // screen; clamping also bounds the loops when one tick covers a huge
    // distance
    let obstacle_floor = -tuning.moving_obstacle_width.max(tuning.fixed_obstacle_width);
    world.obstacle_cursor = (world.obstacle_cursor - world.scroll_speed).max(obstacle_floor);
    // Looping keeps spacing intact even if one tick covers several intervals
    while world.obstacle_cursor <= trigger_x {
        let spawn_x = world.obstacle_cursor;
        let obstacle = generate_obstacle(spawn_x, world.scroll_speed, world.ground_y, rng, tuning);
        world.obstacle_cursor = spawn_x + rng.range(tuning.obstacle_interval);
        if obstacle.rect.is_off_left() {
            log::trace!("Skipped obstacle behind the left edge at x={:.1}", spawn_x);
            continue;
        }
        log::debug!(
            "Spawned {:?} obstacle at x={:.1} ({}x{})",
            obstacle.kind,
            spawn_x,
            obstacle.rect.size.x,
            obstacle.rect.size.y
        );
        obstacles.push(obstacle);
        report.obstacles += 1;
    }

    world.item_cursor = (world.item_cursor - world.scroll_speed).max(-tuning.item_size);
    while world.item_cursor <= trigger_x {
        let spawn_x = world.item_cursor;
        let item = generate_item(spawn_x, world.ground_y, rng, tuning);
        world.item_cursor = spawn_x + rng.range(tuning.item_interval);
        if item.rect.is_off_left() {
            log::trace!("Skipped item behind the left edge at x={:.1}", spawn_x);
            continue;
        }
        log::debug!("Spawned {:?} item at x={:.1} y={:.1}", item.kind, spawn_x, item.rect.pos.y);
        items.push(item);
        report.items += 1;
    }

    report
}

/// Build one obstacle at `x`: either a fast low runner or a fixed pillar
pub fn generate_obstacle<R: RandomSource>(
    x: f32,
    scroll_speed: f32,
    ground_y: f32,
    rng: &mut R,
    tuning: &Tuning,
) -> Obstacle {
    if rng.uniform() < tuning.moving_obstacle_chance {
        // Always faster than the world so it closes on the player
        let drift = -(scroll_speed + rng.range(tuning.moving_obstacle_extra_speed));
        let (w, h) = (tuning.moving_obstacle_width, tuning.moving_obstacle_height);
        Obstacle {
            rect: Rect::new(x, ground_y - h, w, h),
            kind: ObstacleKind::Moving { drift },
            damage: DamageClass::High,
        }
    } else {
        let h = rng.range(tuning.fixed_obstacle_height);
        Obstacle {
            rect: Rect::new(x, ground_y - h, tuning.fixed_obstacle_width, h),
            kind: ObstacleKind::Fixed,
            damage: DamageClass::Low,
        }
    }
}

/// Build one health pickup at `x`, lifted off the ground so it takes a jump
pub fn generate_item<R: RandomSource>(x: f32, ground_y: f32, rng: &mut R, tuning: &Tuning) -> Item {
    let lift = rng.range(tuning.item_lift);
    let size = tuning.item_size;
    Item {
        rect: Rect::new(x, ground_y - size - lift, size, size),
        kind: ItemKind::Health,
        value: tuning.health_item_value,
    }
}
