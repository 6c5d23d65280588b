//! World scrolling and off-screen pruning

use super::state::{Item, Obstacle};

/// Move every obstacle and item left by the world scroll plus its own drift,
/// then drop anything that has fully left the screen.
///
/// Returns how many entities were pruned.
pub fn scroll_world(obstacles: &mut Vec<Obstacle>, items: &mut Vec<Item>, scroll_speed: f32) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.rect.pos.x -= scroll_speed;
        let drift = obstacle.kind.drift();
        if drift != 0.0 {
            obstacle.rect.pos.x += drift;
        }
    }
    for item in items.iter_mut() {
        item.rect.pos.x -= scroll_speed;
    }

    prune_off_screen(obstacles, items)
}

/// Drop every obstacle and item whose right edge is at or past the left
/// screen edge. Returns how many were removed.
pub fn prune_off_screen(obstacles: &mut Vec<Obstacle>, items: &mut Vec<Item>) -> usize {
    let before = obstacles.len() + items.len();
    obstacles.retain(|o| !o.rect.is_off_left());
    items.retain(|i| !i.rect.is_off_left());
    let pruned = before - obstacles.len() - items.len();
    if pruned > 0 {
        log::trace!("Pruned {} off-screen entities", pruned);
    }
    pruned
}
