//! Collision detection and response between the player and world entities
//!
//! Obstacles deal damage every tick they overlap the player (there is no
//! invulnerability window). Items are consumed on first overlap. Health may
//! dip below zero here; the ledger clamps it at the end of the tick.

use super::state::{Item, ItemKind, Obstacle, Player, World};
use crate::tuning::Tuning;

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Total health removed by obstacles
    pub damage: f32,
    /// Number of obstacles overlapping the player
    pub obstacles_hit: usize,
    /// Items consumed this pass, in collection order
    pub collected: Vec<(ItemKind, f32)>,
}

/// Apply obstacle damage and pickup effects for the current overlap state
pub fn resolve_collisions(
    player: &mut Player,
    world: &mut World,
    obstacles: &[Obstacle],
    items: &mut Vec<Item>,
    tuning: &Tuning,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    for obstacle in obstacles {
        if player.rect.overlaps(&obstacle.rect) {
            let damage = obstacle.damage.damage_per_tick(tuning);
            player.health -= damage;
            report.damage += damage;
            report.obstacles_hit += 1;
        }
    }

    // Consume overlapping items exactly once
    items.retain(|item| {
        if !player.rect.overlaps(&item.rect) {
            return true;
        }
        match item.kind {
            ItemKind::Health => {
                player.health = (player.health + item.value).min(player.max_health);
                world.score += tuning.pickup_score;
            }
        }
        report.collected.push((item.kind, item.value));
        false
    });

    if report.obstacles_hit > 0 {
        log::trace!(
            "Player hit {} obstacle(s) for {:.2} damage",
            report.obstacles_hit,
            report.damage
        );
    }
    for (kind, value) in &report.collected {
        log::debug!("Collected {:?} item (+{})", kind, value);
    }

    report
}
