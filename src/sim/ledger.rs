//! Difficulty ramp plus score and health bookkeeping

use super::state::{Player, World};
use crate::tuning::Tuning;

/// Speed the world up by one tick's increment (optionally capped)
pub fn advance_difficulty(world: &mut World, tuning: &Tuning) {
    let next = world.scroll_speed + tuning.scroll_speed_increment;
    world.scroll_speed = match tuning.max_scroll_speed {
        // A cap below the current speed must not slow the world down
        Some(cap) => next.min(cap).max(world.scroll_speed),
        None => next,
    };
}

/// Survival score and passive health decay for one tick
pub fn apply_survival(player: &mut Player, world: &mut World, tuning: &Tuning) {
    world.score += tuning.survival_score;
    world.ticks += 1;
    player.health -= tuning.health_decay;
}

/// End-of-tick health check. Clamps health into range and returns `true`
/// when the run is over.
pub fn settle_health(player: &mut Player) -> bool {
    if player.health <= 0.0 {
        player.health = 0.0;
        return true;
    }
    player.health = player.health.min(player.max_health);
    false
}
