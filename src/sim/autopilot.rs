//! Demo input provider that plays the game on its own
//!
//! Reads the current state and decides this tick's intents. Purely a
//! function of the state, so autopilot runs stay deterministic per seed.

use super::random::RandomSource;
use super::rect::Rect;
use super::state::{GamePhase, Simulation};
use super::tick::TickInput;

/// Jump when a hazard will reach the player within this many ticks
const JUMP_LEAD_TICKS: f32 = 8.0;
/// Pickups further than this ahead are ignored
const PICKUP_LOOKAHEAD: f32 = 120.0;

/// Decide the input for the next tick
pub fn autopilot_input<R: RandomSource>(sim: &Simulation<R>) -> TickInput {
    let mut input = TickInput::default();

    match sim.phase {
        GamePhase::Waiting => {
            input.start = true;
            return input;
        }
        GamePhase::GameOver => return input,
        GamePhase::Playing => {}
    }

    let player = &sim.player.rect;
    let scroll = sim.world.scroll_speed;
    let speed = sim.player.speed;

    // Nearest reachable pickup ahead; the runner drifts to sit under it
    let pickup = sim
        .items
        .iter()
        .filter(|i| i.rect.right() > player.left() && i.rect.left() - player.right() < PICKUP_LOOKAHEAD)
        .min_by(|a, b| {
            a.rect
                .left()
                .partial_cmp(&b.rect.left())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match pickup {
        Some(item) => {
            let offset = center_x(&item.rect) - center_x(player);
            if offset > speed {
                input.move_right = true;
            } else if offset < -speed {
                input.move_left = true;
            }
        }
        // Back to the start column between pickups
        None if player.left() > sim.tuning.player_start_x => input.move_left = true,
        None => {}
    }
    let approach = if input.move_right { speed } else { 0.0 };

    // Nearest hazard that has not yet passed the player
    let threat = sim
        .obstacles
        .iter()
        .filter(|o| o.rect.right() > player.left())
        .map(|o| {
            let gap = (o.rect.left() - player.right()).max(0.0);
            let closing = (scroll - o.kind.drift() + approach).max(f32::EPSILON);
            gap / closing
        })
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if threat.is_some_and(|ticks_until| ticks_until <= JUMP_LEAD_TICKS) {
        // Hazards win over pickups: jump in place
        return TickInput {
            jump: true,
            ..TickInput::default()
        };
    }

    if let Some(item) = pickup {
        let gap = item.rect.left() - player.right();
        if gap <= (scroll + approach) * JUMP_LEAD_TICKS {
            input.jump = true;
        }
    }

    input
}

#[inline]
fn center_x(rect: &Rect) -> f32 {
    rect.pos.x + rect.size.x * 0.5
}
