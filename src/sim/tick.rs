//! Per-frame simulation tick and run lifecycle
//!
//! The external frame scheduler calls [`tick`] once per rendered frame. The
//! phase gates everything: only `Playing` runs the systems, in this order:
//! physics, scroll, spawn, collision, survival/decay, difficulty, and finally
//! a single terminal health check.

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::state::{GameEvent, GamePhase, Player, Simulation, World};
use super::{collision, ledger, physics, scroll, spawn};

/// Input intents for a single tick, sampled once by the input provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Explicit start request (start button)
    pub start: bool,
}

impl TickInput {
    /// Whether this input counts as a start signal while waiting
    pub fn wants_start(&self) -> bool {
        self.start || self.jump
    }
}

/// Advance the simulation by one frame
pub fn tick<R: RandomSource>(sim: &mut Simulation<R>, input: &TickInput) {
    match sim.phase {
        GamePhase::Waiting => {
            // The start press is consumed; simulation begins next tick
            if input.wants_start() {
                start(sim);
            }
            return;
        }
        GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    physics::integrate_player(&mut sim.player, input, &sim.tuning);

    scroll::scroll_world(&mut sim.obstacles, &mut sim.items, sim.world.scroll_speed);

    spawn::run_spawner(
        &mut sim.world,
        &mut sim.obstacles,
        &mut sim.items,
        &mut sim.rng,
        &sim.tuning,
    );
    // Nothing behind the left edge takes part in collision
    scroll::prune_off_screen(&mut sim.obstacles, &mut sim.items);

    let report = collision::resolve_collisions(
        &mut sim.player,
        &mut sim.world,
        &sim.obstacles,
        &mut sim.items,
        &sim.tuning,
    );
    sim.events.extend(
        report
            .collected
            .into_iter()
            .map(|(kind, value)| GameEvent::ItemCollected { kind, value }),
    );

    ledger::apply_survival(&mut sim.player, &mut sim.world, &sim.tuning);
    ledger::advance_difficulty(&mut sim.world, &sim.tuning);

    // Exactly one terminal check, after every health effect of the tick
    if ledger::settle_health(&mut sim.player) {
        sim.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {} after {} ticks (speed {:.3})",
            sim.world.score,
            sim.world.ticks,
            sim.world.scroll_speed
        );
        sim.events.push(GameEvent::GameOver {
            score: sim.world.score,
            ticks: sim.world.ticks,
        });
    }
}

/// Waiting -> Playing. Returns `false` (and does nothing) in any other phase.
pub fn start<R: RandomSource>(sim: &mut Simulation<R>) -> bool {
    if sim.phase != GamePhase::Waiting {
        return false;
    }
    sim.phase = GamePhase::Playing;
    log::info!("Run started");
    sim.events.push(GameEvent::EnteredPlaying);
    true
}

/// Rebuild player, world and entity collections from scratch and go back
/// to `Waiting`. The random source keeps its stream.
pub fn reset<R: RandomSource>(sim: &mut Simulation<R>) {
    sim.player = Player::new(&sim.tuning);
    sim.world = World::new(&sim.tuning);
    sim.obstacles.clear();
    sim.items.clear();
    sim.phase = GamePhase::Waiting;
    log::info!("Run reset");
}

impl<R: RandomSource> Simulation<R> {
    /// See [`tick`]
    pub fn tick(&mut self, input: &TickInput) {
        tick(self, input);
    }

    /// See [`start`]
    pub fn start(&mut self) -> bool {
        start(self)
    }

    /// See [`reset`]
    pub fn reset(&mut self) {
        reset(self);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
