//! Game state and core simulation types
//!
//! Everything a run mutates is bundled into [`Simulation`]; nothing lives in
//! globals. Only the tick and lifecycle functions in `tick.rs` mutate it.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::random::{RandomSource, seeded};
use super::rect::Rect;
use crate::error::Result;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// World is drawn, nothing moves until a start signal
    Waiting,
    /// Active gameplay
    Playing,
    /// Health ran out; terminal until reset
    GameOver,
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub velocity_y: f32,
    /// Airborne after a jump; cleared on landing
    pub jumping: bool,
    pub health: f32,
    pub max_health: f32,
    /// Horizontal move speed (units/tick)
    pub speed: f32,
}

impl Player {
    /// New player standing on the ground at the start position
    pub fn new(tuning: &Tuning) -> Self {
        let ground_y = tuning.viewport.ground_y();
        Self {
            rect: Rect::new(
                tuning.player_start_x,
                ground_y - tuning.player_height,
                tuning.player_width,
                tuning.player_height,
            ),
            velocity_y: 0.0,
            jumping: false,
            health: tuning.max_health,
            max_health: tuning.max_health,
            speed: tuning.player_speed,
        }
    }

    /// Health as a 0..=1 fraction (for health bars)
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// Per-tick damage category of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageClass {
    Low,
    High,
}

impl DamageClass {
    pub fn damage_per_tick(self, tuning: &Tuning) -> f32 {
        match self {
            DamageClass::Low => tuning.low_damage,
            DamageClass::High => tuning.high_damage,
        }
    }
}

/// Obstacle movement variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Stationary in world space; moves only with the scroll
    Fixed,
    /// Has its own horizontal velocity composed with the scroll
    Moving { drift: f32 },
}

impl ObstacleKind {
    #[inline]
    pub fn drift(&self) -> f32 {
        match self {
            ObstacleKind::Fixed => 0.0,
            ObstacleKind::Moving { drift } => *drift,
        }
    }
}

/// A hazard the player must jump over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
    pub damage: DamageClass,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Health,
}

/// A pickup entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub rect: Rect,
    pub kind: ItemKind,
    /// Amount restored on pickup
    pub value: f32,
}

/// Scalar world state for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Units the world moves left each tick; never decreases during a run
    pub scroll_speed: f32,
    pub score: u64,
    /// World distance until the next obstacle spawn
    pub obstacle_cursor: f32,
    /// World distance until the next item spawn
    pub item_cursor: f32,
    pub ground_y: f32,
    /// Playing ticks survived
    pub ticks: u64,
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            scroll_speed: tuning.start_scroll_speed,
            score: 0,
            obstacle_cursor: tuning.first_obstacle_at,
            item_cursor: tuning.first_item_at,
            ground_y: tuning.viewport.ground_y(),
            ticks: 0,
        }
    }
}

/// Lifecycle notifications for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Waiting -> Playing
    EnteredPlaying,
    /// A pickup was consumed this tick
    ItemCollected { kind: ItemKind, value: f32 },
    /// Playing -> GameOver
    GameOver { score: u64, ticks: u64 },
}

/// Complete simulation context for one run
#[derive(Debug, Clone)]
pub struct Simulation<R = Pcg32> {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub world: World,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live items in spawn order
    pub items: Vec<Item>,
    pub(crate) rng: R,
    pub(crate) events: Vec<GameEvent>,
}

impl Simulation<Pcg32> {
    /// Create a run driven by a seeded PCG generator
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self> {
        log::info!("New run with seed {}", seed);
        Self::with_random(tuning, seeded(seed))
    }

    /// Reset and reseed for a fresh, reproducible run
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = seeded(seed);
        self.reset();
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Create a run with a caller-supplied random source
    pub fn with_random(tuning: Tuning, rng: R) -> Result<Self> {
        tuning.validate()?;
        Ok(Self {
            phase: GamePhase::Waiting,
            player: Player::new(&tuning),
            world: World::new(&tuning),
            obstacles: Vec::new(),
            items: Vec::new(),
            rng,
            events: Vec::new(),
            tuning,
        })
    }

    /// Take all notifications queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
