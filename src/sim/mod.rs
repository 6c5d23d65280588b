//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, driven from outside
//! - Randomness only through the injected `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod ledger;
pub mod physics;
pub mod random;
pub mod rect;
pub mod scroll;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{CollisionReport, resolve_collisions};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use rect::Rect;
pub use snapshot::{ItemView, ObstacleView, PlayerView, Snapshot};
pub use spawn::{SpawnReport, generate_item, generate_obstacle, run_spawner};
pub use state::{
    DamageClass, GameEvent, GamePhase, Item, ItemKind, Obstacle, ObstacleKind, Player, Simulation,
    World,
};
pub use tick::{TickInput, reset, start, tick};
