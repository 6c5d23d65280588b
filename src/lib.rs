//! Cat Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance and viewport configuration
//! - `error`: Configuration errors
//!
//! Rendering, audio and input binding live outside this crate. They read
//! [`sim::Snapshot`]s and drained [`sim::GameEvent`]s, and feed
//! [`sim::TickInput`]s back in.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, Result};
pub use tuning::{Tuning, Viewport};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Viewport defaults
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Distance from the bottom of the viewport to the ground line
    pub const GROUND_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const MAX_HEALTH: f32 = 100.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity applied on jump (units/tick)
    pub const JUMP_POWER: f32 = 12.0;

    /// World scroll speed at the start of a run (units/tick)
    pub const START_SCROLL_SPEED: f32 = 3.0;
    /// Scroll speed gained every playing tick
    pub const SCROLL_SPEED_INCREMENT: f32 = 0.001;

    /// World-space distance to the first obstacle / item
    pub const FIRST_OBSTACLE_AT: f32 = 850.0;
    pub const FIRST_ITEM_AT: f32 = 1300.0;

    /// Obstacle generation
    pub const MOVING_OBSTACLE_CHANCE: f32 = 0.5;
    pub const MOVING_OBSTACLE_WIDTH: f32 = 40.0;
    pub const MOVING_OBSTACLE_HEIGHT: f32 = 20.0;
    /// Extra speed of a moving obstacle on top of the world scroll
    pub const MOVING_OBSTACLE_EXTRA_SPEED: (f32, f32) = (0.0, 2.0);
    pub const FIXED_OBSTACLE_WIDTH: f32 = 30.0;
    pub const FIXED_OBSTACLE_HEIGHT: (f32, f32) = (20.0, 70.0);
    pub const OBSTACLE_INTERVAL: (f32, f32) = (150.0, 350.0);

    /// Item generation
    pub const ITEM_SIZE: f32 = 20.0;
    /// Gap between the ground and the bottom of an item
    pub const ITEM_LIFT: (f32, f32) = (60.0, 150.0);
    pub const ITEM_INTERVAL: (f32, f32) = (1000.0, 2000.0);
    pub const HEALTH_ITEM_VALUE: f32 = 20.0;

    /// Per-tick collision damage by class
    pub const LOW_DAMAGE: f32 = 1.5;
    pub const HIGH_DAMAGE: f32 = 4.0;

    /// Passive health loss every playing tick
    pub const HEALTH_DECAY: f32 = 0.05;
    /// Score for surviving one tick
    pub const SURVIVAL_SCORE: u64 = 1;
    /// Score for collecting a pickup
    pub const PICKUP_SCORE: u64 = 50;
}
