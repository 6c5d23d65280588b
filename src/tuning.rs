//! Game balance and viewport configuration
//!
//! Every gameplay constant lives in [`Tuning`] so balance can be loaded from
//! JSON. Missing fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Visible play area, supplied by the external renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Distance from the bottom edge to the ground line
    pub ground_margin: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            ground_margin: GROUND_MARGIN,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Y coordinate of the ground line (y grows downward)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_margin
    }

    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.ground_margin.is_finite()
            || self.ground_margin < 0.0
            || self.ground_margin >= self.height
        {
            return Err(ConfigError::InvalidGroundMargin {
                margin: self.ground_margin,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub viewport: Viewport,

    // === Player ===
    pub player_start_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal move speed (units/tick)
    pub player_speed: f32,
    pub max_health: f32,
    pub gravity: f32,
    pub jump_power: f32,

    // === Difficulty ===
    pub start_scroll_speed: f32,
    pub scroll_speed_increment: f32,
    /// Optional cap on scroll speed (unbounded when `None`)
    pub max_scroll_speed: Option<f32>,

    // === Spawning ===
    pub first_obstacle_at: f32,
    pub first_item_at: f32,
    /// Probability that a spawned obstacle is a moving one
    pub moving_obstacle_chance: f32,
    pub moving_obstacle_width: f32,
    pub moving_obstacle_height: f32,
    pub moving_obstacle_extra_speed: (f32, f32),
    pub fixed_obstacle_width: f32,
    pub fixed_obstacle_height: (f32, f32),
    pub obstacle_interval: (f32, f32),
    pub item_size: f32,
    pub item_lift: (f32, f32),
    pub item_interval: (f32, f32),
    pub health_item_value: f32,

    // === Health & score ===
    pub low_damage: f32,
    pub high_damage: f32,
    pub health_decay: f32,
    pub survival_score: u64,
    pub pickup_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),

            player_start_x: PLAYER_START_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            max_health: MAX_HEALTH,
            gravity: GRAVITY,
            jump_power: JUMP_POWER,

            start_scroll_speed: START_SCROLL_SPEED,
            scroll_speed_increment: SCROLL_SPEED_INCREMENT,
            max_scroll_speed: None,

            first_obstacle_at: FIRST_OBSTACLE_AT,
            first_item_at: FIRST_ITEM_AT,
            moving_obstacle_chance: MOVING_OBSTACLE_CHANCE,
            moving_obstacle_width: MOVING_OBSTACLE_WIDTH,
            moving_obstacle_height: MOVING_OBSTACLE_HEIGHT,
            moving_obstacle_extra_speed: MOVING_OBSTACLE_EXTRA_SPEED,
            fixed_obstacle_width: FIXED_OBSTACLE_WIDTH,
            fixed_obstacle_height: FIXED_OBSTACLE_HEIGHT,
            obstacle_interval: OBSTACLE_INTERVAL,
            item_size: ITEM_SIZE,
            item_lift: ITEM_LIFT,
            item_interval: ITEM_INTERVAL,
            health_item_value: HEALTH_ITEM_VALUE,

            low_damage: LOW_DAMAGE,
            high_damage: HIGH_DAMAGE,
            health_decay: HEALTH_DECAY,
            survival_score: SURVIVAL_SCORE,
            pickup_score: PICKUP_SCORE,
        }
    }
}

impl Tuning {
    /// Default balance for a custom viewport
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning for {}x{} viewport", tuning.viewport.width, tuning.viewport.height);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        self.viewport.validate()?;

        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("max_health", self.max_health)?;
        if self.player_width >= self.viewport.width
            || self.player_height > self.viewport.ground_y()
        {
            return Err(ConfigError::PlayerTooLarge {
                width: self.player_width,
                height: self.player_height,
            });
        }

        positive("moving_obstacle_width", self.moving_obstacle_width)?;
        positive("moving_obstacle_height", self.moving_obstacle_height)?;
        positive("fixed_obstacle_width", self.fixed_obstacle_width)?;
        positive("item_size", self.item_size)?;

        range("moving_obstacle_extra_speed", self.moving_obstacle_extra_speed)?;
        range("fixed_obstacle_height", self.fixed_obstacle_height)?;
        range("item_lift", self.item_lift)?;
        range("obstacle_interval", self.obstacle_interval)?;
        range("item_interval", self.item_interval)?;
        // Spawn loops advance the cursor by the interval; it must make progress
        positive("obstacle_interval.min", self.obstacle_interval.0)?;
        positive("item_interval.min", self.item_interval.0)?;
        positive("fixed_obstacle_height.min", self.fixed_obstacle_height.0)?;

        non_negative("player_start_x", self.player_start_x)?;
        non_negative("player_speed", self.player_speed)?;
        non_negative("gravity", self.gravity)?;
        non_negative("jump_power", self.jump_power)?;

        // Scroll speed only ever grows, and the spawner relies on it
        non_negative("start_scroll_speed", self.start_scroll_speed)?;
        non_negative("scroll_speed_increment", self.scroll_speed_increment)?;
        if let Some(cap) = self.max_scroll_speed {
            non_negative("max_scroll_speed", cap)?;
        }
        non_negative("first_obstacle_at", self.first_obstacle_at)?;
        non_negative("first_item_at", self.first_item_at)?;

        probability("moving_obstacle_chance", self.moving_obstacle_chance)?;
        // Moving obstacles are never slower than the world
        non_negative("moving_obstacle_extra_speed.min", self.moving_obstacle_extra_speed.0)?;
        non_negative("item_lift.min", self.item_lift.0)?;

        non_negative("low_damage", self.low_damage)?;
        non_negative("high_damage", self.high_damage)?;
        non_negative("health_decay", self.health_decay)?;
        non_negative("health_item_value", self.health_item_value)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn probability(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

fn range(name: &'static str, (min, max): (f32, f32)) -> Result<()> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}
