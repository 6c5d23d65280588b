//! Read-only per-tick view of the world for renderers and UI
//!
//! Built after every tick (in any phase) so the world is drawable before the
//! run starts and after it ends.

use serde::Serialize;

use super::random::RandomSource;
use super::rect::Rect;
use super::state::{DamageClass, GamePhase, ItemKind, ObstacleKind, Simulation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub health: f32,
    pub max_health: f32,
    /// 0..=1, for health bars
    pub health_fraction: f32,
    pub jumping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub damage: DamageClass,
    pub moving: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub rect: Rect,
    pub kind: ItemKind,
}

/// Immutable snapshot of a simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    /// In spawn order
    pub obstacles: Vec<ObstacleView>,
    /// In spawn order
    pub items: Vec<ItemView>,
    pub score: u64,
    pub ticks: u64,
    pub scroll_speed: f32,
    pub ground_y: f32,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Capture the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.player;
        Snapshot {
            phase: self.phase,
            player: PlayerView {
                rect: player.rect,
                health: player.health,
                max_health: player.max_health,
                health_fraction: player.health_fraction(),
                jumping: player.jumping,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.rect,
                    damage: o.damage,
                    moving: matches!(o.kind, ObstacleKind::Moving { .. }),
                })
                .collect(),
            items: self
                .items
                .iter()
                .map(|i| ItemView {
                    rect: i.rect,
                    kind: i.kind,
                })
                .collect(),
            score: self.world.score,
            ticks: self.world.ticks,
            scroll_speed: self.world.scroll_speed,
            ground_y: self.world.ground_y,
        }
    }
}
