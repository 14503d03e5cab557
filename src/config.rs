//! Game configuration
//!
//! Every tunable the simulation reads lives here. Defaults reproduce the
//! reference 256x256 arena.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena side length (the arena is square)
    pub arena_size: f32,
    /// Border thickness; entities are confined to the inset square
    pub margin: f32,
    /// Player bounding-box side length
    pub player_size: f32,
    /// Item bounding-box side length
    pub item_size: f32,
    /// Player movement per movement tick
    pub player_speed: f32,
    /// Player spawn point
    pub player_spawn: Vec2,
    /// Points awarded per collected item
    pub points_per_item: u64,
    /// Items placed at the start of every level
    pub items_per_level: u32,
    /// Movement tick interval in milliseconds
    pub movement_tick_ms: u64,
    /// Elapsed-time tick interval in milliseconds
    pub clock_tick_ms: u64,
    /// Delay between collection detection and item removal
    pub collection_delay_ms: u64,
    /// Border color for level 1 (0xRRGGBB)
    pub default_border_color: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_size: consts::ARENA_SIZE,
            margin: consts::BORDER_MARGIN,
            player_size: consts::PLAYER_SIZE,
            item_size: consts::ITEM_SIZE,
            player_speed: consts::PLAYER_SPEED,
            player_spawn: Vec2::splat(consts::PLAYER_SPAWN),
            points_per_item: consts::POINTS_PER_ITEM,
            items_per_level: consts::ITEMS_PER_LEVEL,
            movement_tick_ms: consts::MOVEMENT_TICK_MS,
            clock_tick_ms: consts::CLOCK_TICK_MS,
            collection_delay_ms: consts::COLLECT_DELAY_MS,
            default_border_color: consts::DEFAULT_BORDER_COLOR,
        }
    }
}

impl GameConfig {
    /// Highest coordinate the player's top-left corner may occupy
    #[inline]
    pub fn player_max(&self) -> f32 {
        self.arena_size - self.player_size - self.margin
    }

    /// Half-open range items are placed in, per axis
    #[inline]
    pub fn item_range(&self) -> (f32, f32) {
        (self.margin, self.arena_size - self.item_size - self.margin)
    }

    /// Load configuration from a JSON file
    ///
    /// Any failure (missing file, bad JSON) falls back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {} - using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_arena() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.arena_size, 256.0);
        assert_eq!(cfg.player_max(), 216.0);
        assert_eq!(cfg.item_range(), (8.0, 232.0));
        assert_eq!(cfg.player_spawn, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = GameConfig {
            arena_size: 512.0,
            items_per_level: 9,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"player_speed": 8.0}"#).unwrap();
        assert_eq!(cfg.player_speed, 8.0);
        assert_eq!(cfg.arena_size, 256.0);
    }
}
