//! Game state and core simulation types
//!
//! Two stores, both owned exclusively by [`crate::sim::Game`]: the
//! [`SimulationState`] (player and live items) and the [`RunState`]
//! (score, clock, level). Everything else reads snapshots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Start screen; nothing is scheduled
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
}

/// Lifecycle of a placed item
///
/// Removal is realized by deleting the item from the live set, so there is
/// no `Removed` variant to observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemPhase {
    /// On the board, collectible
    Live,
    /// Overlap detected; plays its pickup animation until the deadline
    /// (milliseconds on the game clock), then leaves the set
    Collecting { deadline_ms: u64 },
}

/// A collectible item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Top-left corner, arena-local
    pub pos: Vec2,
    pub phase: ItemPhase,
}

impl Item {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            phase: ItemPhase::Live,
        }
    }

    /// True until the item has been detected as collected
    #[inline]
    pub fn is_live(&self) -> bool {
        self.phase == ItemPhase::Live
    }
}

/// Positions of everything in the arena
///
/// Performs no validation: clamping is the movement integrator's job, and
/// item placement guarantees its own invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulationState {
    /// Player top-left corner, arena-local
    pub player: Vec2,
    /// Live item set; order is stable for rendering but carries no meaning
    pub items: Vec<Item>,
}

impl SimulationState {
    /// Overwrite the player position unconditionally
    pub fn set_player_position(&mut self, x: f32, y: f32) {
        self.player = Vec2::new(x, y);
    }

    /// Replace the live item set wholesale (level start / transition)
    pub fn set_items(&mut self, positions: Vec<Vec2>) {
        self.items = positions.into_iter().map(Item::new).collect();
    }

    /// Items still counting toward level completion
    pub fn live_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.is_live())
    }
}

/// Per-run bookkeeping the HUD reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Elapsed whole seconds since start
    pub time_secs: u64,
    /// Always a multiple of the per-item point value
    pub score: u64,
    /// Current level, starting at 1
    pub level: u32,
    /// Arena border color, 0xRRGGBB; regenerated per level
    pub border_color: u32,
    pub phase: GamePhase,
}

impl RunState {
    pub fn new(border_color: u32) -> Self {
        Self {
            time_secs: 0,
            score: 0,
            level: 1,
            border_color,
            phase: GamePhase::NotStarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_player_position_overwrites() {
        let mut sim = SimulationState::default();
        sim.set_player_position(12.5, -3.0);
        assert_eq!(sim.player, Vec2::new(12.5, -3.0));
        sim.set_player_position(0.0, 0.0);
        assert_eq!(sim.player, Vec2::ZERO);
    }

    #[test]
    fn test_set_items_replaces_and_revives() {
        let mut sim = SimulationState::default();
        sim.set_items(vec![Vec2::new(10.0, 10.0), Vec2::new(50.0, 50.0)]);
        assert_eq!(sim.items.len(), 2);

        sim.items[0].phase = ItemPhase::Collecting { deadline_ms: 1 };
        assert_eq!(sim.live_items().count(), 1);

        sim.set_items(vec![Vec2::new(80.0, 80.0)]);
        assert_eq!(sim.items.len(), 1);
        assert!(sim.items[0].is_live());
    }
}
