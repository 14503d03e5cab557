//! Pellet Run - an arena item-collection arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, level progression)
//! - `config`: Data-driven game parameters
//!
//! The crate has no rendering surface. A front end drives the simulation by
//! forwarding raw key events and calling [`sim::Game::update`] once per
//! frame, then reads state snapshots back out to draw.

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{Game, GamePhase, InputTracker, KeyCode, RunState, SimulationState};

/// Game configuration constants (reference arena)
pub mod consts {
    /// Arena side length in arena units
    pub const ARENA_SIZE: f32 = 256.0;
    /// Border thickness; playable space is inset by this on every side
    pub const BORDER_MARGIN: f32 = 8.0;

    /// Player bounding-box side length
    pub const PLAYER_SIZE: f32 = 32.0;
    /// Item bounding-box side length
    pub const ITEM_SIZE: f32 = 16.0;
    /// Player movement per movement tick (arena units)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player spawn point (x and y)
    pub const PLAYER_SPAWN: f32 = 64.0;

    /// Points awarded per collected item
    pub const POINTS_PER_ITEM: u64 = 100;
    /// Items placed at the start of every level
    pub const ITEMS_PER_LEVEL: u32 = 5;

    /// Movement tick interval (~60 Hz)
    pub const MOVEMENT_TICK_MS: u64 = 16;
    /// Elapsed-time tick interval
    pub const CLOCK_TICK_MS: u64 = 1000;
    /// Delay between collection detection and item removal
    pub const COLLECT_DELAY_MS: u64 = 300;

    /// Border color for level 1 (0xRRGGBB, red)
    pub const DEFAULT_BORDER_COLOR: u32 = 0xff0000;
}
