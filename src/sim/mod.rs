//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The front end owns the wall clock; the simulation only ever sees elapsed
//! milliseconds handed to [`Game::update`].

pub mod collision;
pub mod input;
pub mod movement;
pub mod placement;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use input::{InputSnapshot, InputTracker, KeyCode};
pub use movement::integrate;
pub use placement::generate_items;
pub use state::{GamePhase, Item, ItemPhase, RunState, SimulationState};
pub use tick::Game;
