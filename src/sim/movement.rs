//! Player movement integration
//!
//! Runs once per fixed movement tick. The step is a constant distance per
//! tick rather than wall-clock scaled, so effective speed is tied to the
//! scheduler's tick rate. Diagonals sum both axis steps without
//! normalization and are therefore sqrt(2) faster; the quirk is part of
//! the game's feel and deliberately kept.

use glam::Vec2;

use super::input::InputSnapshot;
use crate::config::GameConfig;

/// Compute the player position after one movement tick
///
/// Applies the held directions, then clamps both axes so the player stays
/// inside the arena border.
pub fn integrate(pos: Vec2, input: &InputSnapshot, cfg: &GameConfig) -> Vec2 {
    let mut next = pos;

    if input.up {
        next.y -= cfg.player_speed;
    }
    if input.down {
        next.y += cfg.player_speed;
    }
    if input.left {
        next.x -= cfg.player_speed;
    }
    if input.right {
        next.x += cfg.player_speed;
    }

    let max = cfg.player_max();
    next.x = next.x.clamp(cfg.margin, max);
    next.y = next.y.clamp(cfg.margin, max);
    next
}
