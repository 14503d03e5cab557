//! Item placement
//!
//! Rejection sampling: draw uniform candidates and keep the ones that do
//! not overlap an already-accepted item. Pure sampling can stall when the
//! requested count is large relative to the arena, so a draw budget caps
//! the loop; past the budget the whole batch is laid out on a deterministic
//! grid instead.
//!
//! Placement never checks the player's position, so an item can spawn under
//! the player and be collected on the next frame check.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps;
use crate::config::GameConfig;

/// Draw budget per requested item before giving up on sampling
pub const MAX_DRAWS_PER_ITEM: u32 = 64;

/// Produce exactly `count` non-overlapping item positions
///
/// Each axis is uniform in `[margin, arena_size - item_size - margin)`.
/// The result is deterministic for a given RNG state.
pub fn generate_items(count: u32, cfg: &GameConfig, rng: &mut impl Rng) -> Vec<Vec2> {
    let (lo, hi) = cfg.item_range();
    if count == 0 || hi <= lo {
        return Vec::new();
    }

    let budget = count.saturating_mul(MAX_DRAWS_PER_ITEM);
    let mut items: Vec<Vec2> = Vec::with_capacity(count as usize);
    let mut draws = 0u32;

    while (items.len() as u32) < count {
        if draws >= budget {
            log::warn!(
                "item placement gave up after {} draws ({} of {} placed); using grid layout",
                draws,
                items.len(),
                count
            );
            return grid_items(count, cfg);
        }
        draws += 1;

        let candidate = Vec2::new(rng.random_range(lo..hi), rng.random_range(lo..hi));
        let blocked = items
            .iter()
            .any(|&placed| overlaps(placed, cfg.item_size, candidate, cfg.item_size));
        if !blocked {
            items.push(candidate);
        }
    }

    items
}

/// Deterministic fallback: walk item-size-spaced grid cells row by row
///
/// Adjacent cells touch edge-to-edge, which the strict overlap test treats
/// as disjoint.
fn grid_items(count: u32, cfg: &GameConfig) -> Vec<Vec2> {
    let (lo, hi) = cfg.item_range();
    let mut items = Vec::with_capacity(count as usize);

    let mut y = lo;
    'rows: while y < hi {
        let mut x = lo;
        while x < hi {
            items.push(Vec2::new(x, y));
            if items.len() as u32 == count {
                break 'rows;
            }
            x += cfg.item_size;
        }
        y += cfg.item_size;
    }

    if (items.len() as u32) < count {
        log::error!(
            "arena can only hold {} of {} requested items",
            items.len(),
            count
        );
    }
    items
}
