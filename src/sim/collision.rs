//! Axis-aligned bounding-box collision
//!
//! Every entity in the arena is a square anchored at its top-left corner,
//! so the whole collision story is one overlap predicate.

use glam::Vec2;

/// Check whether two axis-aligned squares overlap
///
/// Strict inequalities on both axes: squares that merely touch along an
/// edge or corner do not collide, so exactly-adjacent entities never
/// trigger collection.
#[inline]
pub fn overlaps(pos_a: Vec2, size_a: f32, pos_b: Vec2, size_b: f32) -> bool {
    pos_a.x + size_a > pos_b.x
        && pos_a.x < pos_b.x + size_b
        && pos_a.y + size_a > pos_b.y
        && pos_a.y < pos_b.y + size_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical_squares_overlap() {
        let p = Vec2::new(40.0, 60.0);
        assert!(overlaps(p, 16.0, p, 16.0));
    }

    #[test]
    fn test_contained_square_overlaps() {
        assert!(overlaps(Vec2::new(0.0, 0.0), 32.0, Vec2::new(8.0, 8.0), 16.0));
    }

    #[test]
    fn test_separated_squares_do_not_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(!overlaps(a, 16.0, Vec2::new(100.0, 0.0), 16.0));
        assert!(!overlaps(a, 16.0, Vec2::new(0.0, 100.0), 16.0));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = Vec2::new(0.0, 0.0);
        // right edge of A exactly on left edge of B
        assert!(!overlaps(a, 16.0, Vec2::new(16.0, 0.0), 16.0));
        // bottom edge of A exactly on top edge of B
        assert!(!overlaps(a, 16.0, Vec2::new(0.0, 16.0), 16.0));
        // corner touch
        assert!(!overlaps(a, 16.0, Vec2::new(16.0, 16.0), 16.0));
        // one unit of penetration does overlap
        assert!(overlaps(a, 16.0, Vec2::new(15.0, 0.0), 16.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -300.0f32..300.0, ay in -300.0f32..300.0,
            bx in -300.0f32..300.0, by in -300.0f32..300.0,
            sa in 1.0f32..64.0, sb in 1.0f32..64.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(overlaps(a, sa, b, sb), overlaps(b, sb, a, sa));
        }

        #[test]
        fn prop_far_apart_never_overlaps(
            ax in 0.0f32..100.0, ay in 0.0f32..100.0,
            sa in 1.0f32..32.0, sb in 1.0f32..32.0,
            gap in 0.0f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            // separated on the x axis by at least max(sa, sb)
            let b = Vec2::new(ax + sa.max(sb) + gap, ay);
            prop_assert!(!overlaps(a, sa, b, sb));
        }
    }
}
