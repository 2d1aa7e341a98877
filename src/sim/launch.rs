//! Drag-to-launch vector computation
//!
//! The launch velocity points from the release point back toward the sling
//! anchor, so pulling further back (and down) throws harder (and up).

use glam::Vec2;

/// Convert a drag gesture into an initial velocity.
///
/// `delta = anchor - release`, with its magnitude clamped to `max_pull`
/// (direction preserved), scaled by `power`. A release exactly on the anchor
/// yields a zero vector: a valid, if inert, launch.
pub fn launch_velocity(anchor: Vec2, release: Vec2, max_pull: f32, power: f32) -> Vec2 {
    let mut delta = anchor - release;
    let dist = delta.length();
    if dist > max_pull {
        delta *= max_pull / dist;
    }
    delta * power
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_PULL, POWER};
    use proptest::prelude::*;

    #[test]
    fn test_straight_pull_within_range() {
        // Anchor (150,460), release (50,460): delta (100,0), dist 100, no clamp
        let anchor = Vec2::new(150.0, 460.0);
        let vel = launch_velocity(anchor, Vec2::new(50.0, 460.0), MAX_PULL, POWER);
        assert!((vel.x - 20.0).abs() < 1e-5);
        assert!(vel.y.abs() < 1e-5);
    }

    #[test]
    fn test_over_pull_is_clamped() {
        // Release at (0,460): raw delta (150,0) clamps to (100,0)
        let anchor = Vec2::new(150.0, 460.0);
        let vel = launch_velocity(anchor, Vec2::new(0.0, 460.0), MAX_PULL, POWER);
        assert!((vel.x - 20.0).abs() < 1e-5);
        assert!(vel.y.abs() < 1e-5);
    }

    #[test]
    fn test_release_on_anchor_is_inert() {
        let anchor = Vec2::new(150.0, 460.0);
        let vel = launch_velocity(anchor, anchor, MAX_PULL, POWER);
        assert_eq!(vel, Vec2::ZERO);
    }

    proptest! {
        /// Any over-length pull returns a vector of magnitude max_pull
        /// (pre-power), pointing the same way as the unclamped delta.
        #[test]
        fn prop_clamp_preserves_direction(
            rx in -1000.0f32..1000.0,
            ry in -1000.0f32..1000.0,
        ) {
            let anchor = Vec2::new(150.0, 460.0);
            let release = Vec2::new(rx, ry);
            let raw = anchor - release;
            prop_assume!(raw.length() > MAX_PULL);

            let vel = launch_velocity(anchor, release, MAX_PULL, POWER);
            let pre_power = vel / POWER;

            prop_assert!((pre_power.length() - MAX_PULL).abs() < 1e-2);
            // Same direction: positive dot, zero cross
            prop_assert!(pre_power.dot(raw) > 0.0);
            prop_assert!(pre_power.perp_dot(raw).abs() < raw.length() * 1e-3);
        }

        /// Pulls within range scale linearly with no clamping.
        #[test]
        fn prop_short_pull_unclamped(
            dx in -70.0f32..70.0,
            dy in -70.0f32..70.0,
        ) {
            let anchor = Vec2::new(150.0, 460.0);
            let release = anchor - Vec2::new(dx, dy);
            prop_assume!(Vec2::new(dx, dy).length() <= MAX_PULL);

            let vel = launch_velocity(anchor, release, MAX_PULL, POWER);
            prop_assert!((vel.x - dx * POWER).abs() < 1e-3);
            prop_assert!((vel.y - dy * POWER).abs() < 1e-3);
        }
    }
}
