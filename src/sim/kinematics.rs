//! Projectile kinematics under gravity
//!
//! Per-tick integration: gravity is a fixed increment per tick (velocities
//! are px/tick), so a given throw replays identically at the reference
//! 60 Hz tick rate regardless of wall clock.

use super::state::Bird;
use crate::consts::{FRICTION, REST_THRESHOLD, RESTITUTION};

/// Advance a bird one step and resolve ground contact.
///
/// No-op unless the bird is in flight. On ground contact the position is
/// clamped exactly to the ground limit, vertical velocity reflects with
/// damping, horizontal velocity loses friction; once both components fall
/// below the rest threshold the bird rests and never moves again.
pub fn advance(bird: &mut Bird, gravity: f32, ground_y: f32, dt: f32) {
    if !bird.in_flight() {
        return;
    }

    bird.vel.y += gravity * dt;
    bird.pos += bird.vel * dt;

    let ground_limit = ground_y - bird.size.y / 2.0;
    if bird.pos.y > ground_limit {
        bird.pos.y = ground_limit;
        bird.vel.y *= -RESTITUTION;
        bird.vel.x *= FRICTION;
        if bird.vel.x.abs() < REST_THRESHOLD && bird.vel.y.abs() < REST_THRESHOLD {
            bird.resting = true;
            bird.vel = glam::Vec2::ZERO;
        }
    }
}
