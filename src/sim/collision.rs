//! Collision detection and response
//!
//! Everything collides as AABBs. Enemies die on first contact with a launched
//! bird; shields survive contact and knock the bird back instead.

use super::state::{Bird, Enemy, Shield};
use crate::consts::SHIELD_REBOUND_VX;

/// Destroy every alive enemy overlapping a launched bird.
///
/// Returns the ids of enemies destroyed this tick, each reported exactly
/// once; one bird can take out several overlapping enemies in a single tick.
pub fn check_enemies(bird: &Bird, enemies: &mut [Enemy]) -> Vec<u32> {
    if !bird.launched {
        return Vec::new();
    }
    let bird_bounds = bird.bounds();
    let mut destroyed = Vec::new();
    for enemy in enemies.iter_mut() {
        if enemy.alive && enemy.bounds().intersects(&bird_bounds) {
            enemy.alive = false;
            destroyed.push(enemy.id);
        }
    }
    destroyed
}

/// Deflect a launched bird off any shield it overlaps.
///
/// The rebound is a constant horizontal velocity assignment, not a
/// reflection of the incoming speed; the asymmetry is a deliberate gameplay
/// choice inherited from the original tuning. Shields are never destroyed.
pub fn check_shields(bird: &mut Bird, shields: &[Shield]) {
    if !bird.launched {
        return;
    }
    let bird_bounds = bird.bounds();
    for shield in shields {
        if shield.alive && shield.bounds.intersects(&bird_bounds) {
            bird.vel.x = -SHIELD_REBOUND_VX;
        }
    }
}
