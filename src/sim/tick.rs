//! Fixed timestep simulation tick
//!
//! One call per frame, strictly sequential: input, kinematics, collision,
//! score/life bookkeeping, terminal-condition check. The driver owns timing;
//! the sim only counts ticks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision;
use super::kinematics;
use super::launch::launch_velocity;
use super::state::{Enemy, GamePhase, GameState, Shield};
use crate::consts::*;

/// Input events for a single tick (deterministic)
///
/// Positions are already-decoded arena coordinates; the sim never touches
/// hardware. One-shot fields are expected to be cleared by the driver after
/// each processed tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer pressed this tick (drag-start)
    pub pointer_down: Option<Vec2>,
    /// Pointer released this tick (drag-release / throw)
    pub pointer_up: Option<Vec2>,
    /// Current pointer position while held
    pub pointer_pos: Option<Vec2>,
    /// Full game reset (R key)
    pub reset: bool,
    /// Debug: drop the sling bird straight down (Enter key)
    pub drop_bird: bool,
    /// Stage-clear choice: advance to the next stage
    pub next_stage: bool,
    /// Stage-clear choice: end the session
    pub end_session: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Total: every input that makes no sense in the current phase is a no-op,
/// never an error.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Full reset is honored in any phase
    if input.reset {
        log::info!("Full reset (seed {})", state.seed);
        *state = GameState::new(state.seed);
        return;
    }

    if state.quit_requested {
        return;
    }

    state.time_ticks += 1;

    // Debug drop: force the current bird straight down a fixed step per
    // tick, on top of whatever kinematics does, until its bottom edge meets
    // the ground line. Dropping never marks a bird launched, so a dropped
    // sling bird destroys nothing.
    if input.drop_bird
        && !state.bird.resting
        && matches!(
            state.phase,
            GamePhase::Aiming | GamePhase::Dragging | GamePhase::InFlight
        )
    {
        state.drop_active = true;
    }

    match state.phase {
        GamePhase::Aiming => {
            apply_drop(state);
            if input.pointer_down.is_some() {
                let cycling = state.bird.launched;
                let eligible = !cycling || (state.bird.resting && state.lives.can_throw());
                if eligible {
                    if cycling {
                        // Discard the resting bird and spend one throw
                        state.spawn_bird();
                    }
                    state.drop_active = false;
                    state.drag_pointer = input.pointer_pos.or(input.pointer_down);
                    state.phase = GamePhase::Dragging;
                }
            }
        }

        GamePhase::Dragging => {
            apply_drop(state);
            if let Some(pos) = input.pointer_pos {
                state.drag_pointer = Some(pos);
            }
            if let Some(release) = input.pointer_up {
                let vel = launch_velocity(SLING_ANCHOR, release, MAX_PULL, POWER);
                state.bird.launch(vel);
                state.drag_pointer = None;
                state.drop_active = false;
                state.phase = GamePhase::InFlight;
                log::debug!(
                    "Throw at tick {}: vel=({:.1},{:.1}), {} left after this",
                    state.time_ticks,
                    vel.x,
                    vel.y,
                    state.lives.remaining
                );
            }
        }

        GamePhase::InFlight => {
            kinematics::advance(&mut state.bird, GRAVITY, GROUND_Y, dt);
            apply_drop(state);

            // Shields deflect before enemies are checked
            collision::check_shields(&mut state.bird, &state.shields);
            let destroyed = collision::check_enemies(&state.bird, &mut state.enemies);
            if !destroyed.is_empty() {
                state.score += destroyed.len() as u64 * ENEMY_REWARD;
                log::debug!(
                    "Destroyed {} enemy(ies), score now {}",
                    destroyed.len(),
                    state.score
                );
            }

            // A bird far outside the arena is discarded: mark the throw
            // resolved rather than integrating it forever
            if out_of_bounds(state.bird.pos) {
                state.bird.resting = true;
                state.bird.vel = Vec2::ZERO;
            }

            if state.throw_resolved() {
                state.phase = GamePhase::Aiming;
            }
        }

        GamePhase::StageClear => {
            if input.end_session {
                log::info!("Session ended at stage {}, final score {}", state.stage + 1, state.score);
                state.quit_requested = true;
            } else if input.next_stage {
                state.stage += 1;
                generate_stage(state);
            }
        }

        // Simulation suspended for good; only the reset above leaves this
        GamePhase::GameOver => {}
    }

    // Terminal conditions, every tick. Stage clear wins over game over and
    // can fire mid-flight; game over waits until the last throw has resolved
    // so the final bird still gets its chance.
    if matches!(
        state.phase,
        GamePhase::Aiming | GamePhase::Dragging | GamePhase::InFlight
    ) {
        if !state.enemies_remaining() {
            log::info!("Stage {} clear, score {}", state.stage + 1, state.score);
            state.drag_pointer = None;
            state.phase = GamePhase::StageClear;
        } else if !state.lives.can_throw() && state.bird.launched && state.throw_resolved() {
            log::info!("Game over at stage {}, score {}", state.stage + 1, state.score);
            state.drag_pointer = None;
            state.phase = GamePhase::GameOver;
        }
    }

    state.normalize_order();
}

/// One step of an active debug drop; stops flush with the ground line.
fn apply_drop(state: &mut GameState) {
    if !state.drop_active {
        return;
    }
    let floor = GROUND_Y - state.bird.size.y;
    state.bird.pos.y += DROP_STEP;
    if state.bird.pos.y >= floor {
        state.bird.pos.y = floor;
        state.drop_active = false;
    }
}

fn out_of_bounds(pos: Vec2) -> bool {
    pos.x < -BOUNDS_MARGIN
        || pos.x > ARENA_WIDTH + BOUNDS_MARGIN
        || pos.y < -BOUNDS_MARGIN
        || pos.y > ARENA_HEIGHT + BOUNDS_MARGIN
}

/// Build the entity set for `state.stage` and put a fresh bird on the sling.
///
/// Stage 0 is the fixed tutorial layout; later stages place enemies and
/// shields in jittered slots from a Pcg32 stream seeded by (session seed,
/// stage index), so a given seed replays identically.
pub fn generate_stage(state: &mut GameState) {
    state.enemies.clear();
    state.shields.clear();
    state.lives.reset();
    state.drag_pointer = None;
    state.drop_active = false;

    if state.stage == 0 {
        let e1 = state.next_entity_id();
        let e2 = state.next_entity_id();
        state
            .enemies
            .push(Enemy::new(e1, Vec2::new(650.0, GROUND_Y - 40.0)));
        state
            .enemies
            .push(Enemy::new(e2, Vec2::new(750.0, GROUND_Y - 100.0)));
        let s1 = state.next_entity_id();
        state.shields.push(Shield::new(
            s1,
            Vec2::new(560.0, GROUND_Y - SHIELD_SIZE.y / 2.0),
        ));
    } else {
        let stage_seed = (state.stage as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(state.seed);
        let mut rng = Pcg32::seed_from_u64(stage_seed);

        // Enemies fill jittered slots across the right half of the arena
        let num_enemies = (2 + state.stage / 2).min(6) as usize;
        let field_left = 420.0;
        let field_right = ARENA_WIDTH - 60.0;
        let slot = (field_right - field_left) / num_enemies as f32;
        for i in 0..num_enemies {
            let jitter = rng.random_range(0.0..(slot - ENEMY_SIZE.x));
            let x = field_left + slot * i as f32 + jitter;
            let elevated = rng.random_bool(0.4);
            let y = if elevated {
                GROUND_Y - 40.0 - rng.random_range(40.0..160.0)
            } else {
                GROUND_Y - 40.0
            };
            let id = state.next_entity_id();
            state.enemies.push(Enemy::new(id, Vec2::new(x, y)));
        }

        // A shield wall or two guarding the field
        let num_shields = (1 + state.stage / 3).min(3) as usize;
        for i in 0..num_shields {
            let x = 380.0 + 90.0 * i as f32 + rng.random_range(0.0..60.0);
            let id = state.next_entity_id();
            state
                .shields
                .push(Shield::new(id, Vec2::new(x, GROUND_Y - SHIELD_SIZE.y / 2.0)));
        }
    }

    // The bird on the sling is the first of this stage's throws
    state.spawn_bird();
    state.phase = GamePhase::Aiming;

    log::info!(
        "Stage {} ready: {} enemies, {} shields, {} throws",
        state.stage + 1,
        state.enemies.len(),
        state.shields.len(),
        state.lives.remaining + 1
    );
}
