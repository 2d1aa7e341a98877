//! Sling Strike entry point
//!
//! Headless demo driver: runs the deterministic sim at the reference tick
//! rate with a simple autopilot supplying pointer input, the same way a real
//! front end would. Rendering is a collaborator this binary does without.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use sling_strike::consts::*;
use sling_strike::sim::{Bird, GamePhase, GameState, TickInput, advance, launch_velocity, tick};

/// How many stages the demo plays before bowing out
const DEMO_STAGES: u32 = 3;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Sling Strike (headless demo) starting, seed {seed}");

    let mut state = GameState::new(seed);
    let mut pilot = Autopilot::default();
    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);

    while !state.quit_requested && state.phase != GamePhase::GameOver {
        let frame_start = Instant::now();

        let input = pilot.next_input(&state);
        tick(&mut state, &input, TICK_DT);

        if let Some(remaining) = tick_duration.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    println!(
        "Demo over after {} ticks: stage {}, score {}",
        state.time_ticks,
        state.stage + 1,
        state.score
    );
}

/// Scripted player: picks a release point whose predicted trajectory crosses
/// a living enemy, presses, and releases on the next tick.
#[derive(Default)]
struct Autopilot {
    release: Option<Vec2>,
}

impl Autopilot {
    fn next_input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::default();
        match state.phase {
            GamePhase::Aiming => {
                self.release = Some(aim(state));
                input.pointer_down = Some(SLING_ANCHOR);
                input.pointer_pos = Some(SLING_ANCHOR);
            }
            GamePhase::Dragging => {
                let release = self
                    .release
                    .unwrap_or(SLING_ANCHOR - Vec2::new(70.0, -70.0));
                input.pointer_pos = Some(release);
                input.pointer_up = Some(release);
            }
            GamePhase::StageClear => {
                if state.stage + 1 >= DEMO_STAGES {
                    input.end_session = true;
                } else {
                    input.next_stage = true;
                }
            }
            GamePhase::InFlight | GamePhase::GameOver => {}
        }
        input
    }
}

/// Sweep a fan of pull angles and strengths, first predicted hit wins.
/// Falls back to a flat full-strength throw when nothing connects (shields
/// are ignored by the prediction, so that happens).
fn aim(state: &GameState) -> Vec2 {
    for &pull in &[MAX_PULL, MAX_PULL * 0.75, MAX_PULL * 0.5] {
        for i in 0..40 {
            // Launch angle above horizontal, toward the enemy field
            let angle = 0.05 + 1.35 * (i as f32 / 39.0);
            let dir = Vec2::new(angle.cos(), -angle.sin());
            let release = SLING_ANCHOR - dir * pull;
            if predicts_hit(state, release) {
                return release;
            }
        }
    }
    SLING_ANCHOR - Vec2::new(MAX_PULL, 0.0)
}

/// Fly a probe bird along the would-be trajectory and look for an enemy
/// overlap before it rests or leaves the arena.
fn predicts_hit(state: &GameState, release: Vec2) -> bool {
    let mut probe = Bird::at_anchor();
    probe.launch(launch_velocity(SLING_ANCHOR, release, MAX_PULL, POWER));

    for _ in 0..1200 {
        advance(&mut probe, GRAVITY, GROUND_Y, TICK_DT);
        let bounds = probe.bounds();
        if state
            .enemies
            .iter()
            .any(|e| e.alive && e.bounds().intersects(&bounds))
        {
            return true;
        }
        if probe.resting || probe.pos.x > ARENA_WIDTH + BOUNDS_MARGIN {
            return false;
        }
    }
    false
}
