//! Sling Strike - a slingshot projectile arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//!
//! Rendering, audio and input decoding are external collaborators: the sim
//! consumes [`sim::TickInput`] and exposes a serializable [`sim::GameState`]
//! snapshot for whatever front end drives it.

pub mod sim;

pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Reference tick rate (Hz); the sim itself only counts ticks
    pub const TICK_RATE: u32 = 60;
    /// Fixed timestep, in ticks. Velocities are px/tick, so one tick is 1.0.
    pub const TICK_DT: f32 = 1.0;

    /// Arena dimensions (px, y grows downward)
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    /// Top of the ground strip
    pub const GROUND_Y: f32 = ARENA_HEIGHT - 60.0;
    /// How far outside the arena a bird may fly before it counts as gone
    pub const BOUNDS_MARGIN: f32 = 200.0;

    /// Gravity (px/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical restitution on ground contact
    pub const RESTITUTION: f32 = 0.4;
    /// Horizontal damping on ground contact
    pub const FRICTION: f32 = 0.8;
    /// Both velocity components below this after a bounce => resting (px/tick)
    pub const REST_THRESHOLD: f32 = 1.0;

    /// Sling anchor (launch origin)
    pub const SLING_ANCHOR: Vec2 = Vec2::new(150.0, GROUND_Y - 40.0);
    /// Maximum drag distance (px); longer pulls are clamped
    pub const MAX_PULL: f32 = 100.0;
    /// Pull distance to launch speed conversion
    pub const POWER: f32 = 0.2;

    /// Bird defaults
    pub const BIRD_SIZE: Vec2 = Vec2::new(40.0, 40.0);
    /// Debug drop descent per tick (px)
    pub const DROP_STEP: f32 = 18.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: Vec2 = Vec2::new(45.0, 45.0);
    /// Score reward per destroyed enemy
    pub const ENEMY_REWARD: u64 = 100;

    /// Shield defaults
    pub const SHIELD_SIZE: Vec2 = Vec2::new(20.0, 100.0);
    /// Horizontal speed a bird rebounds with off a shield (px/tick).
    /// A constant reassignment, not a reflection of the incoming speed.
    pub const SHIELD_REBOUND_VX: f32 = 5.0;

    /// Throws per stage
    pub const MAX_LIVES: u32 = 4;
}
