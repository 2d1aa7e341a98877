//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod kinematics;
pub mod launch;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{check_enemies, check_shields};
pub use kinematics::advance;
pub use launch::launch_velocity;
pub use state::{Bird, Enemy, GamePhase, GameState, LifeCounter, Shield};
pub use tick::{TickInput, generate_stage, tick};
