//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame, and everything a replay needs
//! to reproduce one, lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird waiting at the sling (or resting from the last throw)
    Aiming,
    /// Pointer held down, pull vector live
    Dragging,
    /// Bird launched and moving
    InFlight,
    /// All enemies down; waiting for next-stage / end-session choice
    StageClear,
    /// Out of throws with enemies left; only a full reset leaves this
    GameOver,
}

/// The player's projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Set on release; never cleared for the lifetime of this bird
    pub launched: bool,
    /// Velocity damped below threshold after ground contact (or flew out of
    /// bounds); the sim stops advancing a resting bird
    pub resting: bool,
}

impl Bird {
    /// Fresh, unlaunched bird sitting on the sling anchor
    pub fn at_anchor() -> Self {
        Self {
            pos: SLING_ANCHOR,
            vel: Vec2::ZERO,
            size: BIRD_SIZE,
            launched: false,
            resting: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Release from the sling with the given velocity
    pub fn launch(&mut self, vel: Vec2) {
        self.vel = vel;
        self.launched = true;
    }

    /// Launched and still moving
    #[inline]
    pub fn in_flight(&self) -> bool {
        self.launched && !self.resting
    }
}

/// A destroyable target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            size: ENEMY_SIZE,
            alive: true,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A static obstacle that deflects birds without being destroyed.
///
/// `alive` exists for parity with enemies but no rule ever clears it;
/// shields deflect, they don't break.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub id: u32,
    pub bounds: Aabb,
    pub alive: bool,
}

impl Shield {
    pub fn new(id: u32, center: Vec2) -> Self {
        Self {
            id,
            bounds: Aabb::new(center, SHIELD_SIZE),
            alive: true,
        }
    }
}

/// Remaining throws for the current stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifeCounter {
    pub remaining: u32,
    pub max: u32,
}

impl LifeCounter {
    pub fn new(max: u32) -> Self {
        Self {
            remaining: max,
            max,
        }
    }

    /// Consume one throw. Returns false (without mutation) when exhausted.
    pub fn spend(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn can_throw(&self) -> bool {
        self.remaining > 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.max;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducible stage layouts
    pub seed: u64,
    /// Current stage index (0-based; stage 0 is the fixed tutorial layout)
    pub stage: u32,
    /// Score, carried across stages, cleared only on full reset
    pub score: u64,
    /// Throws left this stage
    pub lives: LifeCounter,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The active bird (exactly one per stage at any time)
    pub bird: Bird,
    /// Stage enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Stage shields (sorted by id for determinism)
    pub shields: Vec<Shield>,
    /// Live pointer position while dragging, for sling-line rendering
    pub drag_pointer: Option<Vec2>,
    /// Debug drop in progress (bird descending straight down)
    pub drop_active: bool,
    /// Set when the player ends the session from the stage-clear screen;
    /// the driver is expected to stop ticking
    pub quit_requested: bool,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session at stage 0 with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            stage: 0,
            score: 0,
            lives: LifeCounter::new(MAX_LIVES),
            time_ticks: 0,
            phase: GamePhase::Aiming,
            bird: Bird::at_anchor(),
            enemies: Vec::new(),
            shields: Vec::new(),
            drag_pointer: None,
            drop_active: false,
            quit_requested: false,
            next_id: 1,
        };
        super::tick::generate_stage(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Discard the current bird and put a fresh one on the sling, consuming
    /// one throw. Returns false (leaving the old bird in place) if none left.
    pub fn spawn_bird(&mut self) -> bool {
        if !self.lives.spend() {
            return false;
        }
        self.bird = Bird::at_anchor();
        self.drop_active = false;
        true
    }

    /// True once the current throw can no longer change anything: the bird
    /// was launched and has come to rest (or left the play bounds).
    #[inline]
    pub fn throw_resolved(&self) -> bool {
        self.bird.resting
    }

    /// Any enemy still standing?
    #[inline]
    pub fn enemies_remaining(&self) -> bool {
        self.enemies.iter().any(|e| e.alive)
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.shields.sort_by_key(|s| s.id);
    }
}
