//! Asteroids entities and game state
//!
//! Everything the tick mutates lives in [`AsteroidsState`]; the RNG is held
//! by the owning simulation so the state stays plain data.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::grid::{in_bounds, random_direction, toroidal_delta, wrap};

/// Shape offsets generated per size tier
const SHAPE_OFFSETS_PER_SIZE: usize = 2;

/// The player ship (AI controlled)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left cell of the 2×2 hull
    pub pos: IVec2,
    /// Facing, each component in {-1, 0, 1}
    pub dir: IVec2,
    /// Ticks until the next shot is allowed
    pub shoot_cooldown: u32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: IVec2::splat(ASTEROIDS_GRID_SIZE / 2),
            dir: IVec2::NEG_Y,
            shoot_cooldown: 0,
        }
    }
}

impl Ship {
    /// Occasionally drift one cell forward, then cool the gun down
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if rng.random_range(0..SHIP_MOVE_CHANCE) == 0 {
            let next = self.pos + self.dir;
            if in_bounds(next, ASTEROIDS_GRID_SIZE) {
                self.pos = next;
            }
        }
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
    }

    /// Turn toward `target` along the shorter (possibly wrapped) path
    ///
    /// Faces along the dominant axis, or diagonally one time in
    /// [`DIAGONAL_AIM_CHANCE`].
    pub fn aim_at<R: Rng + ?Sized>(&mut self, target: IVec2, rng: &mut R) {
        let delta = toroidal_delta(self.pos, target, ASTEROIDS_GRID_SIZE);

        self.dir = if delta.x.abs() > delta.y.abs() {
            IVec2::new(delta.x.signum(), 0)
        } else {
            IVec2::new(0, delta.y.signum())
        };

        if rng.random_range(0..DIAGONAL_AIM_CHANCE) == 0 {
            self.dir = delta.signum();
        }
    }

    /// Fire along the current facing if the gun is ready
    pub fn try_fire(&mut self) -> Option<Bullet> {
        if self.shoot_cooldown > 0 {
            return None;
        }
        self.shoot_cooldown = SHOOT_COOLDOWN;
        Some(Bullet::new(self.pos, self.dir))
    }
}

/// An asteroid drifting on the torus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: IVec2,
    /// Non-zero, each component in {-1, 0, 1}
    pub vel: IVec2,
    /// Size tier: 2 = large, 1 = small
    pub size: u8,
    /// Extra pixels drawn around large asteroids, relative to `pos`
    ///
    /// Generated once for the largest tier and never regenerated, so split
    /// fragments keep their parent-sized shape (drawn only while size > 1).
    pub shape: Vec<IVec2>,
}

impl Asteroid {
    /// A large asteroid with a random shape
    pub fn new<R: Rng + ?Sized>(pos: IVec2, vel: IVec2, rng: &mut R) -> Self {
        let count = SHAPE_OFFSETS_PER_SIZE * ASTEROID_MAX_SIZE as usize;
        let shape = (0..count).map(|_| random_direction(rng)).collect();
        Self {
            pos,
            vel,
            size: ASTEROID_MAX_SIZE,
            shape,
        }
    }

    /// Move one step, wrapping at the grid edges
    pub fn advance(&mut self) {
        self.pos = wrap(self.pos + self.vel, ASTEROIDS_GRID_SIZE);
    }
}

/// A bullet; dies at the grid edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: IVec2,
    pub vel: IVec2,
    /// Ticks left to live
    pub lifetime: u32,
}

impl Bullet {
    /// New bullet; a zero velocity fires straight up
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self {
            pos,
            vel: if vel == IVec2::ZERO { IVec2::NEG_Y } else { vel },
            lifetime: BULLET_LIFETIME,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    /// Expired or off the grid
    pub fn is_spent(&self) -> bool {
        self.lifetime == 0 || !in_bounds(self.pos, ASTEROIDS_GRID_SIZE)
    }
}

/// Complete Asteroids game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidsState {
    pub ship: Ship,
    /// Live asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Live bullets, in firing order
    pub bullets: Vec<Bullet>,
    /// Frame time collected since the last tick
    pub accumulator_ms: f64,
    /// Ticks since reset
    pub ticks: u64,
}

impl AsteroidsState {
    /// Empty field with a fresh ship and no asteroids
    pub fn empty() -> Self {
        Self {
            ship: Ship::default(),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            accumulator_ms: 0.0,
            ticks: 0,
        }
    }
}
