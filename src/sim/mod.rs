//! Frame-stepped pattern simulations
//!
//! Every pattern is a [`Simulation`]: it advances on host frame time and then
//! redraws itself into the driver's canvas. Simulations that need randomness
//! own a seeded RNG so a run can be replayed exactly:
//! - One RNG per simulation instance, never shared
//! - Stable iteration order (insertion order of entity vectors)
//! - No platform or host dependencies

pub mod asteroids;
pub mod circle;
pub mod grid;
pub mod pong;

pub use asteroids::{Asteroid, Asteroids, AsteroidsState, Bullet, Ship};
pub use circle::Circle;
pub use pong::{Pong, PongState};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::params::Parameter;
use crate::raster::Canvas;
use crate::settings::{PatternKind, PatternSettings};

/// A pattern the driver can run
pub trait Simulation {
    /// Display name for logs and host UIs
    fn name(&self) -> &'static str;

    /// Canvas dimensions this simulation draws into
    fn canvas_size(&self) -> (u32, u32);

    /// Reinitialize game state (host activation hook)
    fn reset(&mut self);

    /// Advance by the host frame time in milliseconds
    fn step(&mut self, delta_ms: f64);

    /// Draw the current state
    fn draw(&self, canvas: &mut Canvas);

    /// Host-tunable knobs
    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }

    /// Look up a knob by name
    fn parameter_mut(&mut self, _name: &str) -> Option<&mut Parameter> {
        None
    }
}

/// Seeded RNG for a simulation; picks and logs a fresh seed when none is given
pub fn seeded_rng(name: &str, seed: Option<u64>) -> (u64, Pcg32) {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("{} initialized with seed: {}", name, seed);
    (seed, Pcg32::seed_from_u64(seed))
}

/// The active pattern, one of the built-in simulations
#[derive(Debug, Clone)]
pub enum Pattern {
    Circle(Circle),
    Pong(Pong),
    Asteroids(Asteroids),
}

impl Pattern {
    /// Build a pattern from settings, applying its knob values
    pub fn from_settings(settings: &PatternSettings) -> Self {
        match settings.pattern {
            PatternKind::Circle => {
                let mut circle = Circle::new();
                circle.radius.set(settings.circle_radius);
                Pattern::Circle(circle)
            }
            PatternKind::Pong => Pattern::Pong(Pong::with_seed_opt(settings.seed)),
            PatternKind::Asteroids => {
                let mut asteroids = Asteroids::with_seed_opt(settings.seed);
                asteroids.speed.set(settings.asteroids_speed);
                Pattern::Asteroids(asteroids)
            }
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Circle(_) => PatternKind::Circle,
            Pattern::Pong(_) => PatternKind::Pong,
            Pattern::Asteroids(_) => PatternKind::Asteroids,
        }
    }

    fn inner(&self) -> &dyn Simulation {
        match self {
            Pattern::Circle(sim) => sim,
            Pattern::Pong(sim) => sim,
            Pattern::Asteroids(sim) => sim,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Simulation {
        match self {
            Pattern::Circle(sim) => sim,
            Pattern::Pong(sim) => sim,
            Pattern::Asteroids(sim) => sim,
        }
    }
}

impl Simulation for Pattern {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn canvas_size(&self) -> (u32, u32) {
        self.inner().canvas_size()
    }

    fn reset(&mut self) {
        self.inner_mut().reset();
    }

    fn step(&mut self, delta_ms: f64) {
        self.inner_mut().step(delta_ms);
    }

    fn draw(&self, canvas: &mut Canvas) {
        self.inner().draw(canvas);
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.inner().parameters()
    }

    fn parameter_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.inner_mut().parameter_mut(name)
    }
}
