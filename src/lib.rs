//! Raster Patterns - animated 2D patterns for LED fixtures
//!
//! Core modules:
//! - `raster`: Off-screen canvas, colors and nearest-neighbor sampling
//! - `sim`: Frame-stepped simulations (Circle, Pong, Asteroids)
//! - `driver`: Per-frame orchestration, the only surface the host engine talks to
//! - `params`: Host-tunable numeric knobs
//! - `settings`: Serializable pattern configuration

pub mod driver;
pub mod params;
pub mod raster;
pub mod settings;
pub mod sim;

pub use driver::{OutputPoint, PatternDriver};
pub use params::Parameter;
pub use raster::{Canvas, Color, sample};
pub use settings::{PatternKind, PatternSettings};
pub use sim::{Pattern, Simulation};

/// Pattern configuration constants
pub mod consts {
    /// Canvas edge length shared by every pattern (pixels)
    pub const CANVAS_SIZE: u32 = 30;

    /// Circle radius knob (pixels)
    pub const CIRCLE_RADIUS_DEFAULT: f64 = 20.0;
    pub const CIRCLE_RADIUS_MIN: f64 = 1.0;
    pub const CIRCLE_RADIUS_MAX: f64 = 300.0;

    /// Pong playfield
    pub const PONG_SIZE: i32 = 30;
    pub const PONG_PADDLE_WIDTH: i32 = 4;
    pub const PONG_PADDLE_HEIGHT: i32 = 6;
    pub const PONG_BALL_SIZE: i32 = 2;
    pub const PONG_PADDLE_SPEED: i32 = 1;

    /// Asteroids grid (cells)
    pub const ASTEROIDS_GRID_SIZE: i32 = 30;
    /// Milliseconds between logical ticks at speed 1.0
    pub const ASTEROIDS_FRAME_DELAY_MS: f64 = 150.0;
    /// Asteroids speed knob (multiplier)
    pub const ASTEROIDS_SPEED_DEFAULT: f64 = 1.0;
    pub const ASTEROIDS_SPEED_MIN: f64 = 0.1;
    pub const ASTEROIDS_SPEED_MAX: f64 = 4.0;
    /// Asteroids present after reset
    pub const INITIAL_ASTEROIDS: usize = 4;
    /// Population floor, replenished at the end of every tick
    pub const MIN_ASTEROIDS: usize = 3;
    /// Largest asteroid size tier
    pub const ASTEROID_MAX_SIZE: u8 = 2;
    /// Minimum distance between the ship and a freshly spawned asteroid
    pub const SPAWN_CLEARANCE: i32 = 10;
    /// Bullet/asteroid hit distance (strictly less than)
    pub const HIT_RADIUS: i32 = 2;
    /// Bullet lifetime in ticks
    pub const BULLET_LIFETIME: u32 = 10;
    /// Ticks between shots
    pub const SHOOT_COOLDOWN: u32 = 5;
    /// Ship drifts forward with probability 1 / SHIP_MOVE_CHANCE per tick
    pub const SHIP_MOVE_CHANCE: u32 = 10;
    /// Ship aims diagonally with probability 1 / DIAGONAL_AIM_CHANCE per tick
    pub const DIAGONAL_AIM_CHANCE: u32 = 3;
}
