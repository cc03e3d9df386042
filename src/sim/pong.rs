//! Pong pattern
//!
//! Two AI paddles rally a square ball on a 30×30 field. The game advances
//! exactly one tick per rendered frame; there is no time accumulator.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::{Simulation, seeded_rng};
use crate::consts::*;
use crate::raster::{Canvas, Color};

/// Paddle y at rest (top edge, vertically centered)
const PADDLE_START_Y: i32 = PONG_SIZE / 2 - PONG_PADDLE_HEIGHT / 2;

/// Rows between center line dashes, and dash length
const DASH_SPACING: usize = 4;
const DASH_LENGTH: i32 = 2;

/// Complete Pong game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PongState {
    /// Ball top-left cell
    pub ball: IVec2,
    /// Ball velocity, ±1 on each axis
    pub ball_vel: IVec2,
    /// Left paddle top edge
    pub left_paddle_y: i32,
    /// Right paddle top edge
    pub right_paddle_y: i32,
}

impl Default for PongState {
    fn default() -> Self {
        Self {
            ball: IVec2::splat(PONG_SIZE / 2),
            ball_vel: IVec2::ONE,
            left_paddle_y: PADDLE_START_Y,
            right_paddle_y: PADDLE_START_Y,
        }
    }
}

/// Move a paddle one step toward the ball's row
fn chase(paddle_y: i32, ball_y: i32) -> i32 {
    let center = paddle_y + PONG_PADDLE_HEIGHT / 2;
    if center < ball_y && paddle_y + PONG_PADDLE_HEIGHT < PONG_SIZE {
        paddle_y + PONG_PADDLE_SPEED
    } else if center > ball_y && paddle_y > 0 {
        paddle_y - PONG_PADDLE_SPEED
    } else {
        paddle_y
    }
}

/// True if `ball_y` falls within a paddle's vertical span (inclusive)
#[inline]
fn spans(paddle_y: i32, ball_y: i32) -> bool {
    ball_y >= paddle_y && ball_y <= paddle_y + PONG_PADDLE_HEIGHT
}

/// The Pong simulation
#[derive(Debug, Clone)]
pub struct Pong {
    pub state: PongState,
    seed: u64,
    rng: Pcg32,
}

impl Default for Pong {
    fn default() -> Self {
        Self::new()
    }
}

impl Pong {
    /// New game with a random seed
    pub fn new() -> Self {
        Self::with_seed_opt(None)
    }

    /// New game with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_opt(Some(seed))
    }

    pub fn with_seed_opt(seed: Option<u64>) -> Self {
        let (seed, rng) = seeded_rng("Pong", seed);
        Self {
            state: PongState::default(),
            seed,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance the game by one tick
    pub fn tick(&mut self) {
        let s = &mut self.state;

        s.ball += s.ball_vel;

        // Top/bottom walls. No positional clamp, so a ball past the wall
        // flips again on the next tick.
        if s.ball.y <= 0 || s.ball.y >= PONG_SIZE - PONG_BALL_SIZE {
            s.ball_vel.y = -s.ball_vel.y;
        }

        s.left_paddle_y = chase(s.left_paddle_y, s.ball.y);
        s.right_paddle_y = chase(s.right_paddle_y, s.ball.y);

        if s.ball.x <= PONG_PADDLE_WIDTH && spans(s.left_paddle_y, s.ball.y) {
            s.ball_vel.x = -s.ball_vel.x;
        }
        if s.ball.x >= PONG_SIZE - PONG_PADDLE_WIDTH - PONG_BALL_SIZE
            && spans(s.right_paddle_y, s.ball.y)
        {
            s.ball_vel.x = -s.ball_vel.x;
        }

        if s.ball.x < 0 || s.ball.x > PONG_SIZE {
            s.ball = IVec2::splat(PONG_SIZE / 2);
            s.ball_vel.x = if s.ball_vel.x > 0 { -1 } else { 1 };
            s.ball_vel.y = if self.rng.random_bool(0.5) { 1 } else { -1 };
            log::debug!("Pong ball reset, serving {:?}", s.ball_vel);
        }

        log::trace!("Pong tick: ball={:?} vel={:?}", s.ball, s.ball_vel);
    }
}

impl Simulation for Pong {
    fn name(&self) -> &'static str {
        "Pong"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_SIZE, CANVAS_SIZE)
    }

    fn reset(&mut self) {
        self.state = PongState::default();
        log::info!("Pong reset");
    }

    fn step(&mut self, _delta_ms: f64) {
        self.tick();
    }

    fn draw(&self, canvas: &mut Canvas) {
        let s = &self.state;
        canvas.clear(Color::BLACK);

        canvas.fill_rect(0, s.left_paddle_y, PONG_PADDLE_WIDTH, PONG_PADDLE_HEIGHT, Color::WHITE);
        canvas.fill_rect(
            PONG_SIZE - PONG_PADDLE_WIDTH,
            s.right_paddle_y,
            PONG_PADDLE_WIDTH,
            PONG_PADDLE_HEIGHT,
            Color::WHITE,
        );

        canvas.fill_rect(s.ball.x, s.ball.y, PONG_BALL_SIZE, PONG_BALL_SIZE, Color::WHITE);

        for y in (0..PONG_SIZE).step_by(DASH_SPACING) {
            canvas.fill_rect(PONG_SIZE / 2, y, 1, DASH_LENGTH, Color::GRAY);
        }
    }
}
