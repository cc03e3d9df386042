//! Asteroids pattern
//!
//! A self-playing Asteroids on a 30×30 torus. Frame time is accumulated and
//! one logical tick runs whenever it exceeds the tick interval (150 ms at
//! speed 1.0); frames in between redraw the unchanged state.

pub mod state;
pub mod tick;

pub use state::{Asteroid, AsteroidsState, Bullet, Ship};
pub use tick::{closest_asteroid, new_game, spawn_asteroid, tick};

use rand_pcg::Pcg32;

use super::{Simulation, seeded_rng};
use crate::consts::*;
use crate::params::Parameter;
use crate::raster::{Canvas, Color};
use crate::sim::grid::in_bounds;

/// The Asteroids simulation
#[derive(Debug, Clone)]
pub struct Asteroids {
    pub state: AsteroidsState,
    /// Game speed multiplier
    pub speed: Parameter,
    seed: u64,
    rng: Pcg32,
}

impl Default for Asteroids {
    fn default() -> Self {
        Self::new()
    }
}

impl Asteroids {
    /// New game with a random seed
    pub fn new() -> Self {
        Self::with_seed_opt(None)
    }

    /// New game with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_opt(Some(seed))
    }

    pub fn with_seed_opt(seed: Option<u64>) -> Self {
        let (seed, mut rng) = seeded_rng("Asteroids", seed);
        let state = new_game(&mut rng);
        Self {
            state,
            speed: Parameter::new(
                "speed",
                ASTEROIDS_SPEED_DEFAULT,
                ASTEROIDS_SPEED_MIN,
                ASTEROIDS_SPEED_MAX,
            )
            .with_description("Speed of the game"),
            seed,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Frame time needed for one tick at the current speed
    pub fn tick_interval_ms(&self) -> f64 {
        ASTEROIDS_FRAME_DELAY_MS / self.speed.value()
    }

    /// Run one logical tick immediately
    pub fn tick(&mut self) {
        tick(&mut self.state, &mut self.rng);
    }
}

impl Simulation for Asteroids {
    fn name(&self) -> &'static str {
        "Asteroids"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_SIZE, CANVAS_SIZE)
    }

    fn reset(&mut self) {
        self.state = new_game(&mut self.rng);
        log::info!("Asteroids reset with {} asteroids", self.state.asteroids.len());
    }

    fn step(&mut self, delta_ms: f64) {
        self.state.accumulator_ms += delta_ms;
        if self.state.accumulator_ms > self.tick_interval_ms() {
            self.state.accumulator_ms = 0.0;
            self.tick();
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let s = &self.state;
        canvas.clear(Color::BLACK);

        canvas.fill_rect(s.ship.pos.x, s.ship.pos.y, 2, 2, Color::GREEN);

        let heading = s.ship.pos + s.ship.dir;
        if in_bounds(heading, ASTEROIDS_GRID_SIZE) {
            canvas.set_pixel(heading.x, heading.y, Color::DARK_GREEN);
        }

        for bullet in &s.bullets {
            canvas.set_pixel(bullet.pos.x, bullet.pos.y, Color::RED);
        }

        for asteroid in &s.asteroids {
            canvas.set_pixel(asteroid.pos.x, asteroid.pos.y, Color::WHITE);
            if asteroid.size > 1 {
                for offset in &asteroid.shape {
                    let p = asteroid.pos + *offset;
                    if in_bounds(p, ASTEROIDS_GRID_SIZE) {
                        canvas.set_pixel(p.x, p.y, Color::WHITE);
                    }
                }
            }
        }
    }

    fn parameters(&self) -> Vec<&Parameter> {
        vec![&self.speed]
    }

    fn parameter_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        (name == self.speed.name).then_some(&mut self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_accumulator_gates_ticks() {
        let mut game = Asteroids::with_seed(7);
        game.step(100.0);
        assert_eq!(game.state.ticks, 0);
        // Exactly the interval is not enough
        game.step(50.0);
        assert_eq!(game.state.ticks, 0);
        game.step(1.0);
        assert_eq!(game.state.ticks, 1);
        assert_eq!(game.state.accumulator_ms, 0.0);
    }

    #[test]
    fn test_one_tick_per_frame_at_most() {
        let mut game = Asteroids::with_seed(7);
        game.step(10_000.0);
        assert_eq!(game.state.ticks, 1);
        assert_eq!(game.state.accumulator_ms, 0.0);
    }

    #[test]
    fn test_speed_scales_interval() {
        let mut game = Asteroids::with_seed(7);
        assert_eq!(game.tick_interval_ms(), 150.0);
        game.parameter_mut("speed").unwrap().set(2.0);
        assert_eq!(game.tick_interval_ms(), 75.0);
        game.step(76.0);
        assert_eq!(game.state.ticks, 1);

        game.speed.set(0.0);
        assert_eq!(game.speed.value(), ASTEROIDS_SPEED_MIN);
        assert!((game.tick_interval_ms() - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_new_game() {
        let mut game = Asteroids::with_seed(11);
        for _ in 0..40 {
            game.tick();
        }
        game.state.accumulator_ms = 42.0;
        game.reset();
        assert_eq!(game.state.ticks, 0);
        assert_eq!(game.state.ship, Ship::default());
        assert_eq!(game.state.asteroids.len(), INITIAL_ASTEROIDS);
        assert!(game.state.bullets.is_empty());
        assert_eq!(game.state.accumulator_ms, 0.0);
    }

    #[test]
    fn test_draw() {
        let mut game = Asteroids::with_seed(1);
        game.state = AsteroidsState::empty();
        game.state.ship.pos = IVec2::new(5, 5);
        game.state.ship.dir = IVec2::NEG_X;
        game.state.bullets.push(Bullet::new(IVec2::new(10, 10), IVec2::X));
        game.state.asteroids.push(Asteroid {
            pos: IVec2::new(20, 20),
            vel: IVec2::X,
            size: 2,
            shape: vec![IVec2::new(1, 0), IVec2::new(-1, -1)],
        });
        game.state.asteroids.push(Asteroid {
            pos: IVec2::new(25, 25),
            vel: IVec2::X,
            size: 1,
            shape: vec![IVec2::new(1, 0)],
        });
        game.state.asteroids.push(Asteroid {
            pos: IVec2::new(0, 0),
            vel: IVec2::X,
            size: 2,
            shape: vec![IVec2::new(-1, 0), IVec2::new(0, 1)],
        });

        let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE);
        canvas.clear(Color::RED);
        game.draw(&mut canvas);

        for (x, y) in [(5, 5), (6, 5), (5, 6), (6, 6)] {
            assert_eq!(canvas.get_pixel(x, y), Some(Color::GREEN));
        }
        assert_eq!(canvas.get_pixel(4, 5), Some(Color::DARK_GREEN));
        assert_eq!(canvas.get_pixel(10, 10), Some(Color::RED));
        assert_eq!(canvas.get_pixel(20, 20), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(21, 20), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(19, 19), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(25, 25), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(26, 25), Some(Color::BLACK));
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(0, 1), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(29, 0), Some(Color::BLACK));

        let red = canvas.pixels().iter().filter(|&&c| c == Color::RED).count();
        assert_eq!(red, 1);
    }

    #[test]
    fn test_heading_indicator_hidden_off_grid() {
        let mut game = Asteroids::with_seed(1);
        game.state = AsteroidsState::empty();
        game.state.ship.pos = IVec2::new(0, 0);
        game.state.ship.dir = IVec2::NEG_Y;

        let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE);
        game.draw(&mut canvas);
        assert!(!canvas.pixels().contains(&Color::DARK_GREEN));
    }
}
