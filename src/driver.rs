//! Per-frame pattern driver
//!
//! The host engine calls [`PatternDriver::render`] once per frame with the
//! elapsed time and its output points. Each frame the driver clears the
//! canvas, lets the active pattern step and draw, then samples one color per
//! point into the host's color array. No simulation logic lives here.

use serde::{Deserialize, Serialize};

use crate::params::Parameter;
use crate::raster::{Canvas, Color, sample};
use crate::settings::PatternSettings;
use crate::sim::{Pattern, Simulation};

/// A host output location (e.g. one LED) in normalized fixture coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputPoint {
    /// Slot in the host's color array
    pub index: usize,
    /// Normalized x in [0, 1]
    pub xn: f32,
    /// Normalized y in [0, 1]
    pub yn: f32,
}

impl OutputPoint {
    pub fn new(index: usize, xn: f32, yn: f32) -> Self {
        Self { index, xn, yn }
    }
}

/// Owns the canvas and the active pattern
#[derive(Debug, Clone)]
pub struct PatternDriver {
    canvas: Canvas,
    pattern: Pattern,
}

impl PatternDriver {
    /// Driver with a canvas sized for `pattern`
    pub fn new(pattern: Pattern) -> Self {
        let (width, height) = pattern.canvas_size();
        Self {
            canvas: Canvas::new(width, height),
            pattern,
        }
    }

    /// Driver for the pattern and knob values in `settings`
    pub fn from_settings(settings: &PatternSettings) -> Self {
        Self::new(Pattern::from_settings(settings))
    }

    /// Host activation hook: reinitialize the active pattern's game state
    pub fn activate(&mut self) {
        self.pattern.reset();
    }

    /// Swap in a new pattern, resize the canvas if needed and activate it
    pub fn set_pattern(&mut self, pattern: Pattern) {
        log::info!("Switching pattern: {} -> {}", self.pattern.name(), pattern.name());
        let (width, height) = pattern.canvas_size();
        if (width, height) != (self.canvas.width(), self.canvas.height()) {
            self.canvas = Canvas::new(width, height);
        }
        self.pattern = pattern;
        self.activate();
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn pattern_mut(&mut self) -> &mut Pattern {
        &mut self.pattern
    }

    /// Canvas as drawn by the last frame
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Knobs of the active pattern
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.pattern.parameters()
    }

    /// Set a knob by name (clamped). Returns false for unknown names.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> bool {
        match self.pattern.parameter_mut(name) {
            Some(param) => {
                param.set(value);
                true
            }
            None => false,
        }
    }

    /// Render one frame and write a color for every output point
    ///
    /// Points whose index falls outside `colors` are skipped.
    pub fn render(&mut self, delta_ms: f64, points: &[OutputPoint], colors: &mut [Color]) {
        self.canvas.clear(Color::BLACK);
        self.pattern.step(delta_ms);
        self.pattern.draw(&mut self.canvas);

        let mut skipped = 0usize;
        for point in points {
            match colors.get_mut(point.index) {
                Some(slot) => *slot = sample(&self.canvas, point.xn, point.yn),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!(
                "{} output points out of range for {} colors",
                skipped,
                colors.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PatternKind;
    use crate::sim::{Asteroids, Circle, Pong};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A 30×30 grid of points, one per canvas pixel (offset half a pixel
    /// so float rounding never drops into the previous column)
    fn pixel_points() -> Vec<OutputPoint> {
        (0..30)
            .flat_map(|y| (0..30).map(move |x| (x, y)))
            .enumerate()
            .map(|(i, (x, y))| {
                OutputPoint::new(i, (x as f32 + 0.5) / 29.0, (y as f32 + 0.5) / 29.0)
            })
            .collect()
    }

    #[test]
    fn test_render_circle() {
        init_logger();
        let mut driver = PatternDriver::new(Pattern::Circle(Circle::new()));
        let points = [
            OutputPoint::new(0, 0.5, 0.5),
            OutputPoint::new(1, 0.0, 0.0),
            OutputPoint::new(2, 1.0, 1.0),
        ];
        let mut colors = [Color::RED; 3];
        driver.render(16.0, &points, &mut colors);
        assert_eq!(colors, [Color::WHITE, Color::BLACK, Color::BLACK]);
    }

    #[test]
    fn test_render_matches_canvas() {
        init_logger();
        let mut driver = PatternDriver::new(Pattern::Pong(Pong::with_seed(3)));
        let points = pixel_points();
        let mut colors = vec![Color::default(); points.len()];
        driver.render(16.0, &points, &mut colors);
        assert_eq!(colors.as_slice(), driver.canvas().pixels());
    }

    #[test]
    fn test_render_respects_point_indices() {
        init_logger();
        let mut driver = PatternDriver::new(Pattern::Circle(Circle::new()));
        let points = [OutputPoint::new(2, 0.5, 0.5), OutputPoint::new(9, 0.5, 0.5)];
        let mut colors = [Color::RED; 3];
        driver.render(16.0, &points, &mut colors);
        assert_eq!(colors, [Color::RED, Color::RED, Color::WHITE]);
    }

    #[test]
    fn test_render_steps_pattern() {
        init_logger();
        let mut driver = PatternDriver::new(Pattern::Pong(Pong::with_seed(3)));
        driver.render(16.0, &[], &mut []);
        driver.render(16.0, &[], &mut []);
        match driver.pattern() {
            Pattern::Pong(pong) => assert_eq!(pong.state.ball.x, 17),
            other => panic!("unexpected pattern {:?}", other.kind()),
        }
    }

    #[test]
    fn test_activate_resets() {
        init_logger();
        let mut driver = PatternDriver::new(Pattern::Asteroids(Asteroids::with_seed(8)));
        for _ in 0..20 {
            driver.render(200.0, &[], &mut []);
        }
        driver.activate();
        match driver.pattern() {
            Pattern::Asteroids(game) => {
                assert_eq!(game.state.ticks, 0);
                assert!(game.state.bullets.is_empty());
            }
            other => panic!("unexpected pattern {:?}", other.kind()),
        }
    }

    #[test]
    fn test_set_pattern_and_parameters() {
        init_logger();
        let settings = PatternSettings::for_pattern(PatternKind::Circle);
        let mut driver = PatternDriver::from_settings(&settings);
        assert!(driver.set_parameter("radius", 2.0));
        assert!(!driver.set_parameter("speed", 2.0));
        assert_eq!(driver.parameters()[0].value(), 2.0);

        driver.set_pattern(Pattern::Asteroids(Asteroids::with_seed(4)));
        assert_eq!(driver.pattern().kind(), PatternKind::Asteroids);
        assert!(driver.set_parameter("speed", 9.0));
        assert_eq!(driver.parameters()[0].value(), 4.0);

        let points = pixel_points();
        let mut colors = vec![Color::default(); points.len()];
        driver.render(1000.0, &points, &mut colors);
        assert!(colors.contains(&Color::GREEN));
    }
}
