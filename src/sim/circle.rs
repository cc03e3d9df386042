//! Circle pattern
//!
//! A filled white disk centered on the canvas. Stateless apart from the
//! radius knob; redrawn from scratch every frame.

use super::Simulation;
use crate::consts::*;
use crate::params::Parameter;
use crate::raster::{Canvas, Color};

#[derive(Debug, Clone)]
pub struct Circle {
    /// Disk radius in pixels
    pub radius: Parameter,
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Circle {
    pub fn new() -> Self {
        Self {
            radius: Parameter::new(
                "radius",
                CIRCLE_RADIUS_DEFAULT,
                CIRCLE_RADIUS_MIN,
                CIRCLE_RADIUS_MAX,
            ),
        }
    }
}

impl Simulation for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn canvas_size(&self) -> (u32, u32) {
        (CANVAS_SIZE, CANVAS_SIZE)
    }

    fn reset(&mut self) {}

    fn step(&mut self, _delta_ms: f64) {}

    fn draw(&self, canvas: &mut Canvas) {
        // Whole pixels, like the host knob's integer read-out
        let radius = self.radius.value() as i32;
        let cx = (canvas.width() / 2) as f32;
        let cy = (canvas.height() / 2) as f32;
        canvas.fill_circle(cx, cy, radius as f32, Color::WHITE);
    }

    fn parameters(&self) -> Vec<&Parameter> {
        vec![&self.radius]
    }

    fn parameter_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        (name == self.radius.name).then_some(&mut self.radius)
    }
}
