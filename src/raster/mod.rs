//! Software raster target
//!
//! Patterns draw into a small off-screen [`Canvas`]; the driver then reads it
//! back one output point at a time through [`sample`].

pub mod canvas;
pub mod color;
pub mod sampler;

pub use canvas::Canvas;
pub use color::Color;
pub use sampler::{pixel_coords, sample};
