//! Fixed-size pixel canvas
//!
//! Integer-coordinate fill primitives that clip silently against the canvas
//! bounds. All patterns render into one of these every frame.

use super::Color;

/// A width × height grid of [`Color`] values, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Allocate a canvas filled with black
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "canvas must be at least 1x1");
        Self {
            pixels: vec![Color::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fill the part of the `w` × `h` rectangle at (`x`, `y`) that lies on the canvas
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for row in y0..y1 {
            let start = self.index(x0 as u32, row as u32);
            let end = start + (x1 - x0) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Set one pixel; no-op when off the canvas
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.index(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    /// Read one pixel, `None` when off the canvas
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Filled disk centered at (`cx`, `cy`)
    ///
    /// A pixel is lit when its center lies within `radius` of the disk center.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r_sq = radius * radius;
        let x_min = ((cx - radius).floor() as i32).max(0);
        let y_min = ((cy - radius).floor() as i32).max(0);
        let x_max = ((cx + radius).ceil() as i32).min(self.width as i32 - 1);
        let y_max = ((cy + radius).ceil() as i32).min(self.height as i32 - 1);

        for py in y_min..=y_max {
            let dy = py as f32 + 0.5 - cy;
            for px in x_min..=x_max {
                let dx = px as f32 + 0.5 - cx;
                if dx * dx + dy * dy <= r_sq {
                    let idx = self.index(px as u32, py as u32);
                    self.pixels[idx] = color;
                }
            }
        }
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw little-endian `u32` bytes, for handing the frame to a host buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
