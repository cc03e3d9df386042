//! Nearest-neighbor canvas sampling
//!
//! Maps a normalized (s, t) coordinate onto a single canvas pixel. Column is
//! `floor(s * (width - 1))`, row is `floor(t * (height - 1))`, so s = t = 1
//! lands on the last column/row. Coordinates outside [0, 1] (and NaN) clamp
//! to the nearest edge instead of reading past the buffer.

use super::{Canvas, Color};

/// Pixel column/row for a normalized coordinate on a `width` × `height` canvas
#[inline]
pub fn pixel_coords(width: u32, height: u32, s: f32, t: f32) -> (u32, u32) {
    (axis_index(width, s), axis_index(height, t))
}

#[inline]
fn axis_index(len: u32, n: f32) -> u32 {
    let last = len.saturating_sub(1);
    // Float-to-int casts saturate (NaN -> 0), so only the upper bound needs care
    let idx = (n * last as f32).floor() as i64;
    idx.clamp(0, last as i64) as u32
}

/// Color of the canvas pixel nearest to (s, t)
pub fn sample(canvas: &Canvas, s: f32, t: f32) -> Color {
    let (x, y) = pixel_coords(canvas.width(), canvas.height(), s, t);
    canvas.pixels()[(y * canvas.width() + x) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gradient(width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                canvas.set_pixel(x, y, Color::rgb(x as u8, y as u8, 0));
            }
        }
        canvas
    }

    #[test]
    fn test_corners() {
        let canvas = gradient(30, 30);
        assert_eq!(sample(&canvas, 0.0, 0.0), Color::rgb(0, 0, 0));
        assert_eq!(sample(&canvas, 1.0, 0.0), Color::rgb(29, 0, 0));
        assert_eq!(sample(&canvas, 0.0, 1.0), Color::rgb(0, 29, 0));
        assert_eq!(sample(&canvas, 1.0, 1.0), Color::rgb(29, 29, 0));
    }

    #[test]
    fn test_non_square() {
        let canvas = gradient(10, 4);
        // 0.5 * 9 = 4.5 -> 4, 0.5 * 3 = 1.5 -> 1
        assert_eq!(sample(&canvas, 0.5, 0.5), Color::rgb(4, 1, 0));
    }

    #[test]
    fn test_out_of_range_clamps() {
        let canvas = gradient(30, 30);
        assert_eq!(sample(&canvas, -0.5, 2.0), Color::rgb(0, 29, 0));
        assert_eq!(sample(&canvas, f32::NAN, f32::INFINITY), Color::rgb(0, 29, 0));
        assert_eq!(sample(&canvas, f32::NEG_INFINITY, -1.0e9), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_single_pixel_canvas() {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(Color::RED);
        assert_eq!(sample(&canvas, 0.7, 1.0), Color::RED);
    }

    proptest! {
        #[test]
        fn prop_sample_matches_floor_index(s in 0.0f32..=1.0, t in 0.0f32..=1.0) {
            let canvas = gradient(30, 20);
            let x = (s * 29.0).floor() as u8;
            let y = (t * 19.0).floor() as u8;
            prop_assert_eq!(sample(&canvas, s, t), Color::rgb(x, y, 0));
        }

        #[test]
        fn prop_any_input_stays_in_bounds(s in any::<f32>(), t in any::<f32>()) {
            let (x, y) = pixel_coords(30, 20, s, t);
            prop_assert!(x < 30);
            prop_assert!(y < 20);
        }
    }
}
