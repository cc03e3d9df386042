//! Packed ARGB color
//!
//! Matches the host engine's native `0xAARRGGBB` integer pixel format so a
//! sampled value can be written straight into the host's color array.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// An opaque-by-default RGB color packed as `0xAARRGGBB`
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Ship heading indicator
    pub const DARK_GREEN: Color = Color::rgb(0, 100, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// Build a fully opaque color from 8-bit channels
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}
