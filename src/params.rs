//! Host-tunable numeric parameters
//!
//! The host engine owns the knob UI; patterns only declare a name, default and
//! range and read back the clamped value each frame.

use serde::{Deserialize, Serialize};

/// A bounded floating-point knob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Key the host uses to address this knob
    pub name: String,
    /// Tooltip text (may be empty)
    pub description: String,
    value: f64,
    default: f64,
    min: f64,
    max: f64,
}

impl Parameter {
    /// Create a knob at its default value. `min` and `max` may be given in either order.
    pub fn new(name: impl Into<String>, default: f64, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let default = default.clamp(min, max);
        Self {
            name: name.into(),
            description: String::new(),
            value: default,
            default,
            min,
            max,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn default_value(&self) -> f64 {
        self.default
    }

    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Set the value, clamped into range. NaN is ignored.
    pub fn set(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(self.min, self.max);
    }

    /// Restore the default value
    pub fn reset(&mut self) {
        self.value = self.default;
    }

    /// Current value mapped to [0, 1]
    pub fn normalized(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }

    /// Set from a [0, 1] knob position
    pub fn set_normalized(&mut self, n: f64) {
        self.set(self.min + n * (self.max - self.min));
    }
}
