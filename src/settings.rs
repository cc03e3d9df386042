//! Pattern configuration
//!
//! Serializable startup settings: which pattern runs, its knob values and an
//! optional RNG seed. Stored as JSON by whoever embeds the crate.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Available patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Circle,
    Pong,
    Asteroids,
}

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [PatternKind::Circle, PatternKind::Pong, PatternKind::Asteroids];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Circle => "Circle",
            PatternKind::Pong => "Pong",
            PatternKind::Asteroids => "Asteroids",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "circle" | "circle2d" => Some(PatternKind::Circle),
            "pong" => Some(PatternKind::Pong),
            "asteroids" | "miniasteroids" => Some(PatternKind::Asteroids),
            _ => None,
        }
    }
}

/// Pattern settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    /// Pattern to run
    pub pattern: PatternKind,
    /// RNG seed; `None` draws a fresh seed per simulation
    pub seed: Option<u64>,
    /// Circle radius knob (pixels)
    pub circle_radius: f64,
    /// Asteroids speed knob (multiplier)
    pub asteroids_speed: f64,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            pattern: PatternKind::default(),
            seed: None,
            circle_radius: CIRCLE_RADIUS_DEFAULT,
            asteroids_speed: ASTEROIDS_SPEED_DEFAULT,
        }
    }
}

impl PatternSettings {
    /// Settings for a given pattern with default knobs
    pub fn for_pattern(pattern: PatternKind) -> Self {
        Self {
            pattern,
            ..Self::default()
        }
    }

    /// Pin the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded settings for pattern {}", settings.pattern.as_str());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
