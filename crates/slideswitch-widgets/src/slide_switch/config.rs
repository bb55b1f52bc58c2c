//! Declarative switch configuration.

use super::colors::SwitchStyle;
use crate::error::{Result, SwitchError};
use serde::{Deserialize, Serialize};

/// Default track corner radius.
pub const DEFAULT_TRACK_RADIUS: f32 = 10.0;
/// Default thumb radius for [`SwitchStyle::Classic`].
pub const DEFAULT_THUMB_RADIUS: f32 = 14.0;
/// Default thumb radius for [`SwitchStyle::Simplified`].
pub const DEFAULT_SIMPLIFIED_THUMB_RADIUS: f32 = 18.0;
/// Default track opacity.
pub const DEFAULT_TRACK_OPACITY: f32 = 0.5;
/// Default slide duration in milliseconds.
pub const DEFAULT_ANIMATION_MS: u64 = 120;

/// Everything needed to build a [`SlideSwitch`](super::SlideSwitch).
///
/// Every field is optional in a document; missing ones take the defaults
/// below. `color_palette` is kept as a raw value so that a document carrying
/// something other than a palette is rejected when the switch is built, not
/// silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideSwitchConfig {
    /// Construction variant
    pub style: SwitchStyle,
    /// Track corner radius
    pub track_radius: f32,
    /// Thumb radius; `None` takes the style's default
    pub thumb_radius: Option<f32>,
    /// Track opacity in [0, 1]
    pub track_opacity: f32,
    /// Thumb opacity in [0, 1]
    pub thumb_opacity: f32,
    /// Label opacity in [0, 1]
    pub text_opacity: f32,
    /// `null` for the ambient palette, or a map of role name to color
    pub color_palette: serde_json::Value,
    /// Thumb label while checked
    pub thumb_text_true: String,
    /// Thumb label while unchecked
    pub thumb_text_false: String,
    /// Slide duration in milliseconds
    pub animation_duration_ms: u64,
    /// Multiplier on the thumb label size
    pub font_size_gain: f32,
    /// `"h"` or `"v"`; anything else means horizontal
    pub orientation: String,
    /// Whether the switch accepts pointer input
    pub enabled: bool,
    /// Initial state
    pub checked: bool,
}

impl Default for SlideSwitchConfig {
    fn default() -> Self {
        Self {
            style: SwitchStyle::Classic,
            track_radius: DEFAULT_TRACK_RADIUS,
            thumb_radius: None,
            track_opacity: DEFAULT_TRACK_OPACITY,
            thumb_opacity: 1.0,
            text_opacity: 1.0,
            color_palette: serde_json::Value::Null,
            thumb_text_true: String::new(),
            thumb_text_false: String::new(),
            animation_duration_ms: DEFAULT_ANIMATION_MS,
            font_size_gain: 1.0,
            orientation: "h".to_string(),
            enabled: true,
            checked: false,
        }
    }
}

impl SlideSwitchConfig {
    /// Parse a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| SwitchError::Config(e.to_string()))
    }

    /// Parse a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml_ng::from_str(source).map_err(|e| SwitchError::Config(e.to_string()))
    }

    /// Thumb radius after applying the style default.
    #[must_use]
    pub fn effective_thumb_radius(&self) -> f32 {
        self.thumb_radius.unwrap_or(match self.style {
            SwitchStyle::Classic => DEFAULT_THUMB_RADIUS,
            SwitchStyle::Simplified => DEFAULT_SIMPLIFIED_THUMB_RADIUS,
        })
    }
}
