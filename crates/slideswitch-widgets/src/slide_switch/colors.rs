//! Palette to role-color resolution.

use super::geometry::SwitchMetrics;
use serde::{Deserialize, Serialize};
use slideswitch_core::{Color, Palette};

/// Construction variant of a switch, which fixes how palettes are mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchStyle {
    /// Android look when the thumb overhangs the track, iOS-like otherwise.
    #[default]
    Classic,
    /// Track and thumb share one color per state.
    Simplified,
}

/// How the six role colors are picked out of a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteMapping {
    /// Thumb larger than track.
    Android,
    /// Thumb no larger than track.
    IosLike,
    /// Same color for track and thumb.
    Simplified,
}

impl PaletteMapping {
    /// Pick the mapping for a style and a pair of radii.
    #[must_use]
    pub fn resolve(style: SwitchStyle, metrics: &SwitchMetrics) -> Self {
        match style {
            SwitchStyle::Simplified => Self::Simplified,
            SwitchStyle::Classic if metrics.thumb_overhangs() => Self::Android,
            SwitchStyle::Classic => Self::IosLike,
        }
    }

    /// Resolve all role colors from a palette in one step.
    #[must_use]
    pub const fn apply(self, p: &Palette) -> ColorSet {
        match self {
            Self::Android => ColorSet {
                track_on: p.highlight,
                track_off: p.dark,
                thumb_on: p.highlight,
                thumb_off: p.light,
                text_on: p.highlighted_text,
                text_off: p.dark,
            },
            Self::IosLike => ColorSet {
                track_on: p.highlight,
                track_off: p.dark,
                thumb_on: p.highlighted_text,
                thumb_off: p.light,
                text_on: p.highlight,
                text_off: p.dark,
            },
            Self::Simplified => ColorSet {
                track_on: p.highlight,
                track_off: p.shadow,
                thumb_on: p.highlight,
                thumb_off: p.shadow,
                text_on: p.highlighted_text,
                text_off: p.text,
            },
        }
    }
}

/// Resolved colors for both checked states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    /// Track when checked
    pub track_on: Color,
    /// Track when unchecked
    pub track_off: Color,
    /// Thumb when checked
    pub thumb_on: Color,
    /// Thumb when unchecked
    pub thumb_off: Color,
    /// Thumb label when checked
    pub text_on: Color,
    /// Thumb label when unchecked
    pub text_off: Color,
}

impl ColorSet {
    /// Colors to paint with for a checked state.
    #[must_use]
    pub const fn for_state(&self, checked: bool) -> StateColors {
        if checked {
            StateColors {
                track: self.track_on,
                thumb: self.thumb_on,
                text: self.text_on,
            }
        } else {
            StateColors {
                track: self.track_off,
                thumb: self.thumb_off,
                text: self.text_off,
            }
        }
    }
}

/// Track, thumb and text colors for one paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateColors {
    /// Track fill
    pub track: Color,
    /// Thumb fill
    pub thumb: Color,
    /// Label color
    pub text: Color,
}

impl StateColors {
    /// Neutral fallback used while disabled, regardless of checked state.
    #[must_use]
    pub const fn disabled(ambient: &Palette) -> Self {
        Self {
            track: ambient.shadow,
            thumb: ambient.mid,
            text: ambient.shadow,
        }
    }
}
