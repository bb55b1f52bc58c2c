//! Thumb travel geometry.
//!
//! Everything here is a pure function of the radii, the orientation and the
//! widget size. The widget passes its current size in explicitly; nothing
//! captures it.

use serde::{Deserialize, Serialize};
use slideswitch_core::{Point, Rect, Size};

/// Axis along which the thumb travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Thumb travels left (off) to right (on).
    #[default]
    Horizontal,
    /// Thumb travels bottom (off) to top (on).
    Vertical,
}

impl Orientation {
    /// Parse an orientation code.
    ///
    /// `"h"` and `"v"` (or the full words, any case) are recognised. Anything
    /// else normalizes to [`Orientation::Horizontal`] and is logged; it is
    /// never an error.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Self::Horizontal,
            "v" | "vertical" => Self::Vertical,
            other => {
                log::warn!("unknown orientation {other:?}, falling back to horizontal");
                Self::Horizontal
            }
        }
    }

    /// Short code, the inverse of [`parse`](Self::parse).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Horizontal => "h",
            Self::Vertical => "v",
        }
    }

    /// Extent of `size` along the travel axis.
    #[must_use]
    pub const fn axis_extent(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }
}

impl From<&str> for Orientation {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

/// Radii of a switch and the quantities derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwitchMetrics {
    /// Corner radius of the track
    pub track_radius: f32,
    /// Radius of the thumb circle
    pub thumb_radius: f32,
}

impl SwitchMetrics {
    /// Create metrics from the two radii.
    #[must_use]
    pub const fn new(track_radius: f32, thumb_radius: f32) -> Self {
        Self {
            track_radius,
            thumb_radius,
        }
    }

    /// Inset of the track from the widget edge, nonzero when the thumb
    /// overhangs the track.
    #[must_use]
    pub fn margin(&self) -> f32 {
        (self.thumb_radius - self.track_radius).max(0.0)
    }

    /// Distance from either end of the travel axis to the thumb center at rest.
    #[must_use]
    pub fn base_offset(&self) -> f32 {
        self.thumb_radius.max(self.track_radius)
    }

    /// Whether the thumb is larger than the track (the Android look).
    #[must_use]
    pub fn thumb_overhangs(&self) -> bool {
        self.thumb_radius > self.track_radius
    }

    /// Size hint advertised to the host layout.
    ///
    /// Horizontal: `(4·track + 2·margin, 2·track + 2·margin)`; vertical
    /// switches get the transpose.
    #[must_use]
    pub fn preferred_size(&self, orientation: Orientation) -> Size {
        let margin = self.margin();
        let size = Size::new(
            4.0f32.mul_add(self.track_radius, 2.0 * margin),
            2.0f32.mul_add(self.track_radius, 2.0 * margin),
        );
        match orientation {
            Orientation::Horizontal => size,
            Orientation::Vertical => size.transpose(),
        }
    }

    /// Resting offset for a checked state. See [`end_offset`].
    #[must_use]
    pub fn end_offset(&self, checked: bool, orientation: Orientation, size: Size) -> f32 {
        end_offset(checked, orientation, size, self.base_offset())
    }

    /// Rectangle occupied by the track, local to the widget.
    #[must_use]
    pub fn track_rect(&self, size: Size) -> Rect {
        Rect::from_size(size).inset(self.margin())
    }

    /// Center of the thumb for a given travel offset, local to the widget.
    #[must_use]
    pub fn thumb_center(&self, offset: f32, orientation: Orientation, size: Size) -> Point {
        match orientation {
            Orientation::Horizontal => Point::new(offset, size.height / 2.0),
            Orientation::Vertical => Point::new(size.width / 2.0, offset),
        }
    }
}

/// Resting thumb offset along the travel axis.
///
/// Horizontal: checked sits at `width - base_offset`, unchecked at
/// `base_offset`. Vertical: checked sits at `base_offset` (top), unchecked at
/// `height - base_offset`.
#[must_use]
pub fn end_offset(checked: bool, orientation: Orientation, size: Size, base_offset: f32) -> f32 {
    match (orientation, checked) {
        (Orientation::Horizontal, true) => size.width - base_offset,
        (Orientation::Horizontal, false) | (Orientation::Vertical, true) => base_offset,
        (Orientation::Vertical, false) => size.height - base_offset,
    }
}
