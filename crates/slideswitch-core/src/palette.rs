//! Role-based color palettes.
//!
//! A [`Palette`] names colors by the role they play rather than by hue, so a
//! widget can pick "the highlight" or "the shadow" and stay consistent with
//! whatever scheme the host installs.

use crate::color::{self, Color};
use serde::{Deserialize, Serialize};

/// A named color role within a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteRole {
    /// Selection / accent color
    Highlight,
    /// Very dark shade, used for drop shadows and disabled tracks
    Shadow,
    /// Lighter than the button face
    Light,
    /// Darker than the button face
    Dark,
    /// Between button face and dark
    Mid,
    /// Foreground text
    Text,
    /// Text drawn on top of the highlight
    HighlightedText,
}

/// A color palette keyed by role.
///
/// Roles that a configuration document leaves out fall back to the
/// [ambient](Palette::ambient) palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Selection / accent color
    #[serde(with = "color::hex")]
    pub highlight: Color,
    /// Very dark shade
    #[serde(with = "color::hex")]
    pub shadow: Color,
    /// Light shade
    #[serde(with = "color::hex")]
    pub light: Color,
    /// Dark shade
    #[serde(with = "color::hex")]
    pub dark: Color,
    /// Mid shade
    #[serde(with = "color::hex")]
    pub mid: Color,
    /// Foreground text
    #[serde(with = "color::hex")]
    pub text: Color,
    /// Text on highlight
    #[serde(with = "color::hex")]
    pub highlighted_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::ambient()
    }
}

impl Palette {
    /// The palette a widget inherits when its host supplies none.
    #[must_use]
    pub fn ambient() -> Self {
        Self {
            highlight: Color::from_rgb8(0x30, 0x8c, 0xc6),
            shadow: Color::BLACK,
            light: Color::WHITE,
            dark: Color::from_rgb8(0xa0, 0xa0, 0xa0),
            mid: Color::from_rgb8(0xb8, 0xb8, 0xb8),
            text: Color::BLACK,
            highlighted_text: Color::WHITE,
        }
    }

    /// A dark ambient palette.
    #[must_use]
    pub fn dark_scheme() -> Self {
        Self {
            highlight: Color::from_rgb8(0x2a, 0x82, 0xda),
            shadow: Color::from_rgb8(0x14, 0x14, 0x14),
            light: Color::from_rgb8(0x5a, 0x5a, 0x5a),
            dark: Color::from_rgb8(0x23, 0x23, 0x23),
            mid: Color::from_rgb8(0x35, 0x35, 0x35),
            text: Color::WHITE,
            highlighted_text: Color::WHITE,
        }
    }

    /// Look up the color for a role.
    #[must_use]
    pub const fn role(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Highlight => self.highlight,
            PaletteRole::Shadow => self.shadow,
            PaletteRole::Light => self.light,
            PaletteRole::Dark => self.dark,
            PaletteRole::Mid => self.mid,
            PaletteRole::Text => self.text,
            PaletteRole::HighlightedText => self.highlighted_text,
        }
    }

    /// Replace the color for a role.
    pub fn set_role(&mut self, role: PaletteRole, color: Color) {
        let slot = match role {
            PaletteRole::Highlight => &mut self.highlight,
            PaletteRole::Shadow => &mut self.shadow,
            PaletteRole::Light => &mut self.light,
            PaletteRole::Dark => &mut self.dark,
            PaletteRole::Mid => &mut self.mid,
            PaletteRole::Text => &mut self.text,
            PaletteRole::HighlightedText => &mut self.highlighted_text,
        };
        *slot = color;
    }

    /// Builder form of [`set_role`](Self::set_role).
    #[must_use]
    pub fn with_role(mut self, role: PaletteRole, color: Color) -> Self {
        self.set_role(role, color);
        self
    }
}
