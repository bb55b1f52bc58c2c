//! Slide switch widget for the slideswitch toolkit.

pub mod error;
pub mod slide_switch;

pub use error::{Result, SwitchError};
pub use slide_switch::{
    end_offset, CheckedChanged, ColorSet, Orientation, PaletteMapping, SlideSwitch,
    SlideSwitchConfig, StateColors, SwitchMetrics, SwitchState, SwitchStyle, ThumbText,
    DEFAULT_ANIMATION_MS,
};
