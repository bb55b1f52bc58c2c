//! Slideswitch: an animated two-state slide switch widget.
//!
//! Re-exports the drawing primitives from `slideswitch-core` and the widget
//! from `slideswitch-widgets`, and adds [`SwitchBoard`], a small host shell
//! that drives a row of switches the way an application window would.
//!
//! # Quick Start
//!
//! ```
//! use slideswitch::prelude::*;
//! use std::time::Duration;
//!
//! let mut board = SwitchBoard::demo();
//! board.all_off();
//! board.click(0);
//! while board.tick(Duration::from_millis(16)) {}
//!
//! assert!(board.entries()[0].is_label_enabled());
//! assert!(!board.entries()[1].is_label_enabled());
//! ```

pub mod board;

pub use board::{BoardConfig, BoardEntry, BoardRowConfig, SwitchBoard};
pub use slideswitch_core::*;
pub use slideswitch_widgets::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::board::{BoardConfig, BoardEntry, SwitchBoard};
    pub use slideswitch_core::{
        Canvas, Color, Constraints, DrawCommand, Event, Palette, PaletteRole, Point,
        RecordingCanvas, Rect, Size, Widget,
    };
    pub use slideswitch_widgets::{
        CheckedChanged, Orientation, SlideSwitch, SlideSwitchConfig, SwitchError, SwitchStyle,
    };
}
