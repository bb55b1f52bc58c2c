//! Core types and traits for the slide switch widget.
//!
//! This crate provides the host-facing primitives the widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] and role-based [`Palette`]s
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`MouseButton`], [`Key`]
//! - Time-driven interpolation: [`Easing`], [`EasedValue`]
//! - Rendering: the [`Canvas`] trait, [`DrawCommand`], [`RecordingCanvas`]

pub mod animation;
mod canvas;
pub mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod palette;
pub mod widget;

pub use animation::{EasedValue, Easing};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand};
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use palette::{Palette, PaletteRole};
pub use widget::{
    AccessibleRole, Canvas, CursorIcon, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
};
