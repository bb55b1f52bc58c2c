//! Animated two-state slide switch.
//!
//! A rounded track with a circular thumb that slides between an "off" and an
//! "on" end. Clicking (or pressing Space while focused) flips the state and
//! slides the thumb over the configured duration; setting the state from code
//! snaps the thumb instead.
//!
//! The switch owns no clock. The host calls [`SlideSwitch::tick`] while
//! [`SlideSwitch::is_animating`] is true and repaints whenever
//! [`SlideSwitch::take_redraw_request`] says so.
//!
//! # Examples
//!
//! ```
//! use slideswitch_core::{Size, Palette, PaletteRole, Color};
//! use slideswitch_widgets::SlideSwitch;
//!
//! let mut switch = SlideSwitch::new().thumb_text("On", "Off");
//! switch.resize(Size::new(100.0, 40.0));
//! assert_eq!(switch.offset(), 14.0);
//!
//! switch.set_palette(
//!     Palette::ambient().with_role(PaletteRole::Highlight, Color::from_rgb8(0, 136, 0)),
//! );
//! switch.set_checked(true);
//! assert_eq!(switch.offset(), 86.0);
//! ```

mod colors;
mod config;
mod geometry;

pub use colors::{ColorSet, PaletteMapping, StateColors, SwitchStyle};
pub use config::{
    SlideSwitchConfig, DEFAULT_ANIMATION_MS, DEFAULT_SIMPLIFIED_THUMB_RADIUS,
    DEFAULT_THUMB_RADIUS, DEFAULT_TRACK_OPACITY, DEFAULT_TRACK_RADIUS,
};
pub use geometry::{end_offset, Orientation, SwitchMetrics};

use crate::error::{Result, SwitchError};
use slideswitch_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, CursorIcon, EasedValue, Easing, Event, FontWeight, Key, MouseButton,
    Palette, Point, Rect, Size, TextStyle, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::time::Duration;

/// Factor applied to the track opacity while disabled.
const DISABLED_TRACK_OPACITY: f32 = 0.8;

/// Message emitted when the checked state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedChanged {
    /// The new state
    pub checked: bool,
}

/// Where the switch is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwitchState {
    /// Unchecked, thumb at rest.
    Unchecked,
    /// Checked, thumb at rest.
    Checked,
    /// Thumb sliding between two offsets.
    Transitioning {
        /// Offset the slide started from
        from: f32,
        /// Offset the slide ends at
        to: f32,
    },
}

/// Labels drawn inside the thumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThumbText {
    /// Shown while checked
    pub on: String,
    /// Shown while unchecked
    pub off: String,
}

impl ThumbText {
    /// Label for a checked state.
    #[must_use]
    pub fn for_state(&self, checked: bool) -> &str {
        if checked {
            &self.on
        } else {
            &self.off
        }
    }
}

type CheckedListener = Box<dyn FnMut(bool) + Send + Sync>;

/// Two-state animated slide switch widget.
pub struct SlideSwitch {
    /// Track and thumb radii
    metrics: SwitchMetrics,
    /// Construction variant
    style: SwitchStyle,
    /// Mapping currently in force, re-resolved on radius changes
    mapping: PaletteMapping,
    /// Travel axis
    orientation: Orientation,
    /// Logical value
    checked: bool,
    /// Whether pointer and keyboard input is accepted
    enabled: bool,
    /// Current thumb position along the travel axis
    offset: f32,
    /// In-flight slide, at most one
    transition: Option<EasedValue>,
    /// Palette supplied by `set_palette`; `None` follows the ambient palette
    palette: Option<Palette>,
    /// Palette inherited from the host
    ambient: Palette,
    /// Resolved role colors
    colors: ColorSet,
    track_opacity: f32,
    thumb_opacity: f32,
    text_opacity: f32,
    thumb_text: ThumbText,
    animation_duration: Duration,
    easing: Easing,
    font_size_gain: f32,
    /// Cached bounds
    bounds: Rect,
    /// Primary button went down inside the widget
    pressed: bool,
    hovered: bool,
    focused: bool,
    redraw_requested: bool,
    listeners: Vec<CheckedListener>,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl fmt::Debug for SlideSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideSwitch")
            .field("metrics", &self.metrics)
            .field("style", &self.style)
            .field("mapping", &self.mapping)
            .field("orientation", &self.orientation)
            .field("checked", &self.checked)
            .field("enabled", &self.enabled)
            .field("offset", &self.offset)
            .field("transition", &self.transition)
            .field("bounds", &self.bounds)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for SlideSwitch {
    fn default() -> Self {
        Self::with_style(SwitchStyle::Classic)
    }
}

impl SlideSwitch {
    /// Create a classic switch: Android colors while the thumb overhangs
    /// the track, iOS-like colors otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch using the simplified color mapping.
    #[must_use]
    pub fn simplified() -> Self {
        Self::with_style(SwitchStyle::Simplified)
    }

    /// Create a switch with an explicit construction variant.
    #[must_use]
    pub fn with_style(style: SwitchStyle) -> Self {
        let thumb_radius = match style {
            SwitchStyle::Classic => DEFAULT_THUMB_RADIUS,
            SwitchStyle::Simplified => DEFAULT_SIMPLIFIED_THUMB_RADIUS,
        };
        let metrics = SwitchMetrics::new(DEFAULT_TRACK_RADIUS, thumb_radius);
        let mapping = PaletteMapping::resolve(style, &metrics);
        let ambient = Palette::ambient();
        Self {
            metrics,
            style,
            mapping,
            orientation: Orientation::Horizontal,
            checked: false,
            enabled: true,
            offset: metrics.base_offset(),
            transition: None,
            palette: None,
            ambient,
            colors: mapping.apply(&ambient),
            track_opacity: DEFAULT_TRACK_OPACITY,
            thumb_opacity: 1.0,
            text_opacity: 1.0,
            thumb_text: ThumbText::default(),
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            easing: Easing::EaseInOut,
            font_size_gain: 1.0,
            bounds: Rect::default(),
            pressed: false,
            hovered: false,
            focused: false,
            redraw_requested: false,
            listeners: Vec::new(),
            accessible_name_value: None,
            test_id_value: None,
        }
    }

    /// Build a switch from a configuration document.
    pub fn from_config(config: &SlideSwitchConfig) -> Result<Self> {
        let mut switch = Self::with_style(config.style);
        switch.set_radii(config.track_radius, config.effective_thumb_radius())?;
        switch.set_track_opacity(config.track_opacity)?;
        switch.set_thumb_opacity(config.thumb_opacity)?;
        switch.set_text_opacity(config.text_opacity)?;
        switch.set_font_size_gain(config.font_size_gain)?;
        switch.set_palette_value(&config.color_palette)?;
        switch.set_thumb_text(&config.thumb_text_true, &config.thumb_text_false);
        switch.set_animation_duration(Duration::from_millis(config.animation_duration_ms));
        switch.set_orientation_str(&config.orientation);
        switch.set_enabled(config.enabled);
        switch.set_checked(config.checked);
        switch.redraw_requested = false;
        Ok(switch)
    }

    // ===== Builders =====

    /// Set the track radius (clamped to at least 1).
    #[must_use]
    pub fn track_radius(mut self, radius: f32) -> Self {
        self.apply_radii(radius.max(1.0), self.metrics.thumb_radius);
        self
    }

    /// Set the thumb radius (clamped to at least 1).
    #[must_use]
    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.apply_radii(self.metrics.track_radius, radius.max(1.0));
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.set_palette(palette);
        self
    }

    /// Set the thumb labels.
    #[must_use]
    pub fn thumb_text(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.thumb_text = ThumbText {
            on: on.into(),
            off: off.into(),
        };
        self
    }

    /// Set the travel axis.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Set the slide duration.
    #[must_use]
    pub const fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set the slide easing curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the track opacity (clamped to [0, 1]).
    #[must_use]
    pub fn track_opacity(mut self, opacity: f32) -> Self {
        self.track_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the thumb opacity (clamped to [0, 1]).
    #[must_use]
    pub fn thumb_opacity(mut self, opacity: f32) -> Self {
        self.thumb_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the label opacity (clamped to [0, 1]).
    #[must_use]
    pub fn text_opacity(mut self, opacity: f32) -> Self {
        self.text_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the label size multiplier.
    #[must_use]
    pub fn font_size_gain(mut self, gain: f32) -> Self {
        self.font_size_gain = gain.max(0.0);
        self
    }

    /// Set the initial state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.snap_to_rest();
        self
    }

    /// Set whether input is accepted.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the palette inherited from the host.
    #[must_use]
    pub fn ambient_palette(mut self, palette: Palette) -> Self {
        self.set_ambient_palette(palette);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // ===== Getters =====

    /// Get the checked state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Get whether input is accepted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current thumb position along the travel axis.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a slide is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Current state machine position.
    #[must_use]
    pub fn state(&self) -> SwitchState {
        match &self.transition {
            Some(anim) => SwitchState::Transitioning {
                from: anim.from as f32,
                to: anim.to as f32,
            },
            None if self.checked => SwitchState::Checked,
            None => SwitchState::Unchecked,
        }
    }

    /// Resolved role colors.
    #[must_use]
    pub const fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Palette mapping in force.
    #[must_use]
    pub const fn mapping(&self) -> PaletteMapping {
        self.mapping
    }

    /// Construction variant.
    #[must_use]
    pub const fn get_style(&self) -> SwitchStyle {
        self.style
    }

    /// Radii and derived geometry.
    #[must_use]
    pub const fn metrics(&self) -> &SwitchMetrics {
        &self.metrics
    }

    /// Get the track radius.
    #[must_use]
    pub const fn get_track_radius(&self) -> f32 {
        self.metrics.track_radius
    }

    /// Get the thumb radius.
    #[must_use]
    pub const fn get_thumb_radius(&self) -> f32 {
        self.metrics.thumb_radius
    }

    /// Get the travel axis.
    #[must_use]
    pub const fn get_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the thumb labels.
    #[must_use]
    pub const fn get_thumb_text(&self) -> &ThumbText {
        &self.thumb_text
    }

    /// Get the slide duration.
    #[must_use]
    pub const fn get_animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Get the track opacity.
    #[must_use]
    pub const fn get_track_opacity(&self) -> f32 {
        self.track_opacity
    }

    /// Get the thumb opacity.
    #[must_use]
    pub const fn get_thumb_opacity(&self) -> f32 {
        self.thumb_opacity
    }

    /// Get the label opacity.
    #[must_use]
    pub const fn get_text_opacity(&self) -> f32 {
        self.text_opacity
    }

    /// Get the label size multiplier.
    #[must_use]
    pub const fn get_font_size_gain(&self) -> f32 {
        self.font_size_gain
    }

    /// Palette in effect: the explicit one, or the ambient one.
    #[must_use]
    pub fn effective_palette(&self) -> &Palette {
        self.palette.as_ref().unwrap_or(&self.ambient)
    }

    /// Palette set through [`set_palette`](Self::set_palette), if any.
    #[must_use]
    pub const fn explicit_palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Get the ambient palette.
    #[must_use]
    pub const fn get_ambient_palette(&self) -> &Palette {
        &self.ambient
    }

    /// Size hint for the host layout.
    #[must_use]
    pub fn preferred_size(&self) -> Size {
        self.metrics.preferred_size(self.orientation)
    }

    /// Resting offset for a state at the current size and orientation.
    #[must_use]
    pub fn end_offset(&self, checked: bool) -> f32 {
        self.metrics
            .end_offset(checked, self.orientation, self.bounds.size())
    }

    // ===== Configuration =====

    /// Replace the palette and recompute every role color at once.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
        self.colors = self.mapping.apply(&palette);
        self.request_redraw();
    }

    /// Drop the explicit palette and follow the ambient one again.
    pub fn clear_palette(&mut self) {
        self.palette = None;
        self.colors = self.mapping.apply(&self.ambient);
        self.request_redraw();
    }

    /// Set the palette from an untyped value.
    ///
    /// `null` reverts to the ambient palette; an object is read as a map of
    /// role name to color. Anything else is rejected and the widget is left
    /// unchanged.
    pub fn set_palette_value(&mut self, value: &serde_json::Value) -> Result<()> {
        match value {
            serde_json::Value::Null => {
                self.clear_palette();
                Ok(())
            }
            serde_json::Value::Object(_) => {
                let palette = serde_json::from_value::<Palette>(value.clone())
                    .map_err(|e| SwitchError::invalid("color_palette", e.to_string()))?;
                self.set_palette(palette);
                Ok(())
            }
            other => Err(SwitchError::invalid(
                "color_palette",
                format!("must be null or a palette object, got {other}"),
            )),
        }
    }

    /// Replace the inherited palette. The role colors follow it unless an
    /// explicit palette was set.
    pub fn set_ambient_palette(&mut self, palette: Palette) {
        self.ambient = palette;
        if self.palette.is_none() {
            self.colors = self.mapping.apply(&self.ambient);
        }
        self.request_redraw();
    }

    /// Set the thumb labels.
    pub fn set_thumb_text(&mut self, on: impl Into<String>, off: impl Into<String>) {
        self.thumb_text = ThumbText {
            on: on.into(),
            off: off.into(),
        };
        self.request_redraw();
    }

    /// Set the track radius.
    pub fn set_track_radius(&mut self, radius: f32) -> Result<()> {
        self.set_radii(radius, self.metrics.thumb_radius)
    }

    /// Set the thumb radius.
    pub fn set_thumb_radius(&mut self, radius: f32) -> Result<()> {
        self.set_radii(self.metrics.track_radius, radius)
    }

    /// Set both radii in one step.
    pub fn set_radii(&mut self, track_radius: f32, thumb_radius: f32) -> Result<()> {
        check_radius("track_radius", track_radius)?;
        check_radius("thumb_radius", thumb_radius)?;
        self.apply_radii(track_radius, thumb_radius);
        Ok(())
    }

    /// Set the label size multiplier.
    pub fn set_font_size_gain(&mut self, gain: f32) -> Result<()> {
        if !gain.is_finite() || gain <= 0.0 {
            return Err(SwitchError::invalid(
                "font_size_gain",
                format!("must be a positive number, got {gain}"),
            ));
        }
        self.font_size_gain = gain;
        self.request_redraw();
        Ok(())
    }

    /// Set the track opacity.
    pub fn set_track_opacity(&mut self, opacity: f32) -> Result<()> {
        self.track_opacity = check_opacity("track_opacity", opacity)?;
        self.request_redraw();
        Ok(())
    }

    /// Set the thumb opacity.
    pub fn set_thumb_opacity(&mut self, opacity: f32) -> Result<()> {
        self.thumb_opacity = check_opacity("thumb_opacity", opacity)?;
        self.request_redraw();
        Ok(())
    }

    /// Set the label opacity.
    pub fn set_text_opacity(&mut self, opacity: f32) -> Result<()> {
        self.text_opacity = check_opacity("text_opacity", opacity)?;
        self.request_redraw();
        Ok(())
    }

    /// Set the travel axis. The thumb snaps to its resting place.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.snap_to_rest();
    }

    /// Set the travel axis from a code; unknown codes mean horizontal.
    pub fn set_orientation_str(&mut self, code: &str) {
        self.set_orientation(Orientation::parse(code));
    }

    /// Set the slide duration. Affects slides started afterwards.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation_duration = duration;
    }

    /// Set the slide easing curve. Affects slides started afterwards.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Enable or disable input. A disabled switch still accepts
    /// [`set_checked`](Self::set_checked).
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.pressed = false;
            self.request_redraw();
        }
    }

    // ===== State =====

    /// Register a checked-changed observer.
    ///
    /// Observers run once per effective change, programmatic or interactive,
    /// at the moment the state flips.
    pub fn connect_checked_changed(&mut self, listener: impl FnMut(bool) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set the state from code.
    ///
    /// Any slide in flight is dropped and the thumb snaps to the resting
    /// offset for `checked`. Observers are notified only if the value changed.
    pub fn set_checked(&mut self, checked: bool) {
        let changed = self.checked != checked;
        self.checked = checked;
        self.snap_to_rest();
        if changed {
            log::debug!("switch set to {checked}");
            self.notify(checked);
        }
    }

    /// Flip the state from code, sliding the thumb.
    ///
    /// Works regardless of [`is_enabled`](Self::is_enabled).
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
        log::debug!("switch toggled to {}", self.checked);
        self.notify(self.checked);
        self.start_transition();
    }

    /// Simulate a completed click. Ignored while disabled.
    ///
    /// Returns whether the switch toggled.
    pub fn click(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        self.toggle();
        true
    }

    /// Host resize. A new size snaps the thumb to its resting place; the
    /// same size leaves any slide running.
    pub fn resize(&mut self, size: Size) {
        self.set_bounds(self.bounds.with_size(size));
    }

    /// Advance the slide in flight by `dt`.
    ///
    /// Returns whether the thumb moved, i.e. whether a redraw is due.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(anim) = self.transition.as_mut() else {
            return false;
        };
        anim.update(dt.as_secs_f64());
        let complete = anim.is_complete();
        let value = (if complete { anim.to } else { anim.value() }) as f32;
        log::trace!("slide tick: offset {value} (complete: {complete})");
        self.set_offset(value);
        if complete {
            self.transition = None;
        }
        true
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Paint the switch: track, then thumb, then thumb label.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let size = self.bounds.size();
        let origin = self.bounds.origin();

        let (colors, track_opacity) = if self.enabled {
            (self.colors.for_state(self.checked), self.track_opacity)
        } else {
            (
                StateColors::disabled(&self.ambient),
                self.track_opacity * DISABLED_TRACK_OPACITY,
            )
        };

        canvas.fill_rounded_rect(
            self.metrics.track_rect(size).translate(origin),
            self.metrics.track_radius,
            colors.track.multiply_alpha(track_opacity),
        );

        let center = self.metrics.thumb_center(self.offset, self.orientation, size) + origin;
        let thumb_radius = self.metrics.thumb_radius;
        canvas.fill_circle(
            center,
            thumb_radius,
            colors.thumb.multiply_alpha(self.thumb_opacity),
        );

        let label = self.thumb_text.for_state(self.checked);
        if !label.is_empty() {
            let style = TextStyle {
                size: self.font_size_gain * thumb_radius,
                color: colors.text.multiply_alpha(self.text_opacity),
                weight: FontWeight::Normal,
            };
            canvas.draw_text_centered(label, Rect::centered(center, thumb_radius), &style);
        }
    }

    // ===== Internals =====

    fn apply_radii(&mut self, track_radius: f32, thumb_radius: f32) {
        self.metrics = SwitchMetrics::new(track_radius, thumb_radius);
        let mapping = PaletteMapping::resolve(self.style, &self.metrics);
        self.mapping = mapping;
        self.colors = mapping.apply(self.effective_palette());
        self.snap_to_rest();
    }

    /// Store new bounds. Only a size change moves the resting ends, so only
    /// then is a slide in flight dropped.
    fn set_bounds(&mut self, bounds: Rect) {
        let resized = bounds.size() != self.bounds.size();
        let moved = bounds.origin() != self.bounds.origin();
        self.bounds = bounds;
        if resized {
            self.snap_to_rest();
        } else if moved {
            self.request_redraw();
        }
    }

    /// Drop any slide in flight and place the thumb at its resting offset.
    fn snap_to_rest(&mut self) {
        self.transition = None;
        let rest = self.end_offset(self.checked);
        self.set_offset(rest);
    }

    fn start_transition(&mut self) {
        let from = self.offset;
        let to = self.end_offset(self.checked);
        if self.transition.is_some() {
            log::trace!("replacing in-flight slide at offset {from}");
        }
        if self.animation_duration.is_zero() {
            self.transition = None;
            self.set_offset(to);
            return;
        }
        log::debug!(
            "slide {from} -> {to} over {}ms",
            self.animation_duration.as_millis()
        );
        self.transition = Some(
            EasedValue::new(
                f64::from(from),
                f64::from(to),
                self.animation_duration.as_secs_f64(),
            )
            .with_easing(self.easing),
        );
        self.request_redraw();
    }

    /// The only place the offset changes.
    fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn notify(&mut self, checked: bool) {
        for listener in &mut self.listeners {
            listener(checked);
        }
    }

    fn hit_test(&self, position: Point) -> bool {
        self.bounds.contains_point(&position)
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.request_redraw();
        }
    }
}

fn check_radius(name: &'static str, radius: f32) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(SwitchError::invalid(
            name,
            format!("must be a positive number, got {radius}"),
        ))
    }
}

fn check_opacity(name: &'static str, opacity: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(SwitchError::invalid(
            name,
            format!("must be within [0, 1], got {opacity}"),
        ))
    }
}

impl Widget for SlideSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.preferred_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.set_bounds(bounds);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.render(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseEnter => self.set_hovered(true),
            Event::MouseLeave => self.set_hovered(false),
            Event::MouseMove { position } => self.set_hovered(self.hit_test(*position)),
            Event::FocusIn => self.focused = true,
            Event::FocusOut => {
                self.focused = false;
                self.pressed = false;
            }
            Event::Resize { width, height } => self.resize(Size::new(*width, *height)),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.pressed = self.enabled && self.hit_test(*position);
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let completed = std::mem::take(&mut self.pressed) && self.hit_test(*position);
                if completed && self.click() {
                    return Some(Box::new(CheckedChanged {
                        checked: self.checked,
                    }));
                }
            }
            Event::KeyUp { key: Key::Space } if self.focused => {
                if self.click() {
                    return Some(Box::new(CheckedChanged {
                        checked: self.checked,
                    }));
                }
            }
            _ => {}
        }
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn is_interactive(&self) -> bool {
        self.enabled
    }

    fn is_focusable(&self) -> bool {
        self.enabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn cursor(&self) -> CursorIcon {
        if self.enabled && self.hovered {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        }
    }
}
