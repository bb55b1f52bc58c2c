//! Draw commands.
//!
//! All painting reduces to these primitives, which a backend replays.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Box style for rectangles and circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { fill: Some(color) }
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Top-left position, or the top-left of `center_in` when centered
        position: Point,
        /// Box to center the text in, if any
        center_in: Option<Rect>,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle with uniform corner radius.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create text centered in a box.
    #[must_use]
    pub fn centered_text(content: impl Into<String>, bounds: Rect, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position: bounds.origin(),
            center_in: Some(bounds),
            style,
        }
    }

    /// Fill color of a shape, or the text color of a text command.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::Rect { style, .. } | Self::Circle { style, .. } => style.fill,
            Self::Text { style, .. } => Some(style.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_uniform_radius() {
        let cmd = DrawCommand::rounded_rect(Rect::new(4.0, 4.0, 40.0, 20.0), 10.0, Color::BLACK);
        match cmd {
            DrawCommand::Rect { radius, .. } => {
                assert!(radius.is_uniform());
                assert_eq!(radius.top_left, 10.0);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_centered_text_keeps_box() {
        let bounds = Rect::new(72.0, 0.0, 28.0, 28.0);
        let cmd = DrawCommand::centered_text("On", bounds, TextStyle::default());
        match cmd {
            DrawCommand::Text {
                content,
                position,
                center_in,
                ..
            } => {
                assert_eq!(content, "On");
                assert_eq!(position, bounds.origin());
                assert_eq!(center_in, Some(bounds));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_command_color() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(
            DrawCommand::filled_circle(Point::ORIGIN, 1.0, red).color(),
            Some(red)
        );
        let style = TextStyle {
            color: red,
            ..TextStyle::default()
        };
        assert_eq!(
            DrawCommand::centered_text("x", Rect::default(), style).color(),
            Some(red)
        );
    }

    #[test]
    fn test_draw_command_serializes() {
        let cmd = DrawCommand::filled_circle(Point::new(14.0, 14.0), 14.0, Color::WHITE);
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}
