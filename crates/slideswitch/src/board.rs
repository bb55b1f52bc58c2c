//! A column of labelled switches.
//!
//! The board owns its switches in a plain `Vec`; callers address them by
//! index. Each label greys out while its switch is off.

use serde::{Deserialize, Serialize};
use slideswitch_core::{
    Canvas, Color, FontWeight, Palette, PaletteRole, Point, Rect, TextStyle, Widget,
};
use slideswitch_widgets::{SlideSwitch, SlideSwitchConfig, SwitchError, DEFAULT_ANIMATION_MS};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Vertical gap between rows.
pub const ROW_SPACING: f32 = 12.0;
/// Horizontal gap between a switch and its label.
pub const LABEL_GAP: f32 = 16.0;
/// Label font size.
pub const LABEL_SIZE: f32 = 14.0;
/// Slide duration for the demo's secondary rows, twice the default.
pub const SECONDARY_ANIMATION: Duration = Duration::from_millis(2 * DEFAULT_ANIMATION_MS);

/// A board described as data.
///
/// ```yaml
/// switches:
///   - label: Wi-Fi
///     switch:
///       checked: true
///       color_palette:
///         highlight: '#008800'
///   - label: Bluetooth
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Rows, top to bottom
    pub switches: Vec<BoardRowConfig>,
}

/// One row of a [`BoardConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardRowConfig {
    /// Label text
    pub label: String,
    /// Switch settings; omitted fields take their defaults
    #[serde(default)]
    pub switch: SlideSwitchConfig,
}

impl BoardConfig {
    /// Parse a YAML board document.
    pub fn from_yaml(source: &str) -> Result<Self, SwitchError> {
        serde_yaml_ng::from_str(source).map_err(|e| SwitchError::Config(e.to_string()))
    }
}

/// One row of the board.
#[derive(Debug)]
pub struct BoardEntry {
    /// The switch
    pub switch: SlideSwitch,
    /// Text drawn to the right of the switch
    pub label: String,
    /// Tracks the switch through its checked-changed notification
    label_enabled: Arc<AtomicBool>,
    /// Palette restored by [`SwitchBoard::default_colors`]; `None` is ambient
    default_palette: Option<Palette>,
}

impl BoardEntry {
    /// Whether the label is drawn enabled.
    #[must_use]
    pub fn is_label_enabled(&self) -> bool {
        self.label_enabled.load(Ordering::SeqCst)
    }

    /// Palette restored by [`SwitchBoard::default_colors`].
    #[must_use]
    pub const fn default_palette(&self) -> Option<&Palette> {
        self.default_palette.as_ref()
    }
}

/// Host shell for a set of switches.
#[derive(Debug, Default)]
pub struct SwitchBoard {
    entries: Vec<BoardEntry>,
    /// Palette used for the labels
    palette: Palette,
    /// Top edge of the next row
    next_row: f32,
}

impl SwitchBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-switch demonstration board, all switched on.
    #[must_use]
    pub fn demo() -> Self {
        let mut board = Self::new();

        let red_green = Palette::ambient()
            .with_role(PaletteRole::Highlight, Color::from_rgb8(0, 136, 0))
            .with_role(PaletteRole::Shadow, Color::from_rgb8(128, 0, 0));
        board.push(SlideSwitch::simplified().palette(red_green), "Red / green");

        let black_orange = Palette::ambient()
            .with_role(PaletteRole::Highlight, Color::from_rgb8(255, 140, 0))
            .with_role(PaletteRole::Shadow, Color::BLACK);
        board.push(
            SlideSwitch::simplified()
                .palette(black_orange)
                .animation_duration(SECONDARY_ANIMATION),
            "Black / orange",
        );

        let white_purple = Palette::ambient()
            .with_role(PaletteRole::Highlight, Color::from_rgb8(123, 104, 238))
            .with_role(PaletteRole::Shadow, Color::from_rgb8(200, 200, 200))
            .with_role(PaletteRole::HighlightedText, Color::from_rgb8(255, 255, 0))
            .with_role(PaletteRole::Text, Color::WHITE);
        board.push(
            SlideSwitch::simplified()
                .palette(white_purple)
                .thumb_text("On", "Off"),
            "White / purple",
        );

        board.push(
            SlideSwitch::simplified()
                .thumb_text("\u{2714}", "\u{2715}")
                .animation_duration(SECONDARY_ANIMATION),
            "Default",
        );

        board.all_on();
        board
    }

    /// Build a board from a configuration document.
    ///
    /// Fails on the first row whose switch settings are rejected.
    pub fn from_config(config: &BoardConfig) -> Result<Self, SwitchError> {
        let mut board = Self::new();
        for row in &config.switches {
            board.push(SlideSwitch::from_config(&row.switch)?, row.label.clone());
        }
        log::info!("built board with {} switches", board.len());
        Ok(board)
    }

    /// Append a switch and lay it out on its own row.
    ///
    /// Whatever palette the switch carries now becomes its default.
    pub fn push(&mut self, mut switch: SlideSwitch, label: impl Into<String>) -> usize {
        let label_enabled = Arc::new(AtomicBool::new(switch.is_checked()));
        let sink = Arc::clone(&label_enabled);
        switch.connect_checked_changed(move |checked| sink.store(checked, Ordering::SeqCst));

        let size = switch.preferred_size();
        switch.layout(Rect::new(0.0, self.next_row, size.width, size.height));
        self.next_row += size.height + ROW_SPACING;

        let default_palette = switch.explicit_palette().copied();

        self.entries.push(BoardEntry {
            switch,
            label: label.into(),
            label_enabled,
            default_palette,
        });
        self.entries.len() - 1
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// Mutable access to one switch.
    pub fn switch_mut(&mut self, index: usize) -> Option<&mut SlideSwitch> {
        self.entries.get_mut(index).map(|e| &mut e.switch)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every switch.
    pub fn all_on(&mut self) {
        self.set_all(true);
    }

    /// Uncheck every switch.
    pub fn all_off(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, checked: bool) {
        log::debug!("setting all {} switches to {checked}", self.entries.len());
        for entry in &mut self.entries {
            entry.switch.set_checked(checked);
        }
    }

    /// Restore each switch's palette from when it was pushed.
    pub fn default_colors(&mut self) {
        for entry in &mut self.entries {
            match entry.default_palette {
                Some(palette) => entry.switch.set_palette(palette),
                None => entry.switch.clear_palette(),
            }
        }
    }

    /// Give every switch a fresh highlight and shadow drawn from `next_color`.
    pub fn shuffle_colors(&mut self, next_color: &mut impl FnMut() -> Color) {
        for entry in &mut self.entries {
            let palette = Palette::ambient()
                .with_role(PaletteRole::Highlight, next_color())
                .with_role(PaletteRole::Shadow, next_color());
            log::debug!(
                "{}: highlight {}, shadow {}",
                entry.label,
                palette.highlight.to_hex(),
                palette.shadow.to_hex()
            );
            entry.switch.set_palette(palette);
        }
    }

    /// Simulate a completed click on one switch.
    ///
    /// Returns whether the switch toggled; out-of-range indices and disabled
    /// switches do nothing.
    pub fn click(&mut self, index: usize) -> bool {
        self.switch_mut(index).is_some_and(SlideSwitch::click)
    }

    /// Advance every switch's animation. Returns whether anything moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.entries
            .iter_mut()
            .fold(false, |moved, entry| entry.switch.tick(dt) | moved)
    }

    /// Paint every row: the switch, then its label.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for entry in &self.entries {
            entry.switch.paint(canvas);

            let bounds = entry.switch.bounds();
            let color = if entry.is_label_enabled() {
                self.palette.text
            } else {
                self.palette.dark
            };
            let style = TextStyle {
                size: LABEL_SIZE,
                color,
                weight: FontWeight::Normal,
            };
            let position = Point::new(
                bounds.x + bounds.width + LABEL_GAP,
                bounds.y + (bounds.height - LABEL_SIZE) / 2.0,
            );
            canvas.draw_text(&entry.label, position, &style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slideswitch_core::{DrawCommand, RecordingCanvas};

    fn settle(board: &mut SwitchBoard) {
        for _ in 0..100 {
            if !board.tick(Duration::from_millis(16)) {
                break;
            }
        }
    }

    #[test]
    fn test_demo_board() {
        let board = SwitchBoard::demo();
        assert_eq!(board.len(), 4);
        assert!(board.entries().iter().all(|e| e.switch.is_checked()));
        assert!(board.entries().iter().all(BoardEntry::is_label_enabled));

        let purple = &board.entries()[2].switch;
        assert_eq!(purple.get_thumb_text().on, "On");
        assert_eq!(
            purple.effective_palette().highlight,
            Color::from_rgb8(123, 104, 238)
        );
        assert_eq!(board.entries()[3].switch.get_thumb_text().off, "\u{2715}");
        assert!(board.entries()[3].default_palette().is_none());
    }

    #[test]
    fn test_demo_secondary_rows_slide_slower() {
        let board = SwitchBoard::demo();
        let durations: Vec<_> = board
            .entries()
            .iter()
            .map(|e| e.switch.get_animation_duration())
            .collect();
        let primary = Duration::from_millis(DEFAULT_ANIMATION_MS);
        assert_eq!(durations, vec![primary, 2 * primary, primary, 2 * primary]);
    }

    #[test]
    fn test_secondary_row_still_moving_after_primary_settles() {
        let mut board = SwitchBoard::demo();
        board.click(0);
        board.click(1);
        for _ in 0..8 {
            board.tick(Duration::from_millis(16));
        }
        assert!(!board.entries()[0].switch.is_animating());
        assert!(board.entries()[1].switch.is_animating());
        settle(&mut board);
        assert!(!board.entries()[1].switch.is_animating());
    }

    #[test]
    fn test_board_from_yaml() {
        let config = BoardConfig::from_yaml(
            "switches:\n  - label: Wi-Fi\n    switch:\n      checked: true\n      thumb_text_true: 'I'\n  - label: Bluetooth\n",
        )
        .unwrap();
        let board = SwitchBoard::from_config(&config).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.entries()[0].label, "Wi-Fi");
        assert!(board.entries()[0].is_label_enabled());
        assert_eq!(board.entries()[0].switch.get_thumb_text().on, "I");
        assert!(!board.entries()[1].switch.is_checked());
    }

    #[test]
    fn test_board_from_yaml_rejects_bad_row() {
        let config = BoardConfig::from_yaml(
            "switches:\n  - label: Broken\n    switch:\n      color_palette: [1, 2]\n",
        )
        .unwrap();
        assert!(matches!(
            SwitchBoard::from_config(&config),
            Err(SwitchError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_board_yaml_unknown_key() {
        assert!(matches!(
            BoardConfig::from_yaml("rows: []\n"),
            Err(SwitchError::Config(_))
        ));
    }

    #[test]
    fn test_rows_do_not_overlap() {
        let board = SwitchBoard::demo();
        let rects: Vec<Rect> = board.entries().iter().map(|e| e.switch.bounds()).collect();
        for pair in rects.windows(2) {
            assert!(pair[1].y >= pair[0].y + pair[0].height);
        }
    }

    #[test]
    fn test_all_off_all_on() {
        let mut board = SwitchBoard::demo();
        board.all_off();
        assert!(board.entries().iter().all(|e| !e.switch.is_checked()));
        assert!(board.entries().iter().all(|e| !e.is_label_enabled()));
        assert!(board.entries().iter().all(|e| !e.switch.is_animating()));

        board.all_on();
        assert!(board.entries().iter().all(BoardEntry::is_label_enabled));
    }

    #[test]
    fn test_click_follows_label() {
        let mut board = SwitchBoard::demo();
        assert!(board.click(1));
        assert!(!board.entries()[1].is_label_enabled());
        assert!(board.entries()[0].is_label_enabled());
        settle(&mut board);
        assert!(!board.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_click_out_of_range() {
        let mut board = SwitchBoard::demo();
        assert!(!board.click(9));
    }

    #[test]
    fn test_click_disabled_switch() {
        let mut board = SwitchBoard::new();
        board.push(SlideSwitch::new().enabled(false), "Locked");
        assert!(!board.click(0));
        assert!(!board.entries()[0].is_label_enabled());
    }

    #[test]
    fn test_shuffle_then_default_colors() {
        let mut board = SwitchBoard::demo();
        let mut n = 0u8;
        board.shuffle_colors(&mut || {
            n = n.wrapping_add(40);
            Color::from_rgb8(n, n, n)
        });
        assert_eq!(
            board.entries()[0].switch.effective_palette().highlight,
            Color::from_rgb8(40, 40, 40)
        );
        assert_eq!(
            board.entries()[0].switch.effective_palette().shadow,
            Color::from_rgb8(80, 80, 80)
        );
        assert_eq!(
            board.entries()[3].switch.effective_palette().highlight,
            Color::from_rgb8(24, 24, 24)
        );

        board.default_colors();
        assert_eq!(
            board.entries()[0].switch.effective_palette().highlight,
            Color::from_rgb8(0, 136, 0)
        );
        assert_eq!(
            board.entries()[3].switch.effective_palette(),
            &Palette::ambient()
        );
    }

    #[test]
    fn test_render_labels_after_switches() {
        let mut board = SwitchBoard::demo();
        if let Some(switch) = board.switch_mut(0) {
            switch.set_checked(false);
        }
        let mut canvas = RecordingCanvas::new();
        board.render(&mut canvas);

        let labels: Vec<(&str, Option<Color>)> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    content,
                    center_in: None,
                    ..
                } => Some((content.as_str(), cmd.color())),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], ("Red / green", Some(Palette::ambient().dark)));
        assert_eq!(labels[1], ("Black / orange", Some(Palette::ambient().text)));
    }
}
