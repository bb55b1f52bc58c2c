//! End-to-end behavior of the slide switch through its public API.

use slideswitch_core::{
    Color, Constraints, DrawCommand, Event, MouseButton, Palette, PaletteRole, Point,
    RecordingCanvas, Rect, Size, Widget,
};
use slideswitch_widgets::{
    CheckedChanged, Orientation, SlideSwitch, SlideSwitchConfig, SwitchError, SwitchState,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn count_changes(switch: &mut SlideSwitch) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    switch.connect_checked_changed(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    count
}

fn run_frames(switch: &mut SlideSwitch, frames: usize) -> usize {
    let mut redraws = 0;
    for _ in 0..frames {
        if switch.tick(Duration::from_millis(16)) {
            redraws += 1;
        }
    }
    redraws
}

#[test]
fn test_host_layout_then_programmatic_check() {
    let mut switch = SlideSwitch::new().thumb_text("On", "Off");
    let changes = count_changes(&mut switch);

    let size = switch.measure(Constraints::tight(Size::new(100.0, 40.0)));
    switch.layout(Rect::from_size(size));
    assert_eq!(switch.offset(), 14.0);

    switch.set_palette(
        Palette::ambient()
            .with_role(PaletteRole::Highlight, Color::from_rgb8(0, 136, 0))
            .with_role(PaletteRole::Shadow, Color::from_rgb8(128, 0, 0)),
    );
    switch.set_checked(true);

    assert_eq!(switch.offset(), 86.0);
    assert_eq!(changes.load(Ordering::SeqCst), 1);
    assert_eq!(switch.state(), SwitchState::Checked);
}

#[test]
fn test_click_slides_over_several_frames() {
    let mut switch = SlideSwitch::new();
    switch.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
    let position = Point::new(50.0, 20.0);

    switch.event(&Event::MouseDown {
        position,
        button: MouseButton::Left,
    });
    let msg = switch.event(&Event::MouseUp {
        position,
        button: MouseButton::Left,
    });
    let msg = msg.and_then(|m| m.downcast::<CheckedChanged>().ok());
    assert_eq!(msg.map(|m| m.checked), Some(true));

    let redraws = run_frames(&mut switch, 20);
    // 120ms at 16ms per frame
    assert_eq!(redraws, 8);
    assert_eq!(switch.offset(), 86.0);
    assert!(!switch.is_animating());
}

#[test]
fn test_thumb_moves_monotonically() {
    let mut switch = SlideSwitch::new();
    switch.resize(Size::new(100.0, 40.0));
    switch.click();

    let mut last = switch.offset();
    while switch.is_animating() {
        switch.tick(Duration::from_millis(5));
        assert!(switch.offset() >= last);
        last = switch.offset();
    }
    assert_eq!(last, 86.0);
}

#[test]
fn test_vertical_switch_travels_upwards() {
    let mut switch = SlideSwitch::new().orientation(Orientation::Vertical);
    switch.resize(Size::new(40.0, 100.0));
    assert_eq!(switch.offset(), 86.0);

    switch.click();
    run_frames(&mut switch, 20);
    assert_eq!(switch.offset(), 14.0);

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    assert!(matches!(
        &canvas.commands()[1],
        DrawCommand::Circle { center, .. } if *center == Point::new(20.0, 14.0)
    ));
}

#[test]
fn test_disabled_switch_ignores_pointer_but_accepts_code() {
    let mut switch = SlideSwitch::new().enabled(false);
    switch.resize(Size::new(100.0, 40.0));
    let changes = count_changes(&mut switch);

    assert!(!switch.click());
    assert_eq!(changes.load(Ordering::SeqCst), 0);

    switch.set_checked(true);
    assert!(switch.is_checked());
    assert_eq!(changes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_config_document_to_rendered_switch() {
    let config = SlideSwitchConfig::from_json(
        r##"{
            "thumb_text_true": "On",
            "thumb_text_false": "Off",
            "color_palette": {
                "highlight": "#7b68ee",
                "shadow": "#c8c8c8",
                "highlighted_text": "#ffff00",
                "text": "#ffffff"
            },
            "checked": true
        }"##,
    )
    .expect("valid config");
    let switch = SlideSwitch::from_config(&config).expect("valid switch");

    let mut canvas = RecordingCanvas::new();
    switch.render(&mut canvas);
    let label = canvas
        .commands()
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::Text { content, style, .. } => Some((content.clone(), style.color)),
            _ => None,
        })
        .expect("label drawn");
    assert_eq!(label.0, "On");
    assert_eq!(label.1, Color::from_rgb8(255, 255, 0));
}

#[test]
fn test_config_with_scalar_palette_is_invalid_argument() {
    let config = SlideSwitchConfig::from_yaml("color_palette: 3\n").expect("parses");
    let err = SlideSwitch::from_config(&config).unwrap_err();
    assert!(matches!(err, SwitchError::InvalidArgument { .. }));
    assert!(err.to_string().contains("color_palette"));
}

#[test]
fn test_config_with_unknown_orientation_is_horizontal() {
    let config = SlideSwitchConfig::from_yaml("orientation: x\n").expect("parses");
    let switch = SlideSwitch::from_config(&config).expect("valid switch");
    assert_eq!(switch.get_orientation(), Orientation::Horizontal);
}
