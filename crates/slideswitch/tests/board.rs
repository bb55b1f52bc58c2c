//! Integration tests for the demo board through the facade crate.

use proptest::prelude::*;
use slideswitch::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn settle(board: &mut SwitchBoard) {
    while board.tick(FRAME) {}
}

#[test]
fn test_demo_starts_all_on_and_at_rest() {
    let board = SwitchBoard::demo();
    for entry in board.entries() {
        assert!(entry.switch.is_checked());
        assert!(!entry.switch.is_animating());
        assert_eq!(entry.switch.offset(), entry.switch.end_offset(true));
    }
}

#[test]
fn test_all_off_snaps_without_animation() {
    let mut board = SwitchBoard::demo();
    board.all_off();
    assert!(!board.tick(FRAME));
    for entry in board.entries() {
        assert_eq!(entry.switch.offset(), entry.switch.end_offset(false));
    }
}

#[test]
fn test_render_is_json_serializable() {
    let board = SwitchBoard::demo();
    let mut canvas = RecordingCanvas::new();
    board.render(&mut canvas);

    // Track, thumb, label per switch plus thumb text on the last two.
    assert_eq!(canvas.command_count(), 4 * 3 + 2);
    let json = serde_json::to_string(canvas.commands()).expect("serializes");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back.len(), canvas.command_count());
}

#[test]
fn test_configured_switch_joins_board() {
    let mut board = SwitchBoard::demo();
    let config = SlideSwitchConfig::from_yaml("style: simplified\nchecked: true\n").expect("parses");
    let index = board.push(
        SlideSwitch::from_config(&config).expect("valid"),
        "Configured",
    );
    assert_eq!(index, 4);
    assert!(board.entries()[4].is_label_enabled());

    board.click(4);
    settle(&mut board);
    assert!(!board.entries()[4].is_label_enabled());
    assert!(!board.entries()[4].switch.is_checked());
}

proptest! {
    #[test]
    fn prop_labels_track_switches(clicks in proptest::collection::vec(0usize..4, 0..20)) {
        let mut board = SwitchBoard::demo();
        for index in clicks {
            board.click(index);
            board.tick(FRAME);
        }
        settle(&mut board);
        for entry in board.entries() {
            prop_assert_eq!(entry.is_label_enabled(), entry.switch.is_checked());
            prop_assert_eq!(entry.switch.offset(), entry.switch.end_offset(entry.switch.is_checked()));
        }
    }
}

#[test]
fn test_shipped_board_file() {
    let config = BoardConfig::from_yaml(include_str!("../../../demos/board.yaml")).expect("parses");
    let mut board = SwitchBoard::from_config(&config).expect("valid board");
    assert_eq!(board.len(), 4);
    assert_eq!(
        board.entries()[2].switch.get_orientation(),
        Orientation::Vertical
    );

    // Disabled row ignores clicks but keeps its configured state.
    assert!(!board.click(3));
    assert!(board.entries()[3].switch.is_checked());
    assert!(board.entries()[3].is_label_enabled());
}
