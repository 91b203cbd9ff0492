mod common;

use gaze_core::{
    CursorPosition, FrameSkip, GazeConfig, GazeController, GazeDirection, SelectionDisplay,
    SelectionState, TargetId,
};

use common::fixtures::{look_down, look_left, look_right, FaceBuilder};

fn controller() -> GazeController {
    GazeController::new(&GazeConfig::default()).expect("default config")
}

/// Large steps so the cursor reaches a target within a couple of frames.
fn fast_controller(step: i32) -> GazeController {
    GazeController::new(&GazeConfig {
        cursor_step: step,
        ..GazeConfig::default()
    })
    .expect("fast config")
}

#[test]
fn three_right_steps_from_centre() {
    let mut ctl = controller();
    let face = look_right().frame();

    let mut last = None;
    for (i, t) in [0.0, 0.033, 0.066].into_iter().enumerate() {
        let out = ctl.process(Some(&face), t);
        assert_eq!(out.cursor, CursorPosition { x: 325 + 5 * i as i32, y: 240 });
        last = Some(out);
    }

    let last = last.expect("three frames processed");
    assert_eq!(last.cursor, CursorPosition { x: 335, y: 240 });
    assert_eq!(last.horizontal_label, Some("Look Right"));
    assert_eq!(last.vertical_label, Some("Look Center"));
    assert_eq!(last.hit, None);
    assert_eq!(last.selection, SelectionState::Idle);
}

#[test]
fn first_frame_reports_zero_fps() {
    let mut ctl = controller();
    let first = ctl.process(Some(&FaceBuilder::new().frame()), 12.0);
    assert_eq!(first.fps, 0.0);

    let second = ctl.process(Some(&FaceBuilder::new().frame()), 12.25);
    assert!((second.fps - 4.0).abs() < 1e-9);
}

#[test]
fn right_eye_wins_when_it_moved_further() {
    let mut ctl = controller();
    // Left eye says "left" weakly, right eye says "right" strongly.
    let face = FaceBuilder::new()
        .left_offset(0.02, 0.0)
        .right_offset(-0.05, 0.0)
        .frame();

    let out = ctl.process(Some(&face), 0.0);
    let decision = out.decision.expect("face frame carries a decision");
    assert_eq!(decision.horizontal, GazeDirection::Right);
    assert_eq!(out.cursor, CursorPosition { x: 325, y: 240 });
}

#[test]
fn same_image_shift_reads_the_same_whichever_eye_dominates() {
    // Both irises move +x in the image, with either eye moving further or both equal.
    for (left, right) in [(0.03, 0.02), (0.02, 0.03), (0.02, 0.02)] {
        let mut ctl = controller();
        let face = FaceBuilder::new()
            .left_offset(left, 0.0)
            .right_offset(right, 0.0)
            .frame();

        let out = ctl.process(Some(&face), 0.0);
        assert_eq!(out.horizontal_label, Some("Look Left"), "{left}/{right}");
        assert_eq!(out.cursor, CursorPosition { x: 315, y: 240 }, "{left}/{right}");
    }

    let mut ctl = controller();
    let face = FaceBuilder::new()
        .left_offset(0.0, -0.02)
        .right_offset(0.0, -0.03)
        .frame();
    let out = ctl.process(Some(&face), 0.0);
    assert_eq!(out.vertical_label, Some("Look Down"));
    assert_eq!(out.cursor, CursorPosition { x: 320, y: 245 });
}

/// Parks the cursor on the left target at (120, 240) without selecting.
fn park_on_left(ctl: &mut GazeController, timestamp: f64) {
    let out = ctl.process(Some(&look_left().frame()), timestamp);
    assert_eq!(out.cursor, CursorPosition { x: 120, y: 240 });
    assert_eq!(out.selection, SelectionState::Idle);
}

#[test]
fn blink_inside_left_region_selects_it() {
    let mut ctl = fast_controller(100);

    let out = ctl.process(Some(&look_left().frame()), 1.0);
    assert_eq!(out.cursor, CursorPosition { x: 220, y: 240 });
    assert_eq!(out.hit, None);

    // Moving onto the target with the eyes closing does not select yet.
    let out = ctl.process(Some(&look_left().blink().frame()), 1.5);
    assert_eq!(out.cursor, CursorPosition { x: 120, y: 240 });
    assert!(out.blink);
    assert_eq!(out.hit, None);
    assert_eq!(out.selection, SelectionState::Idle);

    let out = ctl.process(Some(&FaceBuilder::new().blink().frame()), 2.0);
    assert_eq!(out.cursor, CursorPosition { x: 120, y: 240 });
    assert_eq!(out.hit, Some(TargetId::Left));
    assert_eq!(
        out.selection,
        SelectionState::JustSelected {
            since: 2.0,
            target: TargetId::Left,
        }
    );
    assert_eq!(out.display, SelectionDisplay::Banner);
}

#[test]
fn blink_is_confirmed_where_the_cursor_rested() {
    let mut ctl = fast_controller(200);
    park_on_left(&mut ctl, 0.0);

    // Eye metrics drift right while the lids close; the cursor leaves the target.
    let out = ctl.process(Some(&look_right().blink().frame()), 0.1);
    assert!(out.blink);
    assert_eq!(out.cursor, CursorPosition { x: 320, y: 240 });
    assert_eq!(out.hit, Some(TargetId::Left));
    assert_eq!(
        out.selection,
        SelectionState::JustSelected {
            since: 0.1,
            target: TargetId::Left,
        }
    );
}

#[test]
fn blink_outside_any_region_is_ignored() {
    let mut ctl = controller();
    let out = ctl.process(Some(&FaceBuilder::new().blink().frame()), 0.0);
    assert!(out.blink);
    assert_eq!(out.hit, None);
    assert_eq!(out.selection, SelectionState::Idle);
    assert_eq!(out.display, SelectionDisplay::Hidden);
}

#[test]
fn one_closed_eye_counts_as_blink() {
    let mut ctl = controller();
    let out = ctl.process(Some(&FaceBuilder::new().left_aperture(0.0).frame()), 0.0);
    assert!(out.blink);
}

#[test]
fn selection_persists_strictly_after_the_window() {
    let mut ctl = fast_controller(240);
    // Down target spans y 430..=475 on a 480-high screen; one step overshoots it.
    let moved = ctl.process(Some(&look_down().frame()), 0.0);
    assert_eq!(moved.cursor, CursorPosition { x: 320, y: 480 });
    let blink = ctl.process(Some(&FaceBuilder::new().blink().frame()), 0.5);
    assert_eq!(blink.hit, None);

    let mut ctl = fast_controller(200);
    let moved = ctl.process(Some(&look_down().frame()), 0.0);
    assert_eq!(moved.cursor, CursorPosition { x: 320, y: 440 });

    let select = ctl.process(Some(&FaceBuilder::new().blink().frame()), 1.0);
    assert_eq!(select.hit, Some(TargetId::Down));
    assert_eq!(
        select.selection,
        SelectionState::JustSelected {
            since: 1.0,
            target: TargetId::Down,
        }
    );

    let open = FaceBuilder::new().frame();
    let at_window = ctl.process(Some(&open), 3.0);
    assert!(matches!(at_window.selection, SelectionState::JustSelected { .. }));
    assert_eq!(at_window.display, SelectionDisplay::Banner);

    let after = ctl.process(Some(&open), 3.001);
    assert_eq!(
        after.selection,
        SelectionState::PersistentlySelected {
            target: TargetId::Down,
        }
    );
    assert_eq!(after.display, SelectionDisplay::CornerIndicator);
    assert_eq!(after.display.text(), Some("MODE: SELECTED"));
}

#[test]
fn blink_while_persistent_retriggers() {
    let mut ctl = fast_controller(200);
    park_on_left(&mut ctl, 0.0);
    ctl.process(Some(&FaceBuilder::new().blink().frame()), 0.5);
    assert_eq!(ctl.selection().target(), Some(TargetId::Left));

    ctl.process(Some(&FaceBuilder::new().frame()), 3.0);
    assert_eq!(
        ctl.selection(),
        SelectionState::PersistentlySelected {
            target: TargetId::Left,
        }
    );

    let out = ctl.process(Some(&FaceBuilder::new().blink().frame()), 4.0);
    assert_eq!(out.hit, Some(TargetId::Left));
    assert_eq!(
        out.selection,
        SelectionState::JustSelected {
            since: 4.0,
            target: TargetId::Left,
        }
    );
}

#[test]
fn missing_face_holds_cursor_but_runs_selection_timer() {
    let mut ctl = fast_controller(200);
    park_on_left(&mut ctl, 0.0);
    ctl.process(Some(&FaceBuilder::new().blink().frame()), 0.1);
    let cursor = ctl.cursor();

    let lost = ctl.process(None, 2.5);
    assert_eq!(lost.skip, Some(FrameSkip::NoFaceDetected));
    assert_eq!(lost.cursor, cursor);
    assert!(lost.horizontal_label.is_none());
    assert!(!lost.blink);
    assert_eq!(
        lost.selection,
        SelectionState::PersistentlySelected {
            target: TargetId::Left,
        }
    );
}

#[test]
fn targets_follow_screen_geometry() {
    let ctl = controller();
    let targets = ctl.targets();

    let left = targets.get(TargetId::Left);
    assert_eq!((left.origin_x, left.origin_y), (0, 205));
    let right = targets.get(TargetId::Right);
    assert_eq!((right.origin_x, right.origin_y), (520, 205));
    let up = targets.get(TargetId::Up);
    assert_eq!((up.origin_x, up.origin_y), (260, 0));
    let down = targets.get(TargetId::Down);
    assert_eq!((down.origin_x, down.origin_y), (260, 430));
}

#[test]
fn frame_output_serializes_for_presentation() {
    let mut ctl = fast_controller(200);
    park_on_left(&mut ctl, 0.4);
    let out = ctl.process(Some(&FaceBuilder::new().blink().frame()), 0.5);
    let json = serde_json::to_value(&out).expect("serialize output");

    assert_eq!(json["cursor"]["x"], 120);
    assert_eq!(json["selection"]["state"], "justSelected");
    assert_eq!(json["selection"]["target"], "left");
    assert_eq!(json["hit"], "left");
    assert_eq!(json["horizontalLabel"], "Look Center");
    assert!(json.get("skip").is_none());
    assert!(json.get("eyes").is_none());

    let lost = serde_json::to_value(ctl.process(None, 0.6)).expect("serialize skip");
    assert_eq!(lost["skip"]["reason"], "noFaceDetected");
    assert!(lost["horizontalLabel"].is_null());
}
