use super::*;
use crate::draw::{BLACK, Point, RED, WHITE};
use crate::input::{PointerEvent, TrimPolicy};

const INK: [u8; 4] = [255, 0, 0, 0];
const PAPER: [u8; 4] = [255, 255, 255, 255];

fn create_test_whiteboard(width: i32, height: i32) -> Whiteboard {
    Whiteboard::new(WhiteboardOptions {
        width,
        height,
        board_fill: WHITE,
        ..WhiteboardOptions::default()
    })
    .unwrap()
}

fn board_argb(board: &mut Whiteboard, x: i32, y: i32) -> [u8; 4] {
    board
        .compositor_mut()
        .board_pixels()
        .unwrap()
        .argb(x, y)
        .unwrap()
}

fn ghost_is_clear(board: &mut Whiteboard) -> bool {
    board.compositor_mut().ghost_pixels().unwrap().is_clear()
}

#[test]
fn test_initial_state_is_idle_and_empty() {
    let mut board = create_test_whiteboard(64, 64);
    assert_eq!(board.state(), StrokeState::Idle);
    assert!(board.buffer().is_empty());
    assert_eq!(board.last_pointer(), None);
    assert_eq!(board.brush().color, BLACK);
    assert!(ghost_is_clear(&mut board));
}

#[test]
fn test_move_while_idle_is_ignored() {
    let mut board = create_test_whiteboard(64, 64);
    board.on_pointer_move(10.0, 10.0);
    board.on_pointer_move(20.0, 20.0);

    assert_eq!(board.state(), StrokeState::Idle);
    assert!(board.buffer().is_empty());
    assert_eq!(board.last_pointer(), None);
    assert!(ghost_is_clear(&mut board));
    assert_eq!(board.compositor().flush_count(), 0);
}

#[test]
fn test_press_resets_buffer_to_one_point() {
    let mut board = create_test_whiteboard(64, 64);
    board.on_pointer_press(5.0, 6.0);
    for i in 0..5 {
        board.on_pointer_move(10.0 + i as f64, 10.0);
    }
    assert_eq!(board.buffer().len(), 6);

    board.on_pointer_release();
    board.on_pointer_press(30.0, 31.0);

    assert_eq!(board.state(), StrokeState::Active);
    assert_eq!(board.buffer().points(), &[Point::new(30.0, 31.0)]);
    assert_eq!(board.last_pointer(), Some(Point::new(30.0, 31.0)));
}

#[test]
fn test_stroke_commits_to_board_on_release() {
    // press (10,10) → (20,10) → (30,10) → release
    let mut board = create_test_whiteboard(64, 32);
    board.handle_event(PointerEvent::Press { x: 10.0, y: 10.0 });
    board.handle_event(PointerEvent::Move { x: 20.0, y: 10.0 });
    board.handle_event(PointerEvent::Move { x: 30.0, y: 10.0 });
    board.handle_event(PointerEvent::Release);

    assert_eq!(board.state(), StrokeState::Idle);
    assert!(board.buffer().is_empty());
    assert!(ghost_is_clear(&mut board));
    assert_eq!(board.compositor().flush_count(), 1);

    for x in [12, 20, 28] {
        assert_eq!(board_argb(&mut board, x, 10), INK, "missing ink at x={x}");
    }
    assert_eq!(board_argb(&mut board, 40, 10), PAPER);
    assert_eq!(board_argb(&mut board, 20, 20), PAPER);
    assert_eq!(board_argb(&mut board, 5, 10), PAPER);
}

#[test]
fn test_release_clears_ghost_even_without_ink() {
    let mut board = create_test_whiteboard(32, 32);
    board.on_pointer_press(5.0, 5.0);
    board.on_pointer_move(6.0, 5.0);
    assert!(!ghost_is_clear(&mut board));

    board.on_pointer_release();
    assert!(ghost_is_clear(&mut board));
}

#[test]
fn test_release_while_idle_does_nothing() {
    let mut board = create_test_whiteboard(32, 32);
    board.on_pointer_release();
    assert_eq!(board.compositor().flush_count(), 0);
    assert_eq!(board.state(), StrokeState::Idle);
}

#[test]
fn test_long_stroke_flattens_and_trims() {
    // 150 moves with strictly increasing x
    let mut board = create_test_whiteboard(400, 100);
    board.on_pointer_press(1.0, 50.0);

    for i in 1..=150usize {
        board.on_pointer_move(1.0 + i as f64, 50.0);
        let len = board.buffer().len();
        assert!(len <= 100, "buffer grew to {len} after move {i}");

        if i < 100 {
            assert_eq!(len, i + 1);
            assert_eq!(board.compositor().flush_count(), 0);
        } else if i == 100 {
            assert_eq!(len, 10);
            assert_eq!(board.compositor().flush_count(), 1);
            let expected: Vec<Point> = (92..=101).map(|x| Point::new(x as f64, 50.0)).collect();
            assert_eq!(board.buffer().points(), expected.as_slice());
        } else {
            assert_eq!(len, 10 + (i - 100));
            assert_eq!(board.compositor().flush_count(), 1);
        }
    }

    // The flattened part is already durable while the stroke is still active.
    assert_eq!(board.state(), StrokeState::Active);
    assert_eq!(board_argb(&mut board, 50, 50), INK);
    assert!(!ghost_is_clear(&mut board));

    board.on_pointer_release();
    assert_eq!(board.compositor().flush_count(), 2);
    assert_eq!(board_argb(&mut board, 140, 50), INK);
}

#[test]
fn test_custom_trim_policy_is_respected() {
    let mut board = Whiteboard::new(WhiteboardOptions {
        width: 200,
        height: 50,
        trim: TrimPolicy {
            threshold: 20,
            keep: 5,
        },
        ..WhiteboardOptions::default()
    })
    .unwrap();

    board.on_pointer_press(0.0, 10.0);
    for i in 1..=20 {
        board.on_pointer_move(i as f64, 10.0);
    }
    assert_eq!(board.buffer().len(), 5);
    assert_eq!(board.buffer().last(), Some(Point::new(20.0, 10.0)));
    assert_eq!(board.compositor().flush_count(), 1);
}

#[test]
fn test_inconsistent_trim_policy_still_bounds_buffer() {
    let mut board = Whiteboard::new(WhiteboardOptions {
        width: 200,
        height: 50,
        trim: TrimPolicy {
            threshold: 20,
            keep: 50,
        },
        ..WhiteboardOptions::default()
    })
    .unwrap();
    assert_eq!(board.buffer().policy().keep, 19);

    board.on_pointer_press(0.0, 10.0);
    for i in 1..=60 {
        board.on_pointer_move(i as f64, 10.0);
        assert!(board.buffer().len() <= 20, "buffer grew past threshold at move {i}");
    }
    assert_eq!(board.buffer().last(), Some(Point::new(60.0, 10.0)));
    assert!(board.compositor().flush_count() < 40);
}

#[test]
fn test_oversized_trim_threshold_is_capped() {
    let board = Whiteboard::new(WhiteboardOptions {
        width: 16,
        height: 16,
        trim: TrimPolicy {
            threshold: usize::MAX,
            keep: usize::MAX,
        },
        ..WhiteboardOptions::default()
    })
    .unwrap();

    let policy = board.buffer().policy();
    assert_eq!(policy.threshold, 100_000);
    assert_eq!(policy.keep, 99_999);
}

#[test]
fn test_brush_size_setter_validates_input() {
    let mut board = create_test_whiteboard(32, 32);
    let before = board.brush().width;

    assert!(board.set_brush_size("abc").is_err());
    assert_eq!(board.brush().width, before);

    assert!(board.set_brush_size(5).is_ok());
    assert_eq!(board.brush().width, 5.0);

    assert!(board.set_brush_size("12").is_ok());
    assert_eq!(board.brush().width, 12.0);
}

#[test]
fn test_color_and_cap_setters_reject_wrong_types() {
    let mut board = create_test_whiteboard(32, 32);
    assert!(board.set_brush_color(42).is_err());
    assert!(board.set_line_cap(1).is_err());
    assert!(board.set_line_join("pointy").is_err());
    assert_eq!(board.brush().color, BLACK);

    board.set_brush_color("red").unwrap();
    board.set_line_cap("butt").unwrap();
    assert_eq!(board.brush().color, RED);
    assert_eq!(board.brush().cap, crate::draw::LineCap::Butt);
}

#[test]
fn test_click_draws_dot_on_ghost_only() {
    let mut board = create_test_whiteboard(100, 100);
    board.set_brush_size(10).unwrap();
    board.handle_event(PointerEvent::Click { x: 20.0, y: 20.0 });

    assert_eq!(board.state(), StrokeState::Idle);
    assert!(board.buffer().is_empty());

    let ghost = board.compositor_mut().ghost_pixels().unwrap();
    assert_eq!(ghost.alpha(20, 20), 255);
    assert_eq!(ghost.alpha(22, 20), 255);
    assert_eq!(ghost.alpha(20, 17), 255);
    assert_eq!(ghost.alpha(27, 20), 0);
    assert_eq!(ghost.alpha(20, 27), 0);
    assert_eq!(board_argb(&mut board, 20, 20), PAPER);

    // An unrelated stroke elsewhere never carries the dot onto the board.
    board.on_pointer_press(60.0, 60.0);
    board.on_pointer_move(70.0, 60.0);
    board.on_pointer_move(80.0, 60.0);
    board.on_pointer_release();

    assert_eq!(board_argb(&mut board, 20, 20), PAPER);
    assert_eq!(board_argb(&mut board, 70, 60), INK);
    assert!(ghost_is_clear(&mut board));
}

#[test]
fn test_tap_dot_is_not_committed_by_a_following_tap() {
    let mut board = create_test_whiteboard(100, 100);
    board.set_brush_size(8).unwrap();

    // press + release without a move is a tap
    board.on_pointer_press(20.0, 20.0);
    board.on_pointer_release();
    assert_eq!(board.state(), StrokeState::Idle);
    assert!(board.buffer().is_empty());
    assert_eq!(board.compositor().flush_count(), 0);
    assert_eq!(
        board.compositor_mut().ghost_pixels().unwrap().alpha(20, 20),
        255
    );

    board.on_pointer_press(70.0, 70.0);
    board.on_pointer_release();

    let ghost = board.compositor_mut().ghost_pixels().unwrap();
    assert_eq!(ghost.alpha(20, 20), 0);
    assert_eq!(ghost.alpha(70, 70), 255);
    assert_eq!(board_argb(&mut board, 20, 20), PAPER);
    assert_eq!(board_argb(&mut board, 70, 70), PAPER);
    assert_eq!(board.compositor().flush_count(), 0);
}

#[test]
fn test_click_during_stroke_is_ignored() {
    let mut board = create_test_whiteboard(64, 64);
    board.on_pointer_press(10.0, 10.0);
    board.on_pointer_move(12.0, 10.0);
    board.on_click(40.0, 40.0);

    assert_eq!(board.state(), StrokeState::Active);
    assert_eq!(board.buffer().len(), 2);
    assert_eq!(board.last_pointer(), Some(Point::new(12.0, 10.0)));
}

#[test]
fn test_second_press_restarts_stroke() {
    let mut board = create_test_whiteboard(64, 64);
    board.on_pointer_press(5.0, 30.0);
    board.on_pointer_move(15.0, 30.0);
    board.on_pointer_move(25.0, 30.0);

    board.on_pointer_press(50.0, 50.0);

    assert_eq!(board.state(), StrokeState::Active);
    assert_eq!(board.buffer().points(), &[Point::new(50.0, 50.0)]);
    assert_eq!(board.compositor().flush_count(), 1);
    assert_eq!(board_argb(&mut board, 15, 30), INK);
    assert!(ghost_is_clear(&mut board));
}

#[test]
fn test_redraw_is_idempotent() {
    let mut board = create_test_whiteboard(80, 80);
    board.on_pointer_press(10.0, 10.0);
    for (x, y) in [(20.0, 25.0), (35.0, 30.0), (50.0, 22.0), (60.0, 40.0)] {
        board.on_pointer_move(x, y);
    }

    let first = board.compositor_mut().ghost_pixels().unwrap();
    board.redraw_ghost();
    let second = board.compositor_mut().ghost_pixels().unwrap();

    assert!(!first.is_clear());
    assert_eq!(first, second);
}

#[test]
fn test_brush_change_applies_on_next_sample() {
    let mut board = create_test_whiteboard(64, 32);
    board.on_pointer_press(5.0, 10.0);
    board.on_pointer_move(15.0, 10.0);
    board.on_pointer_move(25.0, 10.0);
    assert_eq!(
        board.compositor_mut().ghost_pixels().unwrap().argb(15, 10),
        Some(INK)
    );

    board.set_brush_color("red").unwrap();
    board.on_pointer_move(35.0, 10.0);

    let ghost = board.compositor_mut().ghost_pixels().unwrap();
    assert_eq!(ghost.argb(15, 10), Some([255, 255, 0, 0]));
}

#[test]
fn test_export_omits_stroke_in_progress() {
    let mut board = create_test_whiteboard(48, 48);
    let blank = board.export_snapshot().unwrap();

    board.on_pointer_press(5.0, 5.0);
    board.on_pointer_move(20.0, 20.0);
    board.on_pointer_move(40.0, 30.0);
    assert_eq!(board.export_snapshot().unwrap(), blank);

    board.on_pointer_release();
    assert_ne!(board.export_snapshot().unwrap(), blank);
    assert!(board
        .export_data_url()
        .unwrap()
        .starts_with("data:image/png;base64,"));
}

#[test]
fn test_samples_are_clamped_and_non_finite_dropped() {
    let mut board = create_test_whiteboard(64, 64);
    board.on_pointer_press(f64::NAN, 3.0);
    assert_eq!(board.state(), StrokeState::Idle);

    board.on_pointer_press(-10.0, 500.0);
    assert_eq!(board.last_pointer(), Some(Point::new(0.0, 64.0)));

    board.on_pointer_move(f64::INFINITY, 1.0);
    assert_eq!(board.buffer().len(), 1);
}

#[test]
fn test_whiteboards_are_independent() {
    let mut left = create_test_whiteboard(32, 32);
    let mut right = create_test_whiteboard(32, 32);

    left.on_pointer_press(1.0, 1.0);
    right.on_pointer_move(5.0, 5.0);

    assert_eq!(left.state(), StrokeState::Active);
    assert_eq!(right.state(), StrokeState::Idle);
    assert!(right.buffer().is_empty());
}
