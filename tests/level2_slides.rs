//! Level 2: Slide Management Tests
//!
//! Adding, deleting, reordering and navigating slides, with the current
//! slide index following the selected slide.

mod common;

use common::harness::EditorTestHarness;
use slint::Model;
use slint_slide_editor::{Change, SlidePatch, SlideType};

// ============================================================================
// Add / update
// ============================================================================

#[test]
fn test_add_slide_selects_new_slide() {
    let harness = EditorTestHarness::with_slides(&["A", "B"]);

    let id = harness.ctrl.add_slide(&SlidePatch::titled("C")).unwrap();
    assert_eq!(harness.ctrl.current_slide_index(), 2);
    assert_eq!(harness.current_row(), Some(2));
    assert_eq!(harness.slides.iter().nth(2).unwrap().id.as_str(), id);
}

#[test]
fn test_update_slide_merges_fields() {
    let harness = EditorTestHarness::with_slides(&["A"]);
    let id = harness.ctrl.presentation().unwrap().slides[0].id.clone();

    assert!(harness.ctrl.update_slide(
        &id,
        &SlidePatch {
            title: Some("Welcome".into()),
            slide_type: Some(SlideType::Title),
            notes: Some("Smile".into()),
            ..Default::default()
        }
    ));

    let slide = harness.ctrl.presentation().unwrap().slides[0].clone();
    assert_eq!(slide.id, id);
    assert_eq!(slide.title, "Welcome");
    assert_eq!(slide.slide_type, SlideType::Title);
    assert_eq!(slide.notes.as_deref(), Some("Smile"));
    assert_eq!(harness.slide_titles(), vec!["Welcome"]);
}

#[test]
fn test_unknown_slide_update_notifies_nobody() {
    let harness = EditorTestHarness::with_slides(&["A"]);
    assert!(!harness.ctrl.update_slide("ghost", &SlidePatch::titled("X")));
    assert_eq!(harness.tracker.total(), 0);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_deleting_earlier_slide_keeps_current_slide() {
    let harness = EditorTestHarness::with_slides(&["A", "B", "C"]);
    harness.ctrl.select_slide(2);

    let first = harness.ctrl.presentation().unwrap().slides[0].id.clone();
    assert!(harness.ctrl.delete_slide(&first));

    assert_eq!(harness.slide_titles(), vec!["B", "C"]);
    assert_eq!(harness.ctrl.current_slide_index(), 1);
    assert_eq!(harness.current_row(), Some(1));
}

#[test]
fn test_deleting_all_slides_resets_index() {
    let harness = EditorTestHarness::with_slides(&["A", "B"]);
    let ids: Vec<String> = harness
        .ctrl
        .presentation()
        .unwrap()
        .slides
        .iter()
        .map(|s| s.id.clone())
        .collect();
    for id in &ids {
        assert!(harness.ctrl.delete_slide(id));
    }
    assert_eq!(harness.ctrl.slide_count(), 0);
    assert_eq!(harness.ctrl.current_slide_index(), 0);
    assert_eq!(harness.current_row(), None);
}

// ============================================================================
// Reorder
// ============================================================================

#[test]
fn test_reorder_tracks_current_slide() {
    let harness = EditorTestHarness::with_slides(&["A", "B", "C", "D"]);
    harness.ctrl.select_slide(1);

    assert!(harness.ctrl.reorder_slide(0, 2));
    assert_eq!(harness.slide_titles(), vec!["B", "C", "A", "D"]);
    assert_eq!(harness.ctrl.current_slide_index(), 0);
    assert_eq!(harness.current_row(), Some(0));
}

#[test]
fn test_reorder_out_of_range_is_rejected() {
    let harness = EditorTestHarness::with_slides(&["A", "B"]);
    assert!(!harness.ctrl.reorder_slide(0, 2));
    assert!(!harness.ctrl.reorder_slide(5, 0));
    assert!(!harness.ctrl.reorder_slide(1, 1));
    assert_eq!(harness.slide_titles(), vec!["A", "B"]);
    assert_eq!(harness.tracker.count(Change::Document), 0);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_clamps_at_ends() {
    let harness = EditorTestHarness::with_slides(&["A", "B", "C"]);

    assert!(!harness.ctrl.previous_slide());
    assert!(harness.ctrl.next_slide());
    assert!(harness.ctrl.next_slide());
    assert!(!harness.ctrl.next_slide());
    assert_eq!(harness.ctrl.current_slide_index(), 2);
    assert!(harness.ctrl.previous_slide());
    assert_eq!(harness.ctrl.current_slide_index(), 1);
}

#[test]
fn test_select_slide_callback() {
    let harness = EditorTestHarness::with_slides(&["A", "B"]);
    let callback = harness.ctrl.select_slide_callback();

    callback(1);
    assert_eq!(harness.ctrl.current_slide_index(), 1);
    callback(-1);
    callback(7);
    assert_eq!(harness.ctrl.current_slide_index(), 1);
}

#[test]
fn test_changing_slide_resets_pan() {
    let harness = EditorTestHarness::with_slides(&["A", "B"]);
    harness
        .ctrl
        .canvas_pointer_down(slint::platform::PointerEventButton::Right, 0.0, 0.0);
    harness.ctrl.canvas_pointer_move(40.0, 30.0);
    harness.ctrl.canvas_pointer_up();
    assert_eq!(harness.ctrl.pan().x, 40.0);

    harness.ctrl.next_slide();
    assert_eq!(harness.ctrl.pan().x, 0.0);
    assert_eq!(harness.ctrl.pan().y, 0.0);
}

#[test]
fn test_wrapping_advance() {
    let harness = EditorTestHarness::with_slides(&["A", "B"]);
    assert!(harness.ctrl.advance_slide_wrapping());
    assert_eq!(harness.ctrl.current_slide_index(), 1);
    assert!(harness.ctrl.advance_slide_wrapping());
    assert_eq!(harness.ctrl.current_slide_index(), 0);
}
