//! Level 1: Basic Initialization Tests
//!
//! Controller defaults and the initial state of bound models.

mod common;

use common::harness::EditorTestHarness;
use slint::{Model, VecModel};
use slint_slide_editor::{EditorConfig, PresentationMode, SlideEditorController, SlidePatch};
use std::rc::Rc;

#[test]
fn test_controller_initializes_with_defaults() {
    let harness = EditorTestHarness::new();

    assert_eq!(harness.ctrl.zoom(), 1.0);
    assert_eq!(harness.ctrl.pan().x, 0.0);
    assert!(harness.ctrl.edit_mode());
    assert_eq!(harness.ctrl.presentation_mode(), PresentationMode::Editing);
    assert_eq!(harness.ctrl.current_theme().id, "default");
    assert!(harness.ctrl.focused_content_id().is_none());
}

#[test]
fn test_new_presentation_is_empty() {
    let harness = EditorTestHarness::new();

    let presentation = harness.ctrl.presentation().unwrap();
    assert_eq!(presentation.title, "Test Deck");
    assert_eq!(harness.slides.row_count(), 0);
    assert_eq!(harness.contents.row_count(), 0);
    assert_eq!(harness.ctrl.current_slide_index(), 0);
}

#[test]
fn test_bound_models_follow_slides() {
    let harness = EditorTestHarness::with_slides(&["Intro", "Agenda"]);

    assert_eq!(harness.slide_titles(), vec!["Intro", "Agenda"]);
    let first = harness.slides.row_data(0).unwrap();
    assert_eq!(first.index, 0);
    assert!(first.current);
    assert!(!harness.slides.row_data(1).unwrap().current);
}

#[test]
fn test_binding_late_fills_immediately() {
    let harness = EditorTestHarness::with_slides(&["One", "Two", "Three"]);

    let titles: Rc<VecModel<slint::SharedString>> = Rc::new(VecModel::default());
    harness
        .ctrl
        .bind_slides(titles.clone(), |_index, _id, title, _current| title);
    assert_eq!(titles.row_count(), 3);
}

#[test]
fn test_custom_config_is_applied() {
    let config = EditorConfig {
        default_slide_title: "Untitled".into(),
        max_zoom: 2.0,
        ..Default::default()
    };
    let ctrl = SlideEditorController::with_config(config);
    ctrl.new_presentation("Deck");
    ctrl.add_slide(&SlidePatch::default());

    assert_eq!(ctrl.presentation().unwrap().slides[0].title, "Untitled");
    assert_eq!(ctrl.set_zoom(10.0), 2.0);
}

#[test]
fn test_operations_without_presentation_are_noops() {
    let ctrl = SlideEditorController::new();
    assert!(ctrl.add_slide(&SlidePatch::default()).is_none());
    assert!(ctrl
        .add_content(slint_slide_editor::ContentType::Text, None)
        .is_none());
    assert!(!ctrl.delete_slide("missing"));
    assert_eq!(ctrl.slide_count(), 0);
}
