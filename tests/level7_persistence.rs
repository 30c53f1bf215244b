//! Level 7: Persistence, Themes and Assets
//!
//! Saving and loading through repositories, theme selection, asset uploads,
//! and ordering invariants under random edit sequences.

mod common;

use common::harness::EditorTestHarness;
use proptest::prelude::*;
use slint::Model;
use slint_slide_editor::{
    is_contiguous, Change, ContentType, DirectoryUploader, EditorError, JsonDirectoryRepository,
    MemoryRepository, Presentation, PresentationRepository, SlidePatch, ThemeDraft, ThemePatch,
};

// ============================================================================
// Save / load
// ============================================================================

#[test]
fn test_save_and_reload_from_memory() {
    let harness = EditorTestHarness::with_slides(&["Intro", "Outro"]);
    harness.add_text("hello");
    let mut repo = MemoryRepository::new();

    harness.ctrl.save_to(&mut repo).unwrap();
    let saved = harness.ctrl.presentation().unwrap();
    assert_eq!(repo.len(), 1);

    let other = EditorTestHarness::new();
    assert!(other.ctrl.load_from(&repo, &saved.id).unwrap());
    assert_eq!(other.slide_titles(), vec!["Intro", "Outro"]);
    assert_eq!(other.ctrl.current_slide_index(), 0);
    assert_eq!(other.content_rows(), vec![("hello".to_string(), 0)]);
    assert!(other.ctrl.focused_content_id().is_none());
}

#[test]
fn test_loading_unknown_id_starts_fresh_document() {
    let harness = EditorTestHarness::with_slides(&["A"]);
    let repo = MemoryRepository::new();

    assert!(!harness.ctrl.load_from(&repo, "missing-deck").unwrap());
    let presentation = harness.ctrl.presentation().unwrap();
    assert_eq!(presentation.id, "missing-deck");
    assert_eq!(presentation.title, "Untitled Presentation");
    assert_eq!(harness.slides.iter().count(), 0);
}

#[test]
fn test_json_directory_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = JsonDirectoryRepository::open(dir.path()).unwrap();

    let harness = EditorTestHarness::with_slides(&["Only"]);
    harness.ctrl.add_content(ContentType::Table, None).unwrap();
    harness.ctrl.save_to(&mut repo).unwrap();
    let saved = harness.ctrl.presentation().unwrap();

    let loaded = repo.fetch(&saved.id).unwrap();
    assert_eq!(loaded, *saved);
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn test_save_without_presentation_fails() {
    let harness = EditorTestHarness::new();
    harness.ctrl.set_presentation(None);
    let mut repo = MemoryRepository::new();

    let err = harness.ctrl.save_to(&mut repo).unwrap_err();
    assert!(matches!(err, EditorError::NoPresentation));
    assert!(repo.is_empty());
}

#[test]
fn test_loaded_theme_is_applied() {
    let mut presentation = Presentation::new("Dark deck");
    presentation.theme = Some("dark".into());
    let mut repo = MemoryRepository::new();
    repo.save(&presentation).unwrap();

    let harness = EditorTestHarness::new();
    harness.ctrl.load_from(&repo, &presentation.id).unwrap();
    assert_eq!(harness.ctrl.current_theme().id, "dark");
    assert_eq!(harness.tracker.count(Change::Theme), 1);
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn test_custom_theme_lifecycle() {
    let harness = EditorTestHarness::new();
    let base = harness.ctrl.current_theme();

    let mut draft = ThemeDraft::from(&base);
    draft.name = "Brand".into();
    let id = harness.ctrl.add_custom_theme(draft);
    assert_eq!(harness.ctrl.current_theme().id, id);
    assert_eq!(harness.ctrl.themes().len(), 4);

    assert!(harness.ctrl.update_theme(
        &id,
        ThemePatch {
            name: Some("Brand 2".into()),
            ..Default::default()
        }
    ));
    assert_eq!(harness.ctrl.current_theme().name, "Brand 2");

    assert!(harness.ctrl.delete_theme(&id));
    assert_eq!(harness.ctrl.current_theme().id, "default");
    assert_eq!(harness.tracker.count(Change::Theme), 3);
}

#[test]
fn test_selected_theme_survives_save_and_reload() {
    let harness = EditorTestHarness::with_slides(&["A"]);
    assert!(harness.ctrl.set_current_theme("dark"));
    assert_eq!(harness.ctrl.presentation().unwrap().theme.as_deref(), Some("dark"));

    let mut repo = MemoryRepository::new();
    harness.ctrl.save_to(&mut repo).unwrap();
    let id = harness.ctrl.presentation().unwrap().id.clone();
    assert_eq!(repo.fetch(&id).unwrap().theme.as_deref(), Some("dark"));

    let other = EditorTestHarness::new();
    assert!(other.ctrl.load_from(&repo, &id).unwrap());
    assert_eq!(other.ctrl.presentation().unwrap().theme.as_deref(), Some("dark"));
    assert_eq!(other.ctrl.current_theme().id, "dark");
}

#[test]
fn test_deleting_document_theme_clears_it() {
    let harness = EditorTestHarness::new();
    let mut draft = ThemeDraft::from(&harness.ctrl.current_theme());
    draft.name = "Brand".into();
    let id = harness.ctrl.add_custom_theme(draft);
    assert_eq!(harness.ctrl.presentation().unwrap().theme.as_deref(), Some(id.as_str()));

    assert!(harness.ctrl.delete_theme(&id));
    assert_eq!(harness.ctrl.presentation().unwrap().theme, None);
    assert_eq!(harness.ctrl.current_theme().id, "default");
}

#[test]
fn test_builtin_themes_are_read_only() {
    let harness = EditorTestHarness::new();
    assert!(!harness.ctrl.delete_theme("dark"));
    assert!(!harness.ctrl.update_theme("dark", ThemePatch::default()));
    assert!(!harness.ctrl.set_current_theme("no-such-theme"));
    assert_eq!(harness.tracker.count(Change::Theme), 0);
}

// ============================================================================
// Assets
// ============================================================================

#[test]
fn test_upload_and_search_assets() {
    let dir = tempfile::tempdir().unwrap();
    let mut uploader = DirectoryUploader::open(dir.path()).unwrap();
    let harness = EditorTestHarness::new();

    let logo = harness
        .ctrl
        .upload_asset(&mut uploader, "Logo.png", b"\x89PNG")
        .unwrap();
    harness
        .ctrl
        .upload_asset(&mut uploader, "chart.svg", b"<svg/>")
        .unwrap();
    assert!(harness
        .ctrl
        .upload_asset(&mut uploader, "notes.txt", b"text")
        .is_err());

    assert_eq!(harness.ctrl.assets().len(), 2);
    let found = harness.ctrl.search_assets("logo");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, logo.id);

    assert!(harness.ctrl.remove_asset(&logo.id));
    assert!(!harness.ctrl.remove_asset(&logo.id));
    assert_eq!(harness.ctrl.assets().len(), 1);
}

// ============================================================================
// Ordering invariants
// ============================================================================

#[derive(Debug, Clone)]
enum Edit {
    AddSlide,
    DeleteSlide(usize),
    ReorderSlide(usize, usize),
    SelectSlide(usize),
    AddContent,
    DeleteContent(usize),
    ReorderContent(usize, usize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::AddSlide),
        (0usize..8).prop_map(Edit::DeleteSlide),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Edit::ReorderSlide(a, b)),
        (0usize..8).prop_map(Edit::SelectSlide),
        Just(Edit::AddContent),
        (0usize..8).prop_map(Edit::DeleteContent),
        (0usize..8, 0usize..10).prop_map(|(a, b)| Edit::ReorderContent(a, b)),
    ]
}

fn apply(harness: &EditorTestHarness, edit: &Edit) {
    let ctrl = &harness.ctrl;
    let slide_id = |index: usize| {
        ctrl.presentation()
            .and_then(|p| p.slides.get(index).map(|s| s.id.clone()))
    };
    let content_id = |index: usize| {
        ctrl.current_slide_contents()
            .get(index)
            .map(|c| c.id().to_string())
    };

    match edit {
        Edit::AddSlide => {
            ctrl.add_slide(&SlidePatch::default());
        }
        Edit::DeleteSlide(index) => {
            if let Some(id) = slide_id(*index) {
                ctrl.delete_slide(&id);
            }
        }
        Edit::ReorderSlide(from, to) => {
            ctrl.reorder_slide(*from, *to);
        }
        Edit::SelectSlide(index) => {
            ctrl.select_slide(*index);
        }
        Edit::AddContent => {
            ctrl.add_content(ContentType::Text, None);
        }
        Edit::DeleteContent(index) => {
            if let Some(id) = content_id(*index) {
                ctrl.delete_content(&id);
            }
        }
        Edit::ReorderContent(index, order) => {
            if let Some(id) = content_id(*index) {
                ctrl.reorder_content(&id, *order);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_orders_stay_contiguous(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let harness = EditorTestHarness::with_slides(&["Start"]);

        for edit in &edits {
            apply(&harness, edit);

            let presentation = harness.ctrl.presentation().unwrap();
            for slide in &presentation.slides {
                prop_assert!(is_contiguous(&slide.content), "after {:?}", edit);
            }

            let count = presentation.slides.len();
            let current = harness.ctrl.current_slide_index();
            if count == 0 {
                prop_assert_eq!(current, 0);
                prop_assert_eq!(harness.current_row(), None);
            } else {
                prop_assert!(current < count, "index {} of {}", current, count);
                prop_assert_eq!(harness.current_row(), Some(current));
            }

            if let Some(focused) = harness.ctrl.focused_content_id() {
                prop_assert!(harness
                    .ctrl
                    .current_slide_contents()
                    .iter()
                    .any(|c| c.id() == focused));
            }
        }
    }

    #[test]
    fn prop_reorder_keeps_slide_set(from in 0usize..5, to in 0usize..5) {
        let harness = EditorTestHarness::with_slides(&["A", "B", "C", "D", "E"]);
        harness.ctrl.select_slide(from);
        let current_id = harness.ctrl.presentation().unwrap().slides[from].id.clone();

        harness.ctrl.reorder_slide(from, to);

        let mut titles = harness.slide_titles();
        titles.sort();
        prop_assert_eq!(titles, vec!["A", "B", "C", "D", "E"]);
        let presentation = harness.ctrl.presentation().unwrap();
        prop_assert_eq!(&presentation.slides[harness.ctrl.current_slide_index()].id, &current_id);
    }
}
