//! Test harness wiring a controller to Slint models.
//!
//! Mirrors what an application does: bind the slide, content and element
//! lists to `VecModel`s and listen for changes.

#![allow(dead_code)]

use super::ChangeTracker;
use slint::{Model, SharedString, VecModel};
use slint_slide_editor::{
    ContentPatch, ContentType, EditorError, FullscreenCapability, Point, Result,
    SlideEditorController, SlideElement, SlidePatch,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Initialize the testing backend for this thread.
/// Uses thread_local to ensure each thread only initializes once.
fn init_testing_backend() {
    use std::cell::Cell;
    thread_local! {
        static INITIALIZED: Cell<bool> = const { Cell::new(false) };
    }

    INITIALIZED.with(|init| {
        if !init.get() {
            i_slint_backend_testing::init_no_event_loop();
            init.set(true);
        }
    });
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideItem {
    pub index: i32,
    pub id: SharedString,
    pub title: SharedString,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: SharedString,
    pub kind: SharedString,
    pub summary: SharedString,
    pub order: i32,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementItem {
    pub id: SharedString,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scripted fullscreen capability shared with the test body.
#[derive(Default, Clone)]
pub struct FakeFullscreen {
    pub deny: Rc<RefCell<bool>>,
    pub fail_exit: Rc<RefCell<bool>>,
    pub active: Rc<RefCell<bool>>,
    pub enter_calls: Rc<RefCell<usize>>,
}

impl FullscreenCapability for FakeFullscreen {
    fn try_enter_fullscreen(&mut self) -> Result<()> {
        *self.enter_calls.borrow_mut() += 1;
        if *self.deny.borrow() {
            return Err(EditorError::FullscreenDenied("request rejected".into()));
        }
        *self.active.borrow_mut() = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        if *self.fail_exit.borrow() {
            return Err(EditorError::FullscreenExit("request rejected".into()));
        }
        *self.active.borrow_mut() = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        *self.active.borrow()
    }

    fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        *self.active.borrow_mut() = is_fullscreen;
    }
}

pub struct EditorTestHarness {
    pub ctrl: SlideEditorController,
    pub slides: Rc<VecModel<SlideItem>>,
    pub contents: Rc<VecModel<ContentItem>>,
    pub elements: Rc<VecModel<ElementItem>>,
    pub fullscreen: FakeFullscreen,
    pub tracker: ChangeTracker,
}

impl EditorTestHarness {
    /// A controller with an empty presentation.
    pub fn new() -> Self {
        init_testing_backend();
        let ctrl = SlideEditorController::new();
        let fullscreen = FakeFullscreen::default();
        ctrl.set_fullscreen_capability(Box::new(fullscreen.clone()));

        let slides = Rc::new(VecModel::<SlideItem>::default());
        ctrl.bind_slides(slides.clone(), |index, id, title, current| SlideItem {
            index,
            id,
            title,
            current,
        });

        let contents = Rc::new(VecModel::<ContentItem>::default());
        ctrl.bind_contents(contents.clone(), |id, kind, summary, order, focused| ContentItem {
            id,
            kind,
            summary,
            order,
            focused,
        });

        let elements = Rc::new(VecModel::<ElementItem>::default());
        ctrl.bind_elements(elements.clone(), |id, _kind, x, y, width, height| ElementItem {
            id,
            x,
            y,
            width,
            height,
        });

        let tracker = ChangeTracker::new();
        ctrl.on_change({
            let changes = tracker.changes.clone();
            move |change| changes.borrow_mut().push(change)
        });

        ctrl.new_presentation("Test Deck");
        tracker.clear();

        Self {
            ctrl,
            slides,
            contents,
            elements,
            fullscreen,
            tracker,
        }
    }

    /// A presentation with one slide per title; the first slide is current.
    pub fn with_slides(titles: &[&str]) -> Self {
        let harness = Self::new();
        for title in titles {
            harness.ctrl.add_slide(&SlidePatch::titled(*title));
        }
        harness.ctrl.select_slide(0);
        harness.tracker.clear();
        harness
    }

    pub fn add_text(&self, text: &str) -> String {
        let patch = ContentPatch {
            content: Some(text.into()),
            ..Default::default()
        };
        self.ctrl
            .add_content(ContentType::Text, Some(&patch))
            .expect("current slide")
            .id()
            .to_string()
    }

    pub fn add_box(&self, x: f32, y: f32, width: f32, height: f32) -> String {
        self.ctrl
            .add_element(SlideElement::new("shape", Point::new(x, y)).with_size(width, height))
            .expect("current slide")
    }

    pub fn slide_titles(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.title.to_string()).collect()
    }

    pub fn current_row(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.current)
    }

    pub fn content_rows(&self) -> Vec<(String, i32)> {
        self.contents
            .iter()
            .map(|c| (c.summary.to_string(), c.order))
            .collect()
    }

    pub fn element_position(&self, id: &str) -> Option<(f32, f32)> {
        self.elements
            .iter()
            .find(|e| e.id.as_str() == id)
            .map(|e| (e.x, e.y))
    }
}
