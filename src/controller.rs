//! High-level controller for slide editor applications.
//!
//! [`SlideEditorController`] wires the document store, viewport, element
//! selection, presentation mode, themes and assets together and keeps bound
//! Slint models up to date after every change.
//!
//! # Example
//!
//! ```ignore
//! use slint_slide_editor::{SlideEditorController, WindowFullscreen};
//! use slint::{ModelRc, VecModel};
//! use std::rc::Rc;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = SlideEditorController::new();
//!     ctrl.set_fullscreen_capability(Box::new(WindowFullscreen::new(window.as_weak())));
//!
//!     let slides = Rc::new(VecModel::<SlideItem>::default());
//!     ctrl.bind_slides(slides.clone(), |index, id, title, current| SlideItem { index, id, title, current });
//!     window.set_slides(ModelRc::from(slides));
//!
//!     window.on_select_slide(ctrl.select_slide_callback());
//!     window.on_content_clicked(ctrl.content_clicked_callback());
//!     window.on_zoom_requested(ctrl.zoom_callback());
//!
//!     window.on_present({
//!         let ctrl = ctrl.clone();
//!         let w = window.as_weak();
//!         move || {
//!             if let Err(err) = ctrl.enter_presentation_mode() {
//!                 if let Some(w) = w.upgrade() {
//!                     w.set_status(err.to_string().into());
//!                 }
//!             }
//!         }
//!     });
//!
//!     ctrl.new_presentation("Untitled Presentation");
//!     window.run().unwrap();
//! }
//! ```

use crate::assets::{AssetLibrary, AssetRef, AssetUploader};
use crate::autoplay::{next_slide_index, AutoAdvance};
use crate::bindings::ModelBindings;
use crate::config::EditorConfig;
use crate::content::{Content, ContentPatch, ContentType};
use crate::drag::{DragGesture, DragTarget};
use crate::error::Result;
use crate::hit_test::{elements_in_selection_box, find_element_at};
use crate::persistence::PresentationRepository;
use crate::presentation::Presentation;
use crate::presentation_mode::{
    FullscreenCapability, NoFullscreen, PresentationMode, PresentationModeController,
};
use crate::selection::ElementSelection;
use crate::slide::{ElementPatch, Point, SlideElement, SlidePatch};
use crate::store::DocumentStore;
use crate::theme::{Theme, ThemeDraft, ThemePatch, ThemeRegistry};
use crate::viewport::{ViewTransform, Viewport};
use slint::platform::PointerEventButton;
use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

/// What a change notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Document, slide selection, focus or edit mode.
    Document,
    Viewport,
    ElementSelection,
    PresentationMode,
    Theme,
}

type Listener = Rc<dyn Fn(Change)>;

/// Controller that owns the editor state and provides callback
/// implementations.
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct SlideEditorController {
    config: Rc<RefCell<EditorConfig>>,
    store: Rc<RefCell<DocumentStore>>,
    viewport: Rc<RefCell<Viewport>>,
    selection: Rc<RefCell<ElementSelection>>,
    element_drag: Rc<RefCell<DragGesture>>,
    mode: Rc<RefCell<PresentationModeController>>,
    auto_advance: Rc<RefCell<AutoAdvance>>,
    themes: Rc<RefCell<ThemeRegistry>>,
    assets: Rc<RefCell<AssetLibrary>>,
    bindings: Rc<RefCell<ModelBindings>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

/// Weak handle for closures owned by the controller itself.
#[derive(Clone)]
pub struct WeakSlideEditorController {
    config: Weak<RefCell<EditorConfig>>,
    store: Weak<RefCell<DocumentStore>>,
    viewport: Weak<RefCell<Viewport>>,
    selection: Weak<RefCell<ElementSelection>>,
    element_drag: Weak<RefCell<DragGesture>>,
    mode: Weak<RefCell<PresentationModeController>>,
    auto_advance: Weak<RefCell<AutoAdvance>>,
    themes: Weak<RefCell<ThemeRegistry>>,
    assets: Weak<RefCell<AssetLibrary>>,
    bindings: Weak<RefCell<ModelBindings>>,
    listeners: Weak<RefCell<Vec<Listener>>>,
}

impl WeakSlideEditorController {
    pub fn upgrade(&self) -> Option<SlideEditorController> {
        Some(SlideEditorController {
            config: self.config.upgrade()?,
            store: self.store.upgrade()?,
            viewport: self.viewport.upgrade()?,
            selection: self.selection.upgrade()?,
            element_drag: self.element_drag.upgrade()?,
            mode: self.mode.upgrade()?,
            auto_advance: self.auto_advance.upgrade()?,
            themes: self.themes.upgrade()?,
            assets: self.assets.upgrade()?,
            bindings: self.bindings.upgrade()?,
            listeners: self.listeners.upgrade()?,
        })
    }
}

impl Default for SlideEditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideEditorController {
    /// Create a new controller with default settings and no fullscreen
    /// support. Call [`set_fullscreen_capability`](Self::set_fullscreen_capability)
    /// once the window exists.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let config = config.validated();
        let mut store = DocumentStore::new();
        store.set_default_slide_title(config.default_slide_title.clone());

        Self {
            viewport: Rc::new(RefCell::new(Viewport::new(&config))),
            auto_advance: Rc::new(RefCell::new(AutoAdvance::from_config(&config))),
            config: Rc::new(RefCell::new(config)),
            store: Rc::new(RefCell::new(store)),
            selection: Rc::new(RefCell::new(ElementSelection::new())),
            element_drag: Rc::new(RefCell::new(DragGesture::new())),
            mode: Rc::new(RefCell::new(PresentationModeController::new(Box::new(NoFullscreen)))),
            themes: Rc::new(RefCell::new(ThemeRegistry::new())),
            assets: Rc::new(RefCell::new(AssetLibrary::new())),
            bindings: Rc::new(RefCell::new(ModelBindings::new())),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn as_weak(&self) -> WeakSlideEditorController {
        WeakSlideEditorController {
            config: Rc::downgrade(&self.config),
            store: Rc::downgrade(&self.store),
            viewport: Rc::downgrade(&self.viewport),
            selection: Rc::downgrade(&self.selection),
            element_drag: Rc::downgrade(&self.element_drag),
            mode: Rc::downgrade(&self.mode),
            auto_advance: Rc::downgrade(&self.auto_advance),
            themes: Rc::downgrade(&self.themes),
            assets: Rc::downgrade(&self.assets),
            bindings: Rc::downgrade(&self.bindings),
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn config(&self) -> EditorConfig {
        self.config.borrow().clone()
    }

    /// Set the drop snapping grid unit (default: 8.0).
    pub fn set_grid_unit(&self, unit: f32) {
        self.config.borrow_mut().grid_unit = unit;
    }

    /// Set the allowed zoom range. The current zoom is re-clamped.
    pub fn set_zoom_range(&self, min: f32, max: f32) {
        self.viewport.borrow_mut().set_zoom_range(min, max);
        let (min, max) = self.viewport.borrow().zoom_range();
        {
            let mut config = self.config.borrow_mut();
            config.min_zoom = min;
            config.max_zoom = max;
        }
        self.emit(Change::Viewport);
    }

    /// Get access to the document store.
    pub fn store(&self) -> Rc<RefCell<DocumentStore>> {
        self.store.clone()
    }

    pub fn set_fullscreen_capability(&self, fullscreen: Box<dyn FullscreenCapability>) {
        self.mode.borrow_mut().set_fullscreen_capability(fullscreen);
    }

    // === Change notification ===

    /// Register a listener called after every change.
    pub fn on_change(&self, listener: impl Fn(Change) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn emit(&self, change: Change) {
        if change == Change::Document {
            self.bindings.borrow().sync(&self.store.borrow());
        }
        // Listeners may call back into the controller.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(change);
        }
    }

    /// Run a store mutation and follow up on what it changed.
    ///
    /// A different current slide resets the pan and element selection; a
    /// newly focused content item resets the pan.
    fn mutate_store<R>(&self, f: impl FnOnce(&mut DocumentStore) -> R) -> R {
        let (revision, slide_id, focused) = {
            let store = self.store.borrow();
            (
                store.revision(),
                store.current_slide().map(|s| s.id.clone()),
                store.focused_content_id().map(str::to_owned),
            )
        };

        let result = f(&mut self.store.borrow_mut());

        let (changed, slide_changed, focus_gained, live_elements) = {
            let store = self.store.borrow();
            let new_slide_id = store.current_slide().map(|s| s.id.clone());
            let new_focus = store.focused_content_id().map(str::to_owned);
            let live: Vec<String> = store
                .current_slide()
                .map(|s| s.elements.iter().map(|e| e.id.clone()).collect())
                .unwrap_or_default();
            (
                store.revision() != revision,
                new_slide_id != slide_id,
                new_focus.is_some() && new_focus != focused,
                live,
            )
        };
        if !changed {
            return result;
        }

        if slide_changed || focus_gained {
            self.viewport.borrow_mut().reset_pan();
        }
        let selection_before = self.selection.borrow().len();
        if slide_changed {
            self.selection.borrow_mut().clear();
        } else {
            self.selection
                .borrow_mut()
                .retain_existing(live_elements.iter().map(String::as_str));
        }

        self.emit(Change::Document);
        if slide_changed || focus_gained {
            self.emit(Change::Viewport);
        }
        if self.selection.borrow().len() != selection_before {
            self.emit(Change::ElementSelection);
        }
        result
    }

    // === Bindings ===

    /// Bind the slide list model; it is filled immediately.
    pub fn bind_slides<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(i32, SharedString, SharedString, bool) -> P + 'static,
    {
        self.bindings.borrow_mut().bind_slides(model, constructor);
        self.bindings.borrow().sync(&self.store.borrow());
    }

    /// Bind the current slide's content list model.
    pub fn bind_contents<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(SharedString, SharedString, SharedString, i32, bool) -> P + 'static,
    {
        self.bindings.borrow_mut().bind_contents(model, constructor);
        self.bindings.borrow().sync(&self.store.borrow());
    }

    /// Bind the current slide's free-form element model.
    pub fn bind_elements<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(SharedString, SharedString, f32, f32, f32, f32) -> P + 'static,
    {
        self.bindings.borrow_mut().bind_elements(model, constructor);
        self.bindings.borrow().sync(&self.store.borrow());
    }

    // === Document ===

    pub fn presentation(&self) -> Option<Rc<Presentation>> {
        self.store.borrow().presentation()
    }

    pub fn new_presentation(&self, title: &str) -> String {
        self.mutate_store(|store| store.new_presentation(title))
    }

    pub fn set_presentation(&self, presentation: Option<Presentation>) {
        let theme = presentation.as_ref().and_then(|p| p.theme.clone());
        self.mutate_store(|store| store.set_presentation(presentation));
        if let Some(theme) = theme {
            self.set_current_theme(&theme);
        }
    }

    /// Load a presentation; see [`DocumentStore::load_from`].
    pub fn load_from<R>(&self, repo: &R, id: &str) -> Result<bool>
    where
        R: PresentationRepository + ?Sized,
    {
        let found = self.mutate_store(|store| store.load_from(repo, id))?;
        let theme = self.presentation().and_then(|p| p.theme.clone());
        if let Some(theme) = theme {
            self.set_current_theme(&theme);
        }
        Ok(found)
    }

    pub fn save_to<R>(&self, repo: &mut R) -> Result<()>
    where
        R: PresentationRepository + ?Sized,
    {
        self.mutate_store(|store| store.save_to(repo))
    }

    // === Slides ===

    pub fn current_slide_index(&self) -> usize {
        self.store.borrow().current_slide_index()
    }

    pub fn slide_count(&self) -> usize {
        self.store.borrow().slides().len()
    }

    pub fn add_slide(&self, patch: &SlidePatch) -> Option<String> {
        self.mutate_store(|store| store.add_slide(patch))
    }

    pub fn update_slide(&self, id: &str, patch: &SlidePatch) -> bool {
        self.mutate_store(|store| store.update_slide(id, patch))
    }

    pub fn delete_slide(&self, id: &str) -> bool {
        self.mutate_store(|store| store.delete_slide(id))
    }

    pub fn reorder_slide(&self, source_index: usize, target_index: usize) -> bool {
        self.mutate_store(|store| store.reorder_slide(source_index, target_index))
    }

    pub fn select_slide(&self, index: usize) -> bool {
        self.mutate_store(|store| store.select_slide(index))
    }

    pub fn next_slide(&self) -> bool {
        self.mutate_store(|store| store.next_slide())
    }

    pub fn previous_slide(&self) -> bool {
        self.mutate_store(|store| store.previous_slide())
    }

    /// Step forward, wrapping from the last slide to the first.
    pub fn advance_slide_wrapping(&self) -> bool {
        let (current, len) = {
            let store = self.store.borrow();
            (store.current_slide_index(), store.slides().len())
        };
        match next_slide_index(current, len) {
            Some(index) => self.select_slide(index),
            None => false,
        }
    }

    // === Content ===

    pub fn current_slide_contents(&self) -> Vec<Content> {
        self.store.borrow().current_slide_contents().to_vec()
    }

    pub fn add_content(&self, content_type: ContentType, partial: Option<&ContentPatch>) -> Option<Content> {
        self.mutate_store(|store| store.add_content(content_type, partial))
    }

    pub fn update_content(&self, id: &str, patch: &ContentPatch) -> bool {
        self.mutate_store(|store| store.update_content(id, patch))
    }

    pub fn delete_content(&self, id: &str) -> bool {
        self.mutate_store(|store| store.delete_content(id))
    }

    pub fn reorder_content(&self, id: &str, new_order: usize) -> bool {
        self.mutate_store(|store| store.reorder_content(id, new_order))
    }

    pub fn move_content_up(&self, id: &str) -> bool {
        self.mutate_store(|store| store.move_content_up(id))
    }

    pub fn move_content_down(&self, id: &str) -> bool {
        self.mutate_store(|store| store.move_content_down(id))
    }

    // === Focus / edit mode ===

    pub fn focused_content_id(&self) -> Option<String> {
        self.store.borrow().focused_content_id().map(str::to_owned)
    }

    /// Focus `id` (or clear focus with `None`). Every accepted focus resets
    /// the pan, including a repeat focus of the same item.
    pub fn set_focused_content(&self, id: Option<&str>) -> bool {
        let accepted = self.mutate_store(|store| store.set_focused_content(id));
        if accepted && id.is_some() {
            self.update_viewport(Viewport::reset_pan);
        }
        accepted
    }

    pub fn click_content(&self, id: &str) -> bool {
        let focused = self.mutate_store(|store| store.click_content(id));
        if focused {
            self.update_viewport(Viewport::reset_pan);
        }
        focused
    }

    pub fn edit_mode(&self) -> bool {
        self.store.borrow().edit_mode()
    }

    pub fn set_edit_mode(&self, edit_mode: bool) {
        self.mutate_store(|store| store.set_edit_mode(edit_mode));
    }

    // === Viewport ===

    pub fn zoom(&self) -> f32 {
        self.viewport.borrow().zoom()
    }

    pub fn pan(&self) -> Point {
        self.viewport.borrow().pan()
    }

    pub fn view_transform(&self) -> ViewTransform {
        self.viewport.borrow().transform()
    }

    fn update_viewport<R>(&self, f: impl FnOnce(&mut Viewport) -> R) -> R {
        let before = self.viewport.borrow().transform();
        let result = f(&mut self.viewport.borrow_mut());
        if self.viewport.borrow().transform() != before {
            self.emit(Change::Viewport);
        }
        result
    }

    /// Set the zoom level; returns the clamped level.
    pub fn set_zoom(&self, level: f32) -> f32 {
        self.update_viewport(|v| v.set_zoom(level))
    }

    pub fn zoom_in(&self) -> f32 {
        self.update_viewport(|v| v.zoom_in())
    }

    pub fn zoom_out(&self) -> f32 {
        self.update_viewport(|v| v.zoom_out())
    }

    pub fn reset_zoom(&self) -> f32 {
        self.update_viewport(|v| v.reset_zoom())
    }

    /// Pointer pressed on the canvas background.
    pub fn canvas_pointer_down(&self, button: PointerEventButton, x: f32, y: f32) -> bool {
        self.update_viewport(|v| v.pointer_down(button, x, y))
    }

    pub fn canvas_pointer_move(&self, x: f32, y: f32) -> bool {
        self.update_viewport(|v| v.pointer_move(x, y))
    }

    pub fn canvas_pointer_up(&self) -> Option<(f32, f32)> {
        self.update_viewport(|v| v.pointer_up())
    }

    /// Grid overlay for a canvas of the given size at the current view.
    pub fn grid_commands(&self, width: f32, height: f32) -> SharedString {
        let spacing = self.config.borrow().grid_overlay_spacing;
        self.viewport.borrow().grid_commands(width, height, spacing).into()
    }

    // === Free-form elements ===

    pub fn add_element(&self, element: SlideElement) -> Option<String> {
        self.mutate_store(|store| store.add_element(element))
    }

    pub fn update_element(&self, id: &str, patch: &ElementPatch) -> bool {
        self.mutate_store(|store| store.update_element(id, patch))
    }

    pub fn delete_element(&self, id: &str) -> bool {
        self.mutate_store(|store| store.delete_element(id))
    }

    /// Topmost element under a screen-space point.
    pub fn element_at_screen(&self, x: f32, y: f32) -> Option<String> {
        let canvas = self.viewport.borrow().screen_to_canvas(Point::new(x, y));
        let store = self.store.borrow();
        let elements = store.current_slide().map(|s| s.elements.as_slice()).unwrap_or(&[]);
        find_element_at(canvas.x, canvas.y, elements)
    }

    /// Primary-button press on the canvas: update the selection from what
    /// is under the pointer and start dragging it.
    ///
    /// A plain press on an already selected element keeps the whole
    /// selection so it can be dragged as a group. Returns the element hit,
    /// if any.
    pub fn element_pointer_down(&self, x: f32, y: f32, shift_held: bool) -> Option<String> {
        let hit = self.element_at_screen(x, y);
        let changed = match &hit {
            Some(id) if !shift_held && self.selection.borrow().contains(id) => false,
            Some(id) => self.selection.borrow_mut().handle_click(id, shift_held),
            None if !shift_held => self.selection.borrow_mut().clear(),
            None => false,
        };
        if changed {
            self.emit(Change::ElementSelection);
        }
        if let Some(id) = &hit {
            if self.selection.borrow().contains(id) {
                self.begin_element_drag(x, y);
            }
        }
        hit
    }

    /// Start dragging the selected elements from a screen-space point.
    pub fn begin_element_drag(&self, x: f32, y: f32) -> bool {
        let ids = self.selection.borrow().sorted_ids();
        if ids.is_empty() {
            return false;
        }
        self.element_drag
            .borrow_mut()
            .begin(DragTarget::Elements(ids), x, y)
    }

    /// Pointer moved during an element drag. Returns the accumulated
    /// canvas-space offset for previewing; positions are only written on
    /// release.
    pub fn update_element_drag(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        let mut drag = self.element_drag.borrow_mut();
        drag.update(x, y)?;
        let (dx, dy) = drag.delta();
        Some(self.viewport.borrow().screen_delta_to_canvas(dx, dy))
    }

    pub fn is_dragging_elements(&self) -> bool {
        self.element_drag.borrow().is_dragging()
    }

    /// Pointer released: move the dragged elements by the total offset and
    /// snap them to the grid. Returns how many elements moved.
    pub fn end_element_drag(&self) -> usize {
        let Some(commit) = self.element_drag.borrow_mut().end() else {
            return 0;
        };
        if commit.is_zero() {
            return 0;
        }
        let DragTarget::Elements(ids) = commit.target else {
            return 0;
        };
        let ids: HashSet<String> = ids.into_iter().collect();
        let (dx, dy) = self.viewport.borrow().screen_delta_to_canvas(commit.dx, commit.dy);
        let unit = self.config.borrow().grid_unit;
        self.mutate_store(|store| store.commit_element_drag(&ids, dx, dy, unit))
    }

    /// Rubber-band selection with a screen-space rectangle.
    pub fn select_elements_in_box_screen(&self, sx: f32, sy: f32, sw: f32, sh: f32, additive: bool) -> usize {
        let hits = {
            let viewport = self.viewport.borrow();
            let origin = viewport.screen_to_canvas(Point::new(sx, sy));
            let (w, h) = viewport.screen_delta_to_canvas(sw, sh);
            let store = self.store.borrow();
            let elements = store.current_slide().map(|s| s.elements.as_slice()).unwrap_or(&[]);
            elements_in_selection_box(origin.x, origin.y, w, h, elements)
        };
        let count = hits.len();
        let changed = self.selection.borrow_mut().select_box(hits, additive);
        if changed {
            self.emit(Change::ElementSelection);
        }
        count
    }

    pub fn clear_element_selection(&self) {
        if self.selection.borrow_mut().clear() {
            self.emit(Change::ElementSelection);
        }
    }

    pub fn selected_element_ids(&self) -> Vec<String> {
        self.selection.borrow().sorted_ids()
    }

    pub fn sync_selection_to_model(&self, model: &VecModel<SharedString>) {
        self.selection.borrow().sync_to_model(model);
    }

    // === Presentation mode ===

    pub fn presentation_mode(&self) -> PresentationMode {
        self.mode.borrow().mode()
    }

    /// Enter presentation mode: fullscreen first, then edit mode off, focus
    /// cleared and auto advance started if enabled.
    ///
    /// If fullscreen is refused nothing changes and the error is returned.
    pub fn enter_presentation_mode(&self) -> Result<()> {
        let entered = self.mode.borrow_mut().enter()?;
        if !entered {
            return Ok(());
        }
        self.mutate_store(|store| {
            store.set_edit_mode(false);
            store.set_focused_content(None);
        });
        self.start_auto_advance_if_enabled();
        self.emit(Change::PresentationMode);
        Ok(())
    }

    /// Leave presentation mode. The mode is `Editing` afterwards even if
    /// releasing fullscreen failed; that failure is returned.
    pub fn exit_presentation_mode(&self) -> Result<()> {
        let result = self.mode.borrow_mut().exit();
        self.auto_advance.borrow().stop();
        match result {
            Ok(false) => Ok(()),
            Ok(true) => {
                self.emit(Change::PresentationMode);
                Ok(())
            }
            Err(err) => {
                self.emit(Change::PresentationMode);
                Err(err)
            }
        }
    }

    /// The platform changed fullscreen on its own (e.g. the user pressed
    /// Escape).
    pub fn handle_fullscreen_changed(&self, is_fullscreen: bool) {
        let left = self.mode.borrow_mut().handle_fullscreen_changed(is_fullscreen);
        if left {
            self.auto_advance.borrow().stop();
            self.emit(Change::PresentationMode);
        }
    }

    pub fn set_auto_advance(&self, enabled: bool) {
        self.auto_advance.borrow_mut().set_enabled(enabled);
        if enabled && self.mode.borrow().is_presenting() {
            self.start_auto_advance_if_enabled();
        }
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.borrow().is_running()
    }

    fn start_auto_advance_if_enabled(&self) {
        let auto = self.auto_advance.borrow();
        if !auto.is_enabled() {
            return;
        }
        let weak = self.as_weak();
        auto.start(move || {
            if let Some(ctrl) = weak.upgrade() {
                ctrl.advance_slide_wrapping();
            }
        });
    }

    // === Themes ===

    pub fn themes(&self) -> Vec<Theme> {
        self.themes.borrow().themes().to_vec()
    }

    pub fn current_theme(&self) -> Theme {
        self.themes.borrow().current().clone()
    }

    /// Select a theme and record it on the open presentation.
    pub fn set_current_theme(&self, id: &str) -> bool {
        let changed = self.themes.borrow_mut().set_current(id);
        if changed {
            self.mutate_store(|store| store.set_theme(Some(id)));
            self.emit(Change::Theme);
        }
        changed
    }

    pub fn add_custom_theme(&self, draft: ThemeDraft) -> String {
        let id = self.themes.borrow_mut().add_custom(draft);
        self.mutate_store(|store| store.set_theme(Some(&id)));
        self.emit(Change::Theme);
        id
    }

    pub fn update_theme(&self, id: &str, patch: ThemePatch) -> bool {
        let changed = self.themes.borrow_mut().update(id, patch);
        if changed {
            self.emit(Change::Theme);
        }
        changed
    }

    /// Delete a custom theme. A presentation shown with it falls back to the
    /// default theme.
    pub fn delete_theme(&self, id: &str) -> bool {
        let changed = self.themes.borrow_mut().delete(id);
        if changed {
            let uses_deleted = self
                .presentation()
                .is_some_and(|p| p.theme.as_deref() == Some(id));
            if uses_deleted {
                self.mutate_store(|store| store.set_theme(None));
            }
            self.emit(Change::Theme);
        }
        changed
    }

    // === Assets ===

    pub fn upload_asset<U>(&self, uploader: &mut U, name: &str, bytes: &[u8]) -> Result<AssetRef>
    where
        U: AssetUploader + ?Sized,
    {
        self.assets.borrow_mut().upload(uploader, name, bytes)
    }

    pub fn assets(&self) -> Vec<AssetRef> {
        self.assets.borrow().assets().to_vec()
    }

    pub fn search_assets(&self, query: &str) -> Vec<AssetRef> {
        self.assets.borrow().search(query).into_iter().cloned().collect()
    }

    pub fn remove_asset(&self, id: &str) -> bool {
        self.assets.borrow_mut().remove(id).is_some()
    }

    // === Callback factories ===

    /// Returns a callback for `select-slide(int)`.
    pub fn select_slide_callback(&self) -> impl Fn(i32) {
        let ctrl = self.clone();
        move |index| {
            if let Ok(index) = usize::try_from(index) {
                ctrl.select_slide(index);
            }
        }
    }

    /// Returns a callback for `content-clicked(string)`.
    pub fn content_clicked_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |id| {
            ctrl.click_content(id.as_str());
        }
    }

    /// Returns a callback for `zoom-requested(float) -> float`, answering
    /// with the clamped level.
    pub fn zoom_callback(&self) -> impl Fn(f32) -> f32 {
        let ctrl = self.clone();
        move |level| ctrl.set_zoom(level)
    }

    /// Returns a callback for `fullscreen-changed(bool)`.
    pub fn fullscreen_changed_callback(&self) -> impl Fn(bool) {
        let ctrl = self.clone();
        move |is_fullscreen| ctrl.handle_fullscreen_changed(is_fullscreen)
    }

    /// Returns a callback for `request-grid-update(width, height) -> string`.
    pub fn grid_callback(&self) -> impl Fn(f32, f32) -> SharedString {
        let ctrl = self.clone();
        move |width, height| ctrl.grid_commands(width, height)
    }
}
