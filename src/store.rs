//! The document store: single owner of the open presentation.
//!
//! All slide and content mutations go through [`DocumentStore`] so the
//! ordering rules live in one place:
//!
//! - content `order` is always `0..len` in array order,
//! - the current slide index follows the selected slide through deletes and
//!   moves,
//! - the focused content id is a weak reference, looked up against the
//!   current slide on every read.
//!
//! Mutations never edit the document in place. Each successful one clones the
//! presentation, edits the copy and swaps in a new `Rc`, so an observer that
//! kept the previous snapshot can detect the change with [`Rc::ptr_eq`].
//! [`DocumentStore::revision`] additionally counts every observable change
//! (document, selection, focus, edit mode).
//!
//! Unknown ids and out-of-range indices are not errors. The operation returns
//! `false`/`None`, logs through `tracing`, and leaves the state untouched.

use crate::content::{create_default_content, merge_content_update, Content, ContentPatch, ContentType};
use crate::error::{EditorError, Result};
use crate::grid::snapped_drop_position;
use crate::ordering::{move_item, reindex, remove_and_reindex, track_index_after_move};
use crate::persistence::PresentationRepository;
use crate::presentation::Presentation;
use crate::slide::{ElementPatch, Slide, SlideElement, SlidePatch};
use chrono::Utc;
use std::collections::HashSet;
use std::rc::Rc;

pub struct DocumentStore {
    presentation: Option<Rc<Presentation>>,
    current_slide_index: usize,
    focused_content_id: Option<String>,
    edit_mode: bool,
    revision: u64,
    default_slide_title: String,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// An empty store with no presentation loaded, in edit mode.
    pub fn new() -> Self {
        Self {
            presentation: None,
            current_slide_index: 0,
            focused_content_id: None,
            edit_mode: true,
            revision: 0,
            default_slide_title: "New Slide".to_string(),
        }
    }

    pub fn set_default_slide_title(&mut self, title: impl Into<String>) {
        self.default_slide_title = title.into();
    }

    // === Snapshot accessors ===

    /// The current document snapshot.
    pub fn presentation(&self) -> Option<Rc<Presentation>> {
        self.presentation.clone()
    }

    pub fn has_presentation(&self) -> bool {
        self.presentation.is_some()
    }

    /// Monotonic counter bumped by every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn slides(&self) -> &[Slide] {
        self.presentation
            .as_deref()
            .map(|p| p.slides.as_slice())
            .unwrap_or(&[])
    }

    /// Index of the selected slide; `0` also stands for "no slide" when the
    /// presentation is empty.
    pub fn current_slide_index(&self) -> usize {
        self.current_slide_index
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides().get(self.current_slide_index)
    }

    /// Content of the current slide, in order.
    pub fn current_slide_contents(&self) -> &[Content] {
        self.current_slide()
            .map(|s| s.content.as_slice())
            .unwrap_or(&[])
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        if self.edit_mode != edit_mode {
            self.edit_mode = edit_mode;
            self.touch();
        }
    }

    // === Document lifecycle ===

    /// Replace the open document (or close it with `None`).
    ///
    /// Selection and focus reset. Content orders of the incoming document are
    /// normalised by position.
    pub fn set_presentation(&mut self, presentation: Option<Presentation>) {
        self.presentation = presentation.map(|mut p| {
            for slide in &mut p.slides {
                reindex(&mut slide.content);
            }
            Rc::new(p)
        });
        self.current_slide_index = 0;
        self.focused_content_id = None;
        self.touch();
    }

    /// Start a new, empty presentation and return its id.
    pub fn new_presentation(&mut self, title: impl Into<String>) -> String {
        let presentation = Presentation::new(title);
        let id = presentation.id.clone();
        tracing::info!(presentation_id = %id, "Created presentation");
        self.set_presentation(Some(presentation));
        id
    }

    /// Load `id` from `repo`.
    ///
    /// Returns `Ok(true)` when it was found. A missing id opens a fresh empty
    /// presentation under that id and returns `Ok(false)`. Backend failures
    /// are returned and leave the store untouched.
    pub fn load_from<R>(&mut self, repo: &R, id: &str) -> Result<bool>
    where
        R: PresentationRepository + ?Sized,
    {
        match repo.load(id)? {
            Some(presentation) => {
                tracing::info!(presentation_id = %id, slides = presentation.slides.len(), "Loaded presentation");
                self.set_presentation(Some(presentation));
                Ok(true)
            }
            None => {
                tracing::warn!(presentation_id = %id, "Presentation not found, starting a new one");
                self.set_presentation(Some(Presentation::with_id(id, "Untitled Presentation")));
                Ok(false)
            }
        }
    }

    /// Save the open presentation to `repo`.
    ///
    /// `updated_at` is stamped on the saved copy and only adopted in memory
    /// once the backend accepted it.
    pub fn save_to<R>(&mut self, repo: &mut R) -> Result<()>
    where
        R: PresentationRepository + ?Sized,
    {
        let current = self.presentation.as_ref().ok_or(EditorError::NoPresentation)?;
        let mut stamped = Presentation::clone(current);
        stamped.updated_at = Some(Utc::now());

        if let Err(err) = repo.save(&stamped) {
            tracing::error!(presentation_id = %stamped.id, "Save failed: {}", err);
            return Err(err);
        }

        tracing::info!(presentation_id = %stamped.id, "Saved presentation");
        self.presentation = Some(Rc::new(stamped));
        self.touch();
        Ok(())
    }

    /// Record the theme the presentation is shown with. `None` falls back
    /// to the default theme on the next load.
    pub fn set_theme(&mut self, theme_id: Option<&str>) -> bool {
        if self.presentation.as_ref().map(|p| p.theme.as_deref()) == Some(theme_id) {
            return false;
        }
        self.mutate(|p| {
            p.theme = theme_id.map(str::to_owned);
            Some(())
        })
        .is_some()
    }

    // === Slide navigation ===

    /// Make the slide at `index` current. Focus is cleared.
    pub fn select_slide(&mut self, index: usize) -> bool {
        if index >= self.slides().len() {
            tracing::debug!(index, "Ignoring selection of out-of-range slide");
            return false;
        }
        if index == self.current_slide_index {
            return false;
        }
        self.current_slide_index = index;
        self.focused_content_id = None;
        self.touch();
        true
    }

    pub fn next_slide(&mut self) -> bool {
        self.select_slide(self.current_slide_index + 1)
    }

    pub fn previous_slide(&mut self) -> bool {
        match self.current_slide_index.checked_sub(1) {
            Some(index) => self.select_slide(index),
            None => false,
        }
    }

    // === Slide mutations ===

    /// Append a slide built from `patch` and select it.
    ///
    /// Returns `None` when no presentation is loaded.
    pub fn add_slide(&mut self, patch: &SlidePatch) -> Option<String> {
        let slide = Slide::from_patch(patch, &self.default_slide_title);
        let id = slide.id.clone();

        let new_len = self.mutate(move |p| {
            p.slides.push(slide);
            Some(p.slides.len())
        });
        let Some(new_len) = new_len else {
            tracing::warn!("Cannot add slide: no presentation loaded");
            return None;
        };

        self.current_slide_index = new_len - 1;
        self.focused_content_id = None;
        Some(id)
    }

    /// Merge `patch` into the slide with `id`. The id itself never changes.
    pub fn update_slide(&mut self, id: &str, patch: &SlidePatch) -> bool {
        let updated = self.mutate(|p| {
            let slide = p.slides.iter_mut().find(|s| s.id == id)?;
            slide.apply(patch);
            Some(())
        });
        if updated.is_none() {
            tracing::warn!(slide_id = %id, "Cannot update slide: not found");
        }
        updated.is_some()
    }

    /// Remove the slide with `id`.
    ///
    /// When the removed slide sat at or before the current index the index
    /// moves back by one (never below zero), so the same slide stays
    /// selected where possible.
    pub fn delete_slide(&mut self, id: &str) -> bool {
        let removed_at = self.mutate(|p| {
            let position = p.slide_index(id)?;
            p.slides.remove(position);
            Some(position)
        });
        let Some(position) = removed_at else {
            tracing::warn!(slide_id = %id, "Cannot delete slide: not found");
            return false;
        };

        if position == self.current_slide_index {
            self.focused_content_id = None;
        }
        if self.slides().is_empty() {
            self.current_slide_index = 0;
        } else if position <= self.current_slide_index {
            self.current_slide_index = self.current_slide_index.saturating_sub(1);
        }
        true
    }

    /// Move the slide at `source_index` to `target_index`.
    ///
    /// Both indices must address an existing slide; equal indices are a
    /// no-op. The current index follows the selected slide.
    pub fn reorder_slide(&mut self, source_index: usize, target_index: usize) -> bool {
        let len = self.slides().len();
        if source_index == target_index {
            return false;
        }
        if source_index >= len || target_index >= len {
            tracing::debug!(source_index, target_index, len, "Rejected slide reorder");
            return false;
        }

        let moved = self.mutate(|p| move_item(&mut p.slides, source_index, target_index).then_some(()));
        if moved.is_none() {
            return false;
        }

        let index = track_index_after_move(self.current_slide_index, source_index, target_index);
        self.current_slide_index = index.min(len - 1);
        true
    }

    // === Content mutations (current slide) ===

    /// Append a default block of `content_type` to the current slide,
    /// patched with `partial`, and focus it.
    ///
    /// Returns `None` if there is no current slide.
    pub fn add_content(&mut self, content_type: ContentType, partial: Option<&ContentPatch>) -> Option<Content> {
        let Some(index) = self.current_index_if_valid() else {
            tracing::error!(%content_type, "Cannot add content: no current slide selected");
            return None;
        };

        let added = self.mutate(|p| {
            let slide = p.slides.get_mut(index)?;
            let mut content = create_default_content(content_type, slide.content.len());
            if let Some(partial) = partial {
                content = merge_content_update(&content, partial);
            }
            slide.content.push(content.clone());
            Some(content)
        })?;

        self.focused_content_id = Some(added.id().to_string());
        Some(added)
    }

    /// Merge `patch` into the content item `id` of the current slide.
    pub fn update_content(&mut self, id: &str, patch: &ContentPatch) -> bool {
        let updated = self.mutate_current_slide(|slide| {
            let item = slide.content.iter_mut().find(|c| c.id() == id)?;
            *item = merge_content_update(item, patch);
            Some(())
        });
        if updated.is_none() {
            tracing::warn!(content_id = %id, "Cannot update content: not on the current slide");
        }
        updated.is_some()
    }

    /// Remove the content item `id` and reindex the rest by position.
    pub fn delete_content(&mut self, id: &str) -> bool {
        let deleted = self.mutate_current_slide(|slide| {
            remove_and_reindex(&mut slide.content, |c| c.id() == id).map(|_| ())
        });
        if deleted.is_none() {
            tracing::warn!(content_id = %id, "Cannot delete content: not on the current slide");
            return false;
        }
        if self.focused_content_id.as_deref() == Some(id) {
            self.focused_content_id = None;
        }
        true
    }

    /// Move content item `id` to `new_order` (clamped to the last position)
    /// and reindex every item by position.
    pub fn reorder_content(&mut self, id: &str, new_order: usize) -> bool {
        let contents = self.current_slide_contents();
        let Some(old_index) = contents.iter().position(|c| c.id() == id) else {
            tracing::warn!(content_id = %id, "Cannot reorder content: not on the current slide");
            return false;
        };
        let target_index = new_order.min(contents.len() - 1);
        if old_index == target_index {
            return false;
        }

        self.mutate_current_slide(|slide| {
            move_item(&mut slide.content, old_index, target_index).then(|| reindex(&mut slide.content))
        })
        .is_some()
    }

    pub fn move_content_up(&mut self, id: &str) -> bool {
        match self.content_position(id) {
            Some(position) if position > 0 => self.reorder_content(id, position - 1),
            _ => false,
        }
    }

    pub fn move_content_down(&mut self, id: &str) -> bool {
        match self.content_position(id) {
            Some(position) => self.reorder_content(id, position + 1),
            None => false,
        }
    }

    fn content_position(&self, id: &str) -> Option<usize> {
        self.current_slide_contents().iter().position(|c| c.id() == id)
    }

    // === Focus ===

    /// The focused content id, if it still names an item on the current
    /// slide.
    pub fn focused_content_id(&self) -> Option<&str> {
        let id = self.focused_content_id.as_deref()?;
        self.current_slide()?.content_by_id(id).map(|c| c.id())
    }

    pub fn focused_content(&self) -> Option<&Content> {
        let id = self.focused_content_id.as_deref()?;
        self.current_slide()?.content_by_id(id)
    }

    /// Focus `id` (or clear focus with `None`).
    ///
    /// Ids that are not on the current slide are refused.
    pub fn set_focused_content(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                if self.focused_content_id.take().is_some() {
                    self.touch();
                }
                true
            }
            Some(id) => {
                if self.current_slide().and_then(|s| s.content_by_id(id)).is_none() {
                    tracing::warn!(content_id = %id, "Cannot focus content: not on the current slide");
                    return false;
                }
                if self.focused_content_id.as_deref() != Some(id) {
                    self.focused_content_id = Some(id.to_string());
                    self.touch();
                }
                true
            }
        }
    }

    /// A click on a content block focuses it outside edit mode.
    pub fn click_content(&mut self, id: &str) -> bool {
        if self.edit_mode {
            return false;
        }
        self.set_focused_content(Some(id))
    }

    // === Free-form elements (current slide) ===

    pub fn add_element(&mut self, element: SlideElement) -> Option<String> {
        let id = element.id.clone();
        let added = self.mutate_current_slide(move |slide| {
            slide.elements.push(element);
            Some(())
        });
        if added.is_none() {
            tracing::error!("Cannot add element: no current slide selected");
            return None;
        }
        Some(id)
    }

    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> bool {
        let updated = self.mutate_current_slide(|slide| {
            let element = slide.elements.iter_mut().find(|e| e.id == id)?;
            element.apply(patch);
            Some(())
        });
        if updated.is_none() {
            tracing::warn!(element_id = %id, "Cannot update element: not on the current slide");
        }
        updated.is_some()
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        let deleted = self.mutate_current_slide(|slide| {
            let position = slide.elements.iter().position(|e| e.id == id)?;
            slide.elements.remove(position);
            Some(())
        });
        if deleted.is_none() {
            tracing::warn!(element_id = %id, "Cannot delete element: not on the current slide");
        }
        deleted.is_some()
    }

    /// Commit a drag of the elements in `ids` by `(dx, dy)`, snapping each
    /// final position to `grid_unit`. Returns how many elements moved.
    pub fn commit_element_drag(&mut self, ids: &HashSet<String>, dx: f32, dy: f32, grid_unit: f32) -> usize {
        if ids.is_empty() {
            return 0;
        }
        self.mutate_current_slide(|slide| {
            let mut moved = 0;
            for element in slide.elements.iter_mut().filter(|e| ids.contains(&e.id)) {
                element.position = snapped_drop_position(element.position, dx, dy, grid_unit);
                moved += 1;
            }
            (moved > 0).then_some(moved)
        })
        .unwrap_or(0)
    }

    // === Internals ===

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn current_index_if_valid(&self) -> Option<usize> {
        (self.current_slide_index < self.slides().len()).then_some(self.current_slide_index)
    }

    /// Run `f` on a working copy of the presentation. The copy replaces the
    /// snapshot only if `f` returns `Some`.
    fn mutate<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Presentation) -> Option<R>,
    {
        let mut working = Presentation::clone(self.presentation.as_ref()?);
        let result = f(&mut working)?;
        self.presentation = Some(Rc::new(working));
        self.touch();
        Some(result)
    }

    fn mutate_current_slide<F, R>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut Slide) -> Option<R>,
    {
        let index = self.current_index_if_valid()?;
        self.mutate(|p| f(p.slides.get_mut(index)?))
    }
}
