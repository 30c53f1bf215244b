//! Keeping Slint models in step with the document store.
//!
//! The front end declares its own row structs in `.slint`; the library only
//! knows how to fill them. Bind a `VecModel` once with a constructor closure
//! and every [`ModelBindings::sync`] rewrites its rows from the store.
//!
//! ```ignore
//! let slides = Rc::new(VecModel::<SlideItem>::default());
//! bindings.bind_slides(slides.clone(), |index, id, title, current| SlideItem {
//!     index,
//!     id,
//!     title,
//!     current,
//! });
//! window.set_slides(ModelRc::from(slides));
//! ```

use crate::store::DocumentStore;
use slint::{Model, ModelRc, SharedString, VecModel};
use std::rc::Rc;

/// Internal trait for auto-syncing to Slint models.
trait ModelSyncer {
    fn sync(&self, store: &DocumentStore);
}

struct SlideListSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<P, F> ModelSyncer for SlideListSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(i32, SharedString, SharedString, bool) -> P,
{
    fn sync(&self, store: &DocumentStore) {
        sync_rows(&self.model, slide_rows(store, &self.constructor));
    }
}

struct ContentListSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<P, F> ModelSyncer for ContentListSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(SharedString, SharedString, SharedString, i32, bool) -> P,
{
    fn sync(&self, store: &DocumentStore) {
        sync_rows(&self.model, content_rows(store, &self.constructor));
    }
}

struct ElementListSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<P, F> ModelSyncer for ElementListSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(SharedString, SharedString, f32, f32, f32, f32) -> P,
{
    fn sync(&self, store: &DocumentStore) {
        let rows = store
            .current_slide()
            .map(|slide| slide.elements.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|element| {
                let (x, y, w, h) = element.rect();
                (self.constructor)(
                    element.id.as_str().into(),
                    element.element_type.as_str().into(),
                    x,
                    y,
                    w,
                    h,
                )
            })
            .collect();
        sync_rows(&self.model, rows);
    }
}

fn slide_rows<P, F>(store: &DocumentStore, constructor: &F) -> Vec<P>
where
    F: Fn(i32, SharedString, SharedString, bool) -> P,
{
    let current = store.current_slide_index();
    store
        .slides()
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            constructor(
                index as i32,
                slide.id.as_str().into(),
                slide.title.as_str().into(),
                index == current,
            )
        })
        .collect()
}

fn content_rows<P, F>(store: &DocumentStore, constructor: &F) -> Vec<P>
where
    F: Fn(SharedString, SharedString, SharedString, i32, bool) -> P,
{
    let focused = store.focused_content_id();
    store
        .current_slide_contents()
        .iter()
        .map(|content| {
            constructor(
                content.id().into(),
                content.content_type().as_str().into(),
                content.summary().into(),
                content.order() as i32,
                focused == Some(content.id()),
            )
        })
        .collect()
}

/// Update rows in place, append new ones and drop the excess.
fn sync_rows<P: Clone + 'static>(model: &VecModel<P>, rows: Vec<P>) {
    let len = rows.len();
    for (i, item) in rows.into_iter().enumerate() {
        if i < model.row_count() {
            model.set_row_data(i, item);
        } else {
            model.push(item);
        }
    }
    while model.row_count() > len {
        model.remove(model.row_count() - 1);
    }
}

/// Registered model bindings.
#[derive(Default)]
pub struct ModelBindings {
    syncers: Vec<Box<dyn ModelSyncer>>,
}

impl ModelBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the slide list. Constructor arguments:
    /// `(index, id, title, is_current)`.
    pub fn bind_slides<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(i32, SharedString, SharedString, bool) -> P + 'static,
    {
        self.syncers.push(Box::new(SlideListSyncer { model, constructor }));
    }

    /// Bind the content list of the current slide. Constructor arguments:
    /// `(id, type, summary, order, is_focused)`.
    pub fn bind_contents<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(SharedString, SharedString, SharedString, i32, bool) -> P + 'static,
    {
        self.syncers.push(Box::new(ContentListSyncer { model, constructor }));
    }

    /// Bind the free-form elements of the current slide. Constructor
    /// arguments: `(id, type, x, y, width, height)` in canvas units.
    pub fn bind_elements<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(SharedString, SharedString, f32, f32, f32, f32) -> P + 'static,
    {
        self.syncers.push(Box::new(ElementListSyncer { model, constructor }));
    }

    /// Rewrite every bound model from `store`.
    pub fn sync(&self, store: &DocumentStore) {
        for syncer in &self.syncers {
            syncer.sync(store);
        }
    }

    pub fn len(&self) -> usize {
        self.syncers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syncers.is_empty()
    }
}

/// One-shot slide list model, for UIs that rebuild instead of binding.
pub fn slides_model<P, F>(store: &DocumentStore, constructor: F) -> ModelRc<P>
where
    P: Clone + 'static,
    F: Fn(i32, SharedString, SharedString, bool) -> P,
{
    ModelRc::from(Rc::new(VecModel::from(slide_rows(store, &constructor))))
}

/// One-shot content list model for the current slide.
pub fn contents_model<P, F>(store: &DocumentStore, constructor: F) -> ModelRc<P>
where
    P: Clone + 'static,
    F: Fn(SharedString, SharedString, SharedString, i32, bool) -> P,
{
    ModelRc::from(Rc::new(VecModel::from(content_rows(store, &constructor))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentPatch, ContentType};
    use crate::slide::{Point, SlideElement, SlidePatch};

    type SlideRow = (i32, SharedString, bool);
    type ContentRow = (SharedString, i32, bool);

    fn store_with_deck() -> DocumentStore {
        let mut store = DocumentStore::new();
        store.new_presentation("Deck");
        store.add_slide(&SlidePatch::titled("Intro"));
        store.add_slide(&SlidePatch::titled("Agenda"));
        store
    }

    fn bound() -> (ModelBindings, Rc<VecModel<SlideRow>>, Rc<VecModel<ContentRow>>) {
        let mut bindings = ModelBindings::new();
        let slides: Rc<VecModel<SlideRow>> = Rc::new(VecModel::default());
        let contents: Rc<VecModel<ContentRow>> = Rc::new(VecModel::default());
        bindings.bind_slides(slides.clone(), |index, _id, title, current| (index, title, current));
        bindings.bind_contents(contents.clone(), |_id, _ty, summary, order, focused| {
            (summary, order, focused)
        });
        (bindings, slides, contents)
    }

    #[test]
    fn test_new_bindings_are_empty() {
        let bindings = ModelBindings::new();
        assert!(bindings.is_empty());
        assert_eq!(bindings.len(), 0);
    }

    #[test]
    fn test_sync_fills_slide_rows() {
        let store = store_with_deck();
        let (bindings, slides, _) = bound();
        bindings.sync(&store);

        let rows: Vec<SlideRow> = slides.iter().collect();
        assert_eq!(
            rows,
            vec![(0, "Intro".into(), false), (1, "Agenda".into(), true)]
        );
    }

    #[test]
    fn test_sync_tracks_content_and_focus() {
        let mut store = store_with_deck();
        let (bindings, _, contents) = bound();

        let patch = ContentPatch {
            content: Some("Hello".into()),
            ..Default::default()
        };
        store.add_content(ContentType::Text, Some(&patch));
        bindings.sync(&store);
        let rows: Vec<ContentRow> = contents.iter().collect();
        assert_eq!(rows, vec![("Hello".into(), 0, true)]);
    }

    #[test]
    fn test_sync_removes_excess_rows() {
        let mut store = store_with_deck();
        let (bindings, slides, _) = bound();
        bindings.sync(&store);
        assert_eq!(slides.row_count(), 2);

        let id = store.slides()[0].id.clone();
        store.delete_slide(&id);
        bindings.sync(&store);
        assert_eq!(slides.row_count(), 1);
        assert_eq!(slides.row_data(0).map(|r| r.1), Some("Agenda".into()));
    }

    #[test]
    fn test_element_binding() {
        let mut store = store_with_deck();
        store.add_element(SlideElement::new("shape", Point::new(8.0, 16.0)).with_size(40.0, 24.0));

        let mut bindings = ModelBindings::new();
        let elements: Rc<VecModel<(f32, f32, f32, f32)>> = Rc::new(VecModel::default());
        bindings.bind_elements(elements.clone(), |_id, _ty, x, y, w, h| (x, y, w, h));
        bindings.sync(&store);

        assert_eq!(elements.row_data(0), Some((8.0, 16.0, 40.0, 24.0)));
    }

    #[test]
    fn test_one_shot_models() {
        let store = store_with_deck();
        let model = slides_model(&store, |_index, _id, title, _current| title);
        assert_eq!(model.row_count(), 2);
        assert_eq!(model.row_data(0), Some(SharedString::from("Intro")));

        let model = contents_model(&store, |id, _ty, _summary, _order, _focused| id);
        assert_eq!(model.row_count(), 0);
    }
}
