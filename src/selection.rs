use slint::{Model, SharedString, VecModel};
use std::collections::HashSet;

/// Set of selected free-form element ids on the current slide.
#[derive(Debug, Default, Clone)]
pub struct ElementSelection {
    selected: HashSet<String>,
}

impl ElementSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click on an element: shift toggles membership, a plain click selects
    /// only that element.
    ///
    /// Returns `true` if the selection changed.
    pub fn handle_click(&mut self, id: &str, shift_held: bool) -> bool {
        if shift_held {
            if !self.selected.remove(id) {
                self.selected.insert(id.to_string());
            }
            return true;
        }
        if self.selected.len() == 1 && self.selected.contains(id) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(id.to_string());
        true
    }

    /// Apply a rubber-band result. With `additive` the hits join the
    /// existing selection, otherwise they replace it.
    ///
    /// Returns `true` if the selection changed.
    pub fn select_box<I>(&mut self, ids: I, additive: bool) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        let hits: HashSet<String> = ids.into_iter().collect();
        if additive {
            let before = self.selected.len();
            self.selected.extend(hits);
            return self.selected.len() != before;
        }
        if self.selected == hits {
            return false;
        }
        self.selected = hits;
        true
    }

    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    /// Drop ids that no longer name a live element.
    pub fn retain_existing<'a, I>(&mut self, live_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let live: HashSet<&str> = live_ids.into_iter().collect();
        self.selected.retain(|id| live.contains(id.as_str()));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The selected ids, for handing to a bulk move.
    pub fn ids(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Selected ids in a stable (sorted) order.
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Mirror the selection into a Slint model, sorted for stable rows.
    pub fn sync_to_model(&self, model: &VecModel<SharedString>) {
        let ids: Vec<SharedString> = self.sorted_ids().into_iter().map(SharedString::from).collect();
        model.set_vec(ids);
    }

    /// Take the selection from a Slint model, e.g. after the UI edited it.
    pub fn sync_from_model(&mut self, model: &dyn Model<Data = SharedString>) {
        self.selected = (0..model.row_count()).filter_map(|i| model.row_data(i)).map(|id| id.to_string()).collect();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
