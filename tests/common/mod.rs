//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_slide_editor::Change;
use std::cell::RefCell;
use std::rc::Rc;

/// Records change notifications from the controller.
#[derive(Default, Clone)]
pub struct ChangeTracker {
    pub changes: Rc<RefCell<Vec<Change>>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, change: Change) -> usize {
        self.changes.borrow().iter().filter(|c| **c == change).count()
    }

    pub fn total(&self) -> usize {
        self.changes.borrow().len()
    }

    /// Clear all recorded changes.
    pub fn clear(&self) {
        self.changes.borrow_mut().clear();
    }
}
