//! Selection and active-tool state.
//!
//! The selection references document elements by id only: no ownership,
//! no reconciliation. Deleting elements does NOT remove their ids from
//! the selection; collaborators that delete must clear or filter the
//! selection themselves, and lookups against stale ids simply come back
//! empty.

use crate::element::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Available interaction tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Text,
    Shape,
    Pan,
    Zoom,
}

/// The set of selected element ids plus the active tool.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selected: HashSet<ElementId>,
    active_tool: ToolKind,
}

impl SelectionStore {
    /// Create an empty selection with the select tool active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected ids (unordered).
    pub fn selected_ids(&self) -> &HashSet<ElementId> {
        &self.selected
    }

    /// Replace the selection with a single element.
    pub fn select(&mut self, id: ElementId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Replace the selection wholesale.
    pub fn select_multiple(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.selected = ids.into_iter().collect();
    }

    /// Replace the selection with every given id (select-all semantics).
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.select_multiple(ids);
    }

    /// Add one id to the existing selection.
    pub fn add_to_selection(&mut self, id: ElementId) {
        self.selected.insert(id);
    }

    /// Remove one id from the selection.
    pub fn remove_from_selection(&mut self, id: ElementId) {
        self.selected.remove(&id);
    }

    /// Toggle one id's membership.
    pub fn toggle_selection(&mut self, id: ElementId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_multi_select(&self) -> bool {
        self.selected.len() > 1
    }

    /// The sole selected id if exactly one element is selected.
    pub fn single_selected_id(&self) -> Option<ElementId> {
        if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    /// Switch the interaction mode.
    pub fn set_active_tool(&mut self, tool: ToolKind) {
        log::trace!("active tool -> {tool:?}");
        self.active_tool = tool;
    }
}
