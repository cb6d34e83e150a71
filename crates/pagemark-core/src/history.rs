//! Undo/redo history engine.
//!
//! The engine is agnostic to what an action changed; it stores and hands
//! back snapshots. The document-store caller pushes an action immediately
//! after each undoable mutation, applies `before` snapshots on undo and
//! `after` snapshots on redo via `DocumentStore::set_state`.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of past actions to keep.
pub const MAX_HISTORY: usize = 50;

/// What kind of edit an action records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    Move,
    Reorder,
    Batch,
}

/// One undoable/redoable edit record with before/after snapshots.
///
/// Snapshots are owned element values: deep, independent copies that
/// later document mutations cannot retroactively alter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryAction {
    pub kind: ActionKind,
    /// Human-readable description, e.g. "Move 3 elements".
    pub description: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// The element(s) this action touched.
    pub element_ids: Vec<ElementId>,
    /// Pre-mutation snapshot(s); applied on undo.
    pub before: Vec<Element>,
    /// Post-mutation snapshot(s); applied on redo.
    pub after: Vec<Element>,
}

impl HistoryAction {
    /// Create an action stamped with the current time.
    pub fn new(
        kind: ActionKind,
        description: impl Into<String>,
        element_ids: Vec<ElementId>,
        before: Vec<Element>,
        after: Vec<Element>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            timestamp_ms: now_ms(),
            element_ids,
            before,
            after,
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Bounded linear history over two sequences: `past` (most-recent-last)
/// and `future` (cleared on every new push).
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    past: Vec<HistoryAction>,
    future: Vec<HistoryAction>,
}

impl HistoryStore {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.past.len()
    }

    /// Past actions, oldest first. Read-only view.
    pub fn past_actions(&self) -> &[HistoryAction] {
        &self.past
    }

    /// Future actions, next-redo first. Read-only view.
    pub fn future_actions(&self) -> &[HistoryAction] {
        &self.future
    }

    /// Record a new action. Evicts the oldest past entries over capacity
    /// and unconditionally clears the future (a new edit invalidates any
    /// undone branch).
    pub fn push(&mut self, action: HistoryAction) {
        self.past.push(action);
        if self.past.len() > MAX_HISTORY {
            let excess = self.past.len() - MAX_HISTORY;
            log::debug!("history over capacity, evicting {excess} oldest action(s)");
            self.past.drain(..excess);
        }
        self.future.clear();
    }

    /// Move the most recent past action to the future and return it.
    /// The caller applies its `before` snapshot. None if there is nothing
    /// to undo; the future is left untouched in that case.
    pub fn undo(&mut self) -> Option<HistoryAction> {
        let action = self.past.pop()?;
        self.future.insert(0, action.clone());
        Some(action)
    }

    /// Move the next future action back to the past and return it.
    /// The caller applies its `after` snapshot. None if there is nothing
    /// to redo; the past is left untouched in that case.
    pub fn redo(&mut self) -> Option<HistoryAction> {
        if self.future.is_empty() {
            return None;
        }
        let action = self.future.remove(0);
        // Append, not prepend: forward chronological order is restored.
        self.past.push(action.clone());
        Some(action)
    }

    /// Make `past[index]` the new present boundary.
    ///
    /// Everything before `index` stays past; the target entry, then the
    /// former later-past entries, then the old future become the new
    /// future, so one redo re-applies the target. Out-of-range is a
    /// no-op returning None.
    pub fn jump_to(&mut self, index: usize) -> Option<HistoryAction> {
        if index >= self.past.len() {
            log::debug!("jump to out-of-range history index {index} ignored");
            return None;
        }
        let mut detached = self.past.split_off(index);
        let target = detached[0].clone();
        detached.append(&mut self.future);
        self.future = detached;
        Some(target)
    }

    /// Drop both sequences (e.g. on opening a new document).
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
