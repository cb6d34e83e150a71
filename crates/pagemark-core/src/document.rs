//! Canvas document store.
//!
//! The authoritative element collection for one canvas, plus canvas view
//! state (zoom, pan, dimensions, background). All mutation goes through
//! the methods here; observers read either borrowed views that cannot
//! outlive a mutation, or owned deep-copy snapshots.

use crate::element::{
    Element, ElementId, ElementPayload, ElementUpdate, NewElement, TextProps, TextUpdate,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum allowed zoom level.
pub const MIN_ZOOM: f64 = 0.1;
/// Maximum allowed zoom level.
pub const MAX_ZOOM: f64 = 5.0;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Options for the text-element convenience constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextOptions {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub content: String,
    /// Source text; defaults to `content` when absent.
    pub original_content: Option<String>,
}

/// The element collection and view state of one canvas.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Elements in insertion order. The store keeps this ascending by
    /// z-index: adds append with z = len, reorders renumber by position.
    elements: Vec<Element>,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    width: f64,
    height: f64,
    background_image: Option<String>,
    /// Bumped on every mutation.
    version: u64,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background_image: None,
            version: 0,
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    /// Mutation counter; increases on every state change.
    pub fn version(&self) -> u64 {
        self.version
    }

    // View state ----------------------------------------------------------

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom level, clamped to [MIN_ZOOM, MAX_ZOOM].
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.bump();
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
        self.bump();
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.bump();
    }

    pub fn background_image(&self) -> Option<&str> {
        self.background_image.as_deref()
    }

    pub fn set_background_image(&mut self, src: Option<String>) {
        self.background_image = src;
        self.bump();
    }

    // Element CRUD --------------------------------------------------------

    /// Add an element. A fresh id is assigned and the element becomes
    /// topmost (z-index = previous element count). Returns a copy of the
    /// created element.
    pub fn add_element(&mut self, new: NewElement) -> Element {
        let element = Element::new(Uuid::new_v4(), self.elements.len(), new);
        log::trace!("add element {} ({})", element.id(), element.payload().kind());
        self.elements.push(element.clone());
        self.bump();
        element
    }

    /// Add a fully-populated text element with default typography and
    /// pending translation status.
    pub fn add_text_element(&mut self, options: TextOptions) -> Element {
        let payload =
            ElementPayload::Text(TextProps::new(options.content, options.original_content));
        self.add_element(NewElement::new(
            options.x,
            options.y,
            options.width,
            options.height,
            payload,
        ))
    }

    /// Shallow-merge base attributes into the matching element.
    /// No-op if the id is absent.
    pub fn update_element(&mut self, id: ElementId, update: ElementUpdate) {
        match self.elements.iter_mut().find(|el| el.id() == id) {
            Some(element) => {
                update.apply(element);
                self.bump();
            }
            None => log::debug!("update of missing element {id} ignored"),
        }
    }

    /// Merge into the text payload of the matching element.
    /// No-op if the id is absent or the element is not a text element.
    pub fn update_text_element(&mut self, id: ElementId, update: TextUpdate) {
        match self
            .elements
            .iter_mut()
            .find(|el| el.id() == id)
            .and_then(|el| el.as_text_mut())
        {
            Some(text) => {
                update.apply(text);
                self.bump();
            }
            None => log::debug!("text update of missing or non-text element {id} ignored"),
        }
    }

    /// Remove the matching element. Survivors keep their z-index values;
    /// the gap is not compacted (reorder/bring/send renumber densely).
    pub fn delete_element(&mut self, id: ElementId) {
        self.elements.retain(|el| el.id() != id);
        self.bump();
    }

    /// Remove all matching elements. Same gap semantics as single delete.
    pub fn delete_elements(&mut self, ids: &[ElementId]) {
        self.elements.retain(|el| !ids.contains(&el.id()));
        self.bump();
    }

    /// Move an element to the requested position among the others (ordered
    /// by current z-index) and renumber all elements densely to [0, N).
    /// Out-of-range positions insert at the end. No-op if the id is absent.
    pub fn reorder_element(&mut self, id: ElementId, new_z_index: usize) {
        let Some(position) = self.elements.iter().position(|el| el.id() == id) else {
            log::debug!("reorder of missing element {id} ignored");
            return;
        };
        let element = self.elements.remove(position);
        let insert_at = new_z_index.min(self.elements.len());
        self.elements.insert(insert_at, element);
        self.renumber();
        self.bump();
    }

    /// Move an element to the highest z-index, renumbering the rest densely
    /// and preserving their relative order.
    pub fn bring_to_front(&mut self, id: ElementId) {
        let Some(position) = self.elements.iter().position(|el| el.id() == id) else {
            return;
        };
        let element = self.elements.remove(position);
        self.elements.push(element);
        self.renumber();
        self.bump();
    }

    /// Move an element to the lowest z-index, renumbering the rest densely
    /// and preserving their relative order.
    pub fn send_to_back(&mut self, id: ElementId) {
        let Some(position) = self.elements.iter().position(|el| el.id() == id) else {
            return;
        };
        let element = self.elements.remove(position);
        self.elements.insert(0, element);
        self.renumber();
        self.bump();
    }

    fn renumber(&mut self) {
        for (index, element) in self.elements.iter_mut().enumerate() {
            element.z_index = index;
        }
    }

    // Queries -------------------------------------------------------------

    /// All elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get an element by id.
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id() == id)
    }

    /// Copies of the elements matching `ids`; dangling ids are dropped.
    pub fn elements_by_ids(&self, ids: &[ElementId]) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|el| ids.contains(&el.id()))
            .cloned()
            .collect()
    }

    /// Elements in paint order (ascending z-index), as an owned snapshot.
    pub fn sorted_elements(&self) -> Vec<Element> {
        let mut sorted = self.elements.clone();
        sorted.sort_by_key(|el| el.z_index());
        sorted
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Remove all elements.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
        self.bump();
    }

    // History integration -------------------------------------------------

    /// Deep copy of the full element list for history checkpointing.
    pub fn get_state(&self) -> Vec<Element> {
        self.elements.clone()
    }

    /// Replace the entire collection atomically with a snapshot.
    pub fn set_state(&mut self, state: Vec<Element>) {
        self.elements = state;
        self.bump();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ShapeKind, ShapeProps, TranslationStatus};
    use std::collections::HashSet;

    fn shape(doc: &mut DocumentStore) -> Element {
        doc.add_element(NewElement::new(
            0.0,
            0.0,
            100.0,
            100.0,
            ElementPayload::Shape(ShapeProps::new(ShapeKind::Rectangle)),
        ))
    }

    #[test]
    fn test_add_assigns_dense_z_indices() {
        let mut doc = DocumentStore::new();
        for _ in 0..5 {
            shape(&mut doc);
        }
        let indices: HashSet<usize> = doc.elements().iter().map(|el| el.z_index()).collect();
        assert_eq!(indices, (0..5).collect());
    }

    #[test]
    fn test_add_returns_created_element() {
        let mut doc = DocumentStore::new();
        let created = shape(&mut doc);
        assert_eq!(doc.get_element(created.id()).map(|el| el.id()), Some(created.id()));
        assert_eq!(created.z_index(), 0);
    }

    #[test]
    fn test_add_text_element_defaults() {
        let mut doc = DocumentStore::new();
        let el = doc.add_text_element(TextOptions {
            x: 10.0,
            y: 20.0,
            width: 120.0,
            height: 40.0,
            content: "こんにちは".to_string(),
            original_content: None,
        });
        let text = el.as_text().unwrap();
        assert_eq!(text.content, "こんにちは");
        assert_eq!(text.original_content, "こんにちは");
        assert_eq!(text.status, TranslationStatus::Pending);
        assert_eq!(text.font_family, "Arial");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut doc = DocumentStore::new();
        shape(&mut doc);
        let before = doc.get_state();
        doc.update_element(
            Uuid::new_v4(),
            ElementUpdate {
                x: Some(999.0),
                ..Default::default()
            },
        );
        assert_eq!(before.len(), doc.len());
        assert!((doc.elements()[0].x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_update_on_shape_is_noop() {
        let mut doc = DocumentStore::new();
        let el = shape(&mut doc);
        doc.update_text_element(
            el.id(),
            TextUpdate {
                content: Some("nope".to_string()),
                ..Default::default()
            },
        );
        assert!(doc.get_element(el.id()).unwrap().as_text().is_none());
    }

    #[test]
    fn test_delete_leaves_z_gap() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let b = shape(&mut doc);
        let c = shape(&mut doc);

        doc.delete_element(b.id());

        assert!(doc.get_element(b.id()).is_none());
        let remaining: Vec<usize> = doc.elements().iter().map(|el| el.z_index()).collect();
        // Indices are not compacted: 0 and 2 survive
        assert_eq!(remaining, vec![0, 2]);
        // Pairwise order unchanged
        assert!(doc.get_element(a.id()).unwrap().z_index() < doc.get_element(c.id()).unwrap().z_index());
    }

    #[test]
    fn test_delete_elements_bulk() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let b = shape(&mut doc);
        let c = shape(&mut doc);
        doc.delete_elements(&[a.id(), c.id()]);
        assert_eq!(doc.len(), 1);
        assert!(doc.get_element(b.id()).is_some());
    }

    #[test]
    fn test_bring_to_front() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let b = shape(&mut doc);
        let c = shape(&mut doc);

        doc.bring_to_front(a.id());

        let order: Vec<ElementId> = doc.sorted_elements().iter().map(|el| el.id()).collect();
        assert_eq!(order, vec![b.id(), c.id(), a.id()]);
        let indices: Vec<usize> = doc.sorted_elements().iter().map(|el| el.z_index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_send_to_back() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let b = shape(&mut doc);
        let c = shape(&mut doc);

        doc.send_to_back(c.id());

        let order: Vec<ElementId> = doc.sorted_elements().iter().map(|el| el.id()).collect();
        assert_eq!(order, vec![c.id(), a.id(), b.id()]);
    }

    #[test]
    fn test_reorder_element() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let b = shape(&mut doc);
        let c = shape(&mut doc);

        doc.reorder_element(c.id(), 0);

        let order: Vec<ElementId> = doc.sorted_elements().iter().map(|el| el.id()).collect();
        assert_eq!(order, vec![c.id(), a.id(), b.id()]);
    }

    #[test]
    fn test_reorder_out_of_range_appends() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let b = shape(&mut doc);

        doc.reorder_element(a.id(), 99);

        let order: Vec<ElementId> = doc.sorted_elements().iter().map(|el| el.id()).collect();
        assert_eq!(order, vec![b.id(), a.id()]);
        assert_eq!(doc.get_element(a.id()).unwrap().z_index(), 1);
    }

    #[test]
    fn test_elements_by_ids_drops_dangling() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let found = doc.elements_by_ids(&[a.id(), Uuid::new_v4()]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), a.id());
    }

    #[test]
    fn test_zoom_clamp() {
        let mut doc = DocumentStore::new();
        doc.set_zoom(10.0);
        assert!((doc.zoom() - MAX_ZOOM).abs() < f64::EPSILON);
        doc.set_zoom(0.0);
        assert!((doc.zoom() - MIN_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_state_roundtrip_is_deep() {
        let mut doc = DocumentStore::new();
        let a = shape(&mut doc);
        let snapshot = doc.get_state();

        doc.update_element(
            a.id(),
            ElementUpdate {
                x: Some(500.0),
                ..Default::default()
            },
        );
        // Snapshot is unaffected by the later mutation
        assert!((snapshot[0].x).abs() < f64::EPSILON);

        doc.set_state(snapshot);
        assert!((doc.get_element(a.id()).unwrap().x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_version_bumps_on_mutation() {
        let mut doc = DocumentStore::new();
        let v0 = doc.version();
        shape(&mut doc);
        assert!(doc.version() > v0);
    }
}
