//! Document store and undo/redo history.

use crate::connection::{Connection, ConnectionPatch};
use crate::elements::{
    CircleElement, Element, ElementId, ElementPatch, LineElement, RectElement, StarElement,
    TextElement, TriangleElement,
};
use crate::scene::Scene;
use kurbo::Point;
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use uuid::Uuid;

/// Default maximum number of history snapshots to keep.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Errors raised when loading a scene into a store.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid scene JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("duplicate element id: {0}")]
    DuplicateElementId(String),
}

/// The authoritative mutable state of one document: the present scene plus
/// bounded undo/redo history.
///
/// Every command runs synchronously to completion on the caller's thread;
/// the store is the sole mutator of scene data. Commands never panic and
/// never fail: a command whose target id does not resolve is a silent no-op
/// on the data (logged at debug level).
///
/// History is a list of full deep-copy snapshots of the scene. Every
/// mutating command pushes the pre-edit scene onto `past` and clears
/// `future` before touching anything, so any mutation can be undone and a
/// new edit discards the redo path. The snapshot is taken before the target
/// lookup, so a no-op update still records a history entry.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// The current scene.
    present: Scene,
    /// Undo snapshots, oldest first.
    past: Vec<Scene>,
    /// Redo snapshots, nearest first.
    future: VecDeque<Scene>,
    /// Next element id to hand out. Monotonic, never reused.
    next_id: u64,
    /// Maximum number of `past` entries before the oldest is evicted.
    max_history: usize,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    /// Create a new empty store with the default history limit.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_MAX_HISTORY)
    }

    /// Create a new empty store keeping at most `max_history` undo snapshots.
    pub fn with_history_limit(max_history: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            present: Scene::new(),
            past: Vec::new(),
            future: VecDeque::new(),
            next_id: 1,
            max_history,
        }
    }

    /// The current scene. Callers get shared read access only; all mutation
    /// goes through commands.
    pub fn present(&self) -> &Scene {
        &self.present
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Hand out a fresh element id.
    fn fresh_id(&mut self) -> ElementId {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    /// Push the present scene onto the undo stack and clear the redo stack.
    /// Called at the top of every mutating command.
    fn commit(&mut self) {
        self.past.push(self.present.clone());
        self.future.clear();
        if self.past.len() > self.max_history {
            trace!("history cap {} reached, evicting oldest snapshot", self.max_history);
            self.past.remove(0);
        }
    }

    /// Append a new text element with the sidebar defaults.
    pub fn add_text(&mut self) -> ElementId {
        self.add_element(Element::Text(TextElement::new(
            Point::new(50.0, 50.0),
            "Edit me",
        )))
    }

    /// Append a new rectangle with the sidebar defaults.
    pub fn add_rectangle(&mut self) -> ElementId {
        self.add_element(Element::Rect(RectElement::new(
            Point::new(100.0, 100.0),
            120.0,
            80.0,
        )))
    }

    /// Append a new circle with the sidebar defaults.
    pub fn add_circle(&mut self) -> ElementId {
        self.add_element(Element::Circle(CircleElement::new(
            Point::new(150.0, 150.0),
            50.0,
        )))
    }

    /// Append a new triangle with the sidebar defaults.
    pub fn add_triangle(&mut self) -> ElementId {
        self.add_element(Element::Triangle(TriangleElement::new(
            Point::new(200.0, 200.0),
            [
                Point::new(0.0, -50.0),
                Point::new(50.0, 50.0),
                Point::new(-50.0, 50.0),
            ],
        )))
    }

    /// Append a new line with the sidebar defaults.
    pub fn add_line(&mut self) -> ElementId {
        self.add_element(Element::Line(LineElement::new(
            Point::new(250.0, 250.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
        )))
    }

    /// Append a new star with the sidebar defaults.
    pub fn add_star(&mut self) -> ElementId {
        self.add_element(Element::Star(StarElement::new(
            Point::new(300.0, 300.0),
            25.0,
            50.0,
            5,
        )))
    }

    /// Append an element, overwriting whatever id it carried with a fresh
    /// store-assigned one. Returns the assigned id.
    pub fn add_element(&mut self, mut element: Element) -> ElementId {
        self.commit();
        let id = self.fresh_id();
        element.set_id(id.clone());
        self.present.push_element(element);
        id
    }

    /// Merge a partial update into the element with the given id.
    pub fn update_element(&mut self, id: &str, patch: ElementPatch) {
        self.commit();
        match self.present.element_mut(id) {
            Some(element) => element.apply_patch(&patch),
            None => debug!("update_element: no element with id {id}"),
        }
    }

    /// Remove the element with the given id, cascade-deleting every
    /// connection that references it.
    pub fn delete_element(&mut self, id: &str) {
        self.commit();
        if self.present.remove_element(id).is_none() {
            debug!("delete_element: no element with id {id}");
        }
    }

    /// Append a connection verbatim. Endpoints are not validated; a
    /// connection to a missing element is tolerated and filtered at render
    /// time.
    pub fn add_connection(&mut self, connection: Connection) {
        self.commit();
        self.present.push_connection(connection);
    }

    /// Merge a partial update into the connection with the given id.
    pub fn update_connection(&mut self, id: &str, patch: ConnectionPatch) {
        self.commit();
        match self.present.connection_mut(id) {
            Some(connection) => connection.apply_patch(&patch),
            None => debug!("update_connection: no connection with id {id}"),
        }
    }

    /// Remove the connection with the given id.
    pub fn delete_connection(&mut self, id: &str) {
        self.commit();
        if self.present.remove_connection(id).is_none() {
            debug!("delete_connection: no connection with id {id}");
        }
    }

    /// Undo the most recent mutation.
    /// Returns true if a snapshot was restored, false if there was nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(scene) => {
                let current = std::mem::replace(&mut self.present, scene);
                self.future.push_front(current);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone mutation.
    /// Returns true if a snapshot was restored, false if there was nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop_front() {
            Some(scene) => {
                let current = std::mem::replace(&mut self.present, scene);
                self.past.push(current);
                true
            }
            None => false,
        }
    }

    /// Serialize the present scene to JSON. History is not serialized.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.present.to_json()
    }

    /// Replace the present scene with one loaded from JSON.
    ///
    /// Rejects scenes with duplicate element ids. On success the history is
    /// cleared and the id counter is re-seeded past the highest numeric id
    /// in the loaded scene, so ids assigned afterwards never collide.
    pub fn load_scene(&mut self, json: &str) -> Result<(), DocumentError> {
        let scene = Scene::from_json(json)?;
        let mut seen = HashSet::new();
        for element in &scene.elements {
            if !seen.insert(element.id()) {
                return Err(DocumentError::DuplicateElementId(element.id().to_string()));
            }
        }
        let max_numeric = scene
            .elements
            .iter()
            .filter_map(|e| e.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_numeric + 1);
        self.present = scene;
        self.past.clear();
        self.future.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::ImageElement;

    #[test]
    fn test_store_starts_empty() {
        let store = DocumentStore::new();
        assert!(store.present().is_empty());
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_add_commands_assign_unique_ids() {
        let mut store = DocumentStore::new();
        let ids = vec![
            store.add_text(),
            store.add_rectangle(),
            store.add_circle(),
            store.add_triangle(),
            store.add_line(),
            store.add_star(),
            store.add_element(Element::Image(ImageElement::new(
                "data:image/png;base64,AAAA",
                Point::new(100.0, 100.0),
                200.0,
                150.0,
            ))),
        ];

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        let as_strs: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(as_strs, ["1", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(store.present().elements.len(), 7);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = DocumentStore::new();
        let first = store.add_rectangle();
        store.delete_element(&first);
        let second = store.add_rectangle();
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_element_overrides_caller_id() {
        let mut store = DocumentStore::new();
        let mut rect = RectElement::new(Point::ZERO, 10.0, 10.0);
        rect.id = "not-mine-to-pick".to_string();
        let id = store.add_element(Element::Rect(rect));
        assert_eq!(id, "1");
        assert!(store.present().contains_element("1"));
        assert!(!store.present().contains_element("not-mine-to-pick"));
    }

    #[test]
    fn test_update_element_merges_partial_fields() {
        let mut store = DocumentStore::new();
        let id = store.add_rectangle();

        store.update_element(
            &id,
            ElementPatch::new()
                .with_position(Point::new(10.0, 20.0))
                .with_width(200.0),
        );

        let Some(Element::Rect(rect)) = store.present().element(&id) else {
            panic!("rectangle missing after update");
        };
        assert_eq!(rect.position, Point::new(10.0, 20.0));
        assert!((rect.width - 200.0).abs() < f64::EPSILON);
        // Untouched fields keep their defaults.
        assert!((rect.height - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_missing_id_is_noop_but_recorded() {
        let mut store = DocumentStore::new();
        store.add_rectangle();
        let before = store.present().clone();

        store.update_element("404", ElementPatch::new().with_width(999.0));

        assert_eq!(store.present(), &before);
        // The snapshot was still taken: the first undo replays the no-op,
        // the second removes the rectangle.
        assert!(store.undo());
        assert_eq!(store.present(), &before);
        assert!(store.undo());
        assert!(store.present().is_empty());
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut store = DocumentStore::new();
        let id = store.add_circle();
        let before = store.present().clone();

        store.update_element(&id, ElementPatch::new().with_radius(75.0));
        let after = store.present().clone();
        assert_ne!(before, after);

        assert!(store.undo());
        assert_eq!(store.present(), &before);
        assert!(store.redo());
        assert_eq!(store.present(), &after);
    }

    #[test]
    fn test_add_is_undoable() {
        let mut store = DocumentStore::new();
        store.add_text();
        assert_eq!(store.present().elements.len(), 1);

        assert!(store.undo());
        assert!(store.present().is_empty());
        assert!(store.redo());
        assert_eq!(store.present().elements.len(), 1);
    }

    #[test]
    fn test_history_underflow_is_noop() {
        let mut store = DocumentStore::new();
        assert!(!store.undo());
        assert!(!store.redo());
        assert!(store.present().is_empty());
    }

    #[test]
    fn test_delete_cascades_and_undo_restores() {
        let mut store = DocumentStore::new();
        let rect = store.add_rectangle();
        let circle = store.add_circle();
        store.add_connection(Connection::new("c1", rect.clone(), circle.clone()));

        store.delete_element(&rect);

        assert_eq!(store.present().elements.len(), 1);
        assert_eq!(store.present().element(&circle).map(|e| e.id()), Some(circle.as_str()));
        assert!(store.present().connections.is_empty());

        // The snapshot taken just before the delete already held c1.
        assert!(store.undo());
        assert_eq!(store.present().elements.len(), 2);
        assert_eq!(store.present().connections.len(), 1);
        assert_eq!(store.present().connections[0].id, "c1");
    }

    #[test]
    fn test_redo_cleared_on_new_edit() {
        let mut store = DocumentStore::new();
        let id = store.add_star();
        store.update_element(&id, ElementPatch::new().with_num_points(7));

        assert!(store.undo());
        assert!(store.can_redo());

        store.update_element(&id, ElementPatch::new().with_num_points(9));
        assert!(!store.can_redo());
        assert!(!store.redo());
    }

    #[test]
    fn test_snapshot_independence() {
        let mut store = DocumentStore::new();
        let id = store.add_rectangle();
        store.update_element(&id, ElementPatch::new().with_position(Point::new(1.0, 1.0)));
        store.update_element(&id, ElementPatch::new().with_position(Point::new(2.0, 2.0)));
        let final_scene = store.present().clone();

        // Walk all the way back: each restored snapshot must be exactly the
        // state at that point, untouched by the later mutations.
        assert!(store.undo());
        assert_eq!(
            store.present().element(&id).map(|e| e.position()),
            Some(Point::new(1.0, 1.0))
        );
        assert!(store.undo());
        assert_eq!(
            store.present().element(&id).map(|e| e.position()),
            Some(Point::new(100.0, 100.0))
        );
        assert!(store.undo());
        assert!(store.present().is_empty());

        // And forward again.
        assert!(store.redo());
        assert!(store.redo());
        assert!(store.redo());
        assert_eq!(store.present(), &final_scene);
    }

    #[test]
    fn test_history_cap_evicts_oldest() {
        let mut store = DocumentStore::with_history_limit(2);
        let id = store.add_rectangle();
        store.update_element(&id, ElementPatch::new().with_width(10.0));
        store.update_element(&id, ElementPatch::new().with_width(20.0));
        store.update_element(&id, ElementPatch::new().with_width(30.0));

        // Only the two newest snapshots survive.
        assert!(store.undo());
        assert!(store.undo());
        assert!(!store.undo());
    }

    #[test]
    fn test_connection_commands() {
        let mut store = DocumentStore::new();
        let rect = store.add_rectangle();

        // Dangling endpoint accepted verbatim.
        store.add_connection(Connection::new("c1", rect.clone(), "404"));
        assert_eq!(store.present().connections.len(), 1);
        assert_eq!(store.present().resolvable_connections().count(), 0);

        let circle = store.add_circle();
        store.update_connection("c1", ConnectionPatch::new().with_to(circle));
        assert_eq!(store.present().resolvable_connections().count(), 1);

        store.delete_connection("c1");
        assert!(store.present().connections.is_empty());

        // Missing targets are silent no-ops.
        store.update_connection("404", ConnectionPatch::new().with_to("x"));
        store.delete_connection("404");
        assert!(store.present().connections.is_empty());
    }

    #[test]
    fn test_load_scene_reseeds_id_counter() {
        let mut source = DocumentStore::new();
        source.add_rectangle();
        source.add_circle();
        source.add_star();
        let json = source.to_json().unwrap();

        let mut store = DocumentStore::new();
        store.add_text();
        store.load_scene(&json).unwrap();

        assert!(!store.can_undo());
        assert_eq!(store.present().elements.len(), 3);
        let id = store.add_rectangle();
        assert_eq!(id, "4");
    }

    #[test]
    fn test_load_scene_rejects_duplicate_ids() {
        let mut scene = Scene::new();
        for position in [Point::new(0.0, 0.0), Point::new(5.0, 5.0)] {
            let mut circle = CircleElement::new(position, 10.0);
            circle.id = "1".to_string();
            scene.push_element(Element::Circle(circle));
        }
        let json = scene.to_json().unwrap();

        let mut store = DocumentStore::new();
        let err = store.load_scene(&json).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateElementId(id) if id == "1"));
        assert!(store.present().is_empty());
    }

    #[test]
    fn test_load_scene_rejects_invalid_json() {
        let mut store = DocumentStore::new();
        assert!(matches!(
            store.load_scene("not json"),
            Err(DocumentError::Serialization(_))
        ));
    }
}
