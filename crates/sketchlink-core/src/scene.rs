//! Scene: the full set of elements and connections at one point in time.

use crate::anchor::anchor;
use crate::connection::Connection;
use crate::elements::Element;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A scene snapshot: ordered elements plus connections.
///
/// Element order is insertion order and doubles as paint order (later
/// elements draw on top). Both orders survive undo/redo unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// All elements, in insertion/paint order.
    pub elements: Vec<Element>,
    /// All connections, in insertion order.
    pub connections: Vec<Connection>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the scene has no elements and no connections.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.connections.is_empty()
    }

    /// Get an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Get a mutable reference to an element by id.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Check whether an element with the given id exists.
    pub fn contains_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Get a connection by id.
    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Get a mutable reference to a connection by id.
    pub fn connection_mut(&mut self, id: &str) -> Option<&mut Connection> {
        self.connections.iter_mut().find(|c| c.id == id)
    }

    /// Append an element.
    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, cascade-deleting every connection that
    /// references it as `from` or `to`. Returns the removed element, or
    /// `None` if the id did not resolve (in which case nothing changes).
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        let element = self.elements.remove(index);
        self.connections.retain(|c| !c.references(id));
        Some(element)
    }

    /// Append a connection. Endpoints are taken verbatim, not validated.
    pub fn push_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Remove a connection by id. Returns the removed connection, if any.
    pub fn remove_connection(&mut self, id: &str) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.id == id)?;
        Some(self.connections.remove(index))
    }

    /// Iterate over connections whose endpoints both resolve to elements in
    /// this scene. This is the filter presentation adapters apply at render
    /// time; dangling connections are valid state and simply skipped.
    pub fn resolvable_connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections
            .iter()
            .filter(|c| self.contains_element(&c.from) && self.contains_element(&c.to))
    }

    /// Anchor points of a connection's rendered segment, or `None` when
    /// either endpoint is missing from this scene.
    pub fn connection_endpoints(&self, connection: &Connection) -> Option<(Point, Point)> {
        let from = self.element(&connection.from)?;
        let to = self.element(&connection.to)?;
        Some((anchor(from), anchor(to)))
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
