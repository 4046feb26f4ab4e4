//! Connections between elements.

use crate::elements::ElementId;
use serde::{Deserialize, Serialize};

/// Unique identifier for connections. Caller-assigned.
pub type ConnectionId = String;

/// A directed edge linking two elements by id.
///
/// Endpoints are not validated against the scene: a connection may dangle
/// (reference an element that no longer exists) and is simply skipped at
/// render time. Deleting an element, however, always cascade-deletes the
/// connections referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique id, supplied by the caller.
    pub id: ConnectionId,
    /// Id of the source element.
    pub from: ElementId,
    /// Id of the target element.
    pub to: ElementId,
}

impl Connection {
    /// Create a new connection.
    pub fn new(
        id: impl Into<ConnectionId>,
        from: impl Into<ElementId>,
        to: impl Into<ElementId>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether this connection references the given element.
    pub fn references(&self, element_id: &str) -> bool {
        self.from == element_id || self.to == element_id
    }

    /// Merge a partial update into this connection.
    pub fn apply_patch(&mut self, patch: &ConnectionPatch) {
        if let Some(from) = &patch.from {
            self.from = from.clone();
        }
        if let Some(to) = &patch.to {
            self.to = to.clone();
        }
    }
}

/// A partial connection update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPatch {
    pub from: Option<ElementId>,
    pub to: Option<ElementId>,
}

impl ConnectionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from(mut self, from: impl Into<ElementId>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<ElementId>) -> Self {
        self.to = Some(to.into());
        self
    }
}
