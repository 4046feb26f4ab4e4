//! Sketchlink Core Library
//!
//! Document state core for the Sketchlink diagram editor: a scene of
//! elements and connections, mutated exclusively through the command set of
//! [`DocumentStore`], with bounded snapshot-based undo/redo.
//!
//! Rendering, pointer mechanics and file loading live outside this crate;
//! they consume read-only [`Scene`] snapshots and feed gestures back as
//! commands (usually through [`SelectionController`]).

pub mod anchor;
pub mod connection;
pub mod document;
pub mod elements;
pub mod scene;
pub mod selection;

pub use anchor::anchor;
pub use connection::{Connection, ConnectionId, ConnectionPatch};
pub use document::{DocumentError, DocumentStore, DEFAULT_MAX_HISTORY};
pub use elements::{
    CircleElement, Color, Element, ElementId, ElementKind, ElementPatch, FontStyle, ImageElement,
    LineElement, RectElement, StarElement, TextDecoration, TextElement, TriangleElement,
};
pub use scene::Scene;
pub use selection::{SelectionController, SelectionTarget, TransformGesture};
