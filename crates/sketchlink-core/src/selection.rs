//! Selection state and gesture-to-command translation.

use crate::connection::{Connection, ConnectionId};
use crate::document::DocumentStore;
use crate::elements::{Color, Element, ElementId, ElementPatch, TextElement};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What is currently selected: one element or one connection, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionTarget {
    Element(ElementId),
    Connection(ConnectionId),
}

/// The end state of a resize/rotate gesture, as reported by the canvas node.
///
/// `scale_x`/`scale_y` are the gesture's transient factors. The controller
/// folds them into absolute size fields before issuing the update, so the
/// store only ever persists absolute values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformGesture {
    /// Final position.
    pub position: Point,
    /// Final rotation in degrees.
    pub rotation: f64,
    /// Horizontal scale factor accumulated over the gesture.
    pub scale_x: f64,
    /// Vertical scale factor accumulated over the gesture.
    pub scale_y: f64,
}

/// Tracks the single selected item and translates pointer/keyboard gestures
/// into document store commands.
///
/// Gestures produce exactly one update command at gesture end, never one per
/// frame; live feedback during the gesture is the presentation adapter's
/// concern.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<SelectionTarget>,
}

impl SelectionController {
    /// Create a controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element, clearing any connection selection.
    pub fn select_element(&mut self, id: impl Into<ElementId>) {
        self.selected = Some(SelectionTarget::Element(id.into()));
    }

    /// Select a connection, clearing any element selection.
    pub fn select_connection(&mut self, id: impl Into<ConnectionId>) {
        self.selected = Some(SelectionTarget::Connection(id.into()));
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The current selection, if any.
    pub fn selected(&self) -> Option<&SelectionTarget> {
        self.selected.as_ref()
    }

    /// Id of the selected element, if an element is selected.
    pub fn selected_element(&self) -> Option<&str> {
        match &self.selected {
            Some(SelectionTarget::Element(id)) => Some(id),
            _ => None,
        }
    }

    /// Id of the selected connection, if a connection is selected.
    pub fn selected_connection(&self) -> Option<&str> {
        match &self.selected {
            Some(SelectionTarget::Connection(id)) => Some(id),
            _ => None,
        }
    }

    /// Commit a finished drag: a single position update for the dragged
    /// element (which need not be the selected one).
    pub fn drag_end(&self, store: &mut DocumentStore, id: &str, position: Point) {
        store.update_element(id, ElementPatch::new().with_position(position));
    }

    /// Commit a finished transform gesture on the selected element.
    ///
    /// Position and rotation always travel; size travels as the absolute
    /// field the element kind uses: width/height for rectangles, font size
    /// for text, radius for circles, width/height for images (with the
    /// stored scale factors reset to 1). Other kinds only move and rotate.
    pub fn transform_end(&self, store: &mut DocumentStore, gesture: TransformGesture) {
        let Some(id) = self.selected_element().map(str::to_string) else {
            return;
        };
        let mut patch = ElementPatch::new()
            .with_position(gesture.position)
            .with_rotation(gesture.rotation);
        match store.present().element(&id) {
            Some(Element::Rect(rect)) => {
                patch = patch
                    .with_width(rect.width * gesture.scale_x)
                    .with_height(rect.height * gesture.scale_y);
            }
            Some(Element::Text(text)) => {
                patch = patch.with_font_size(text.font_size * gesture.scale_x);
            }
            Some(Element::Circle(circle)) => {
                patch = patch.with_radius(circle.radius * gesture.scale_x);
            }
            Some(Element::Image(image)) => {
                patch = patch
                    .with_width(image.width * gesture.scale_x)
                    .with_height(image.height * gesture.scale_y)
                    .with_scale(1.0, 1.0);
            }
            _ => {}
        }
        store.update_element(&id, patch);
    }

    /// Delete whatever is selected and clear the selection.
    /// Returns true if a delete command was issued.
    pub fn delete_selected(&mut self, store: &mut DocumentStore) -> bool {
        match self.selected.take() {
            Some(SelectionTarget::Element(id)) => {
                store.delete_element(&id);
                true
            }
            Some(SelectionTarget::Connection(id)) => {
                store.delete_connection(&id);
                true
            }
            None => false,
        }
    }

    /// Connect the selected element to another element.
    pub fn connect(&self, store: &mut DocumentStore, connection_id: impl Into<ConnectionId>, to: impl Into<ElementId>) {
        if let Some(from) = self.selected_element() {
            store.add_connection(Connection::new(connection_id, from, to));
        }
    }

    /// Set the font size of the selected text element.
    pub fn set_font_size(&self, store: &mut DocumentStore, font_size: f64) {
        if let Some(id) = self.selected_element().map(str::to_string) {
            store.update_element(&id, ElementPatch::new().with_font_size(font_size));
        }
    }

    /// Toggle bold on the selected text element.
    pub fn toggle_bold(&self, store: &mut DocumentStore) {
        if let Some((id, text)) = self.selected_text(store) {
            let patch = ElementPatch::new().with_font_style(text.font_style.toggle_bold());
            store.update_element(&id, patch);
        }
    }

    /// Toggle italic on the selected text element.
    pub fn toggle_italic(&self, store: &mut DocumentStore) {
        if let Some((id, text)) = self.selected_text(store) {
            let patch = ElementPatch::new().with_font_style(text.font_style.toggle_italic());
            store.update_element(&id, patch);
        }
    }

    /// Toggle underline on the selected text element.
    pub fn toggle_underline(&self, store: &mut DocumentStore) {
        if let Some((id, text)) = self.selected_text(store) {
            let patch =
                ElementPatch::new().with_text_decoration(text.text_decoration.toggle_underline());
            store.update_element(&id, patch);
        }
    }

    /// The selected element, if it is a text element.
    fn selected_text(&self, store: &DocumentStore) -> Option<(ElementId, TextElement)> {
        let id = self.selected_element()?;
        match store.present().element(id) {
            Some(Element::Text(text)) => Some((id.to_string(), text.clone())),
            _ => None,
        }
    }

    /// Recolor the selected element.
    pub fn set_fill(&self, store: &mut DocumentStore, fill: Color) {
        if let Some(id) = self.selected_element().map(str::to_string) {
            store.update_element(&id, ElementPatch::new().with_fill(fill));
        }
    }
}
