//! Rectangle element.

use super::{clamp_dimension, Color, ElementId, ElementPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A rectangle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Fill color.
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl RectElement {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: ElementId::new(),
            position,
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            fill: Some(Color::sky_blue()),
            draggable: true,
            rotation: 0.0,
        }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(width) = patch.width {
            self.width = clamp_dimension(width);
        }
        if let Some(height) = patch.height {
            self.height = clamp_dimension(height);
        }
    }
}
