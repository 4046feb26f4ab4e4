//! Triangle element.

use super::{Color, ElementId, ElementPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A triangle element, defined by three vertices relative to its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Origin the vertices are relative to.
    pub position: Point,
    /// The three vertices, in order.
    pub points: [Point; 3],
    /// Fill color.
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl TriangleElement {
    /// Create a new triangle.
    pub fn new(position: Point, points: [Point; 3]) -> Self {
        Self {
            id: ElementId::new(),
            position,
            points,
            fill: Some(Color::salmon()),
            draggable: true,
            rotation: 0.0,
        }
    }

    /// The vertices in world coordinates.
    pub fn world_points(&self) -> [Point; 3] {
        self.points.map(|p| Point::new(self.position.x + p.x, self.position.y + p.y))
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(points) = patch.points {
            self.points = points;
        }
    }
}
