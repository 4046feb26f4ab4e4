//! Line element.

use super::{clamp_dimension, Color, ElementId, ElementPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A straight line segment.
///
/// The endpoints are relative to `position`, so dragging the element as a
/// whole moves `position` and leaves the endpoints untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Origin the endpoints are relative to.
    pub position: Point,
    /// Start point, relative to `position`.
    pub start: Point,
    /// End point, relative to `position`.
    pub end: Point,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (unused by open lines, kept for uniformity).
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl LineElement {
    /// Default stroke width.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

    /// Create a new line.
    pub fn new(position: Point, start: Point, end: Point) -> Self {
        Self {
            id: ElementId::new(),
            position,
            start,
            end,
            stroke: Color::black(),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            fill: None,
            draggable: true,
            rotation: 0.0,
        }
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(stroke) = patch.stroke {
            self.stroke = stroke;
        }
        if let Some(stroke_width) = patch.stroke_width {
            self.stroke_width = clamp_dimension(stroke_width);
        }
    }
}
