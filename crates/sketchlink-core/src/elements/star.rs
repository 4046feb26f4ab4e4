//! Star element.

use super::{clamp_dimension, Color, ElementId, ElementPatch, MIN_STAR_POINTS};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A star element.
///
/// `inner_radius < outer_radius` is expected but not enforced; a star with
/// the radii swapped still renders, just inside out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Center position.
    pub position: Point,
    /// Radius of the inner vertices.
    pub inner_radius: f64,
    /// Radius of the outer vertices.
    pub outer_radius: f64,
    /// Number of points, at least [`MIN_STAR_POINTS`].
    pub num_points: u32,
    /// Fill color.
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl StarElement {
    /// Create a new star.
    pub fn new(position: Point, inner_radius: f64, outer_radius: f64, num_points: u32) -> Self {
        Self {
            id: ElementId::new(),
            position,
            inner_radius: clamp_dimension(inner_radius),
            outer_radius: clamp_dimension(outer_radius),
            num_points: num_points.max(MIN_STAR_POINTS),
            fill: Some(Color::gold()),
            draggable: true,
            rotation: 0.0,
        }
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(inner_radius) = patch.inner_radius {
            self.inner_radius = clamp_dimension(inner_radius);
        }
        if let Some(outer_radius) = patch.outer_radius {
            self.outer_radius = clamp_dimension(outer_radius);
        }
        if let Some(num_points) = patch.num_points {
            self.num_points = num_points.max(MIN_STAR_POINTS);
        }
    }
}
