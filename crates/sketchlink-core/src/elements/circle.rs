//! Circle element.

use super::{clamp_dimension, Color, ElementId, ElementPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A circle element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Center position.
    pub position: Point,
    /// Radius of the circle.
    pub radius: f64,
    /// Fill color.
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl CircleElement {
    /// Create a new circle.
    pub fn new(position: Point, radius: f64) -> Self {
        Self {
            id: ElementId::new(),
            position,
            radius: clamp_dimension(radius),
            fill: Some(Color::light_green()),
            draggable: true,
            rotation: 0.0,
        }
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(radius) = patch.radius {
            self.radius = clamp_dimension(radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = CircleElement::new(Point::new(150.0, 150.0), 50.0);
        assert!((circle.radius - 50.0).abs() < f64::EPSILON);
        assert_eq!(circle.fill, Some(Color::light_green()));
    }

    #[test]
    fn test_circle_radius_clamped() {
        let mut circle = CircleElement::new(Point::new(0.0, 0.0), 50.0);
        circle.apply(&ElementPatch::new().with_radius(-10.0));
        assert!((circle.radius - 1.0).abs() < f64::EPSILON);
    }
}
