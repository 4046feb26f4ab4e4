//! Image element.

use super::{clamp_dimension, Color, ElementId, ElementPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};

fn default_scale() -> f64 {
    1.0
}

/// An image element.
///
/// The core never decodes image data: `src` is an opaque handle (typically a
/// data URI produced by the file-reading collaborator) that only the
/// presentation adapter interprets. A failed or cancelled read never reaches
/// the store, so an image element always carries its final `src`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Unique id, assigned by the document store on add.
    #[serde(default)]
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Opaque image source handle or URI.
    pub src: String,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
    /// Horizontal scale applied after resize (1 = none).
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    /// Vertical scale applied after resize (1 = none).
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    /// Fill color (unused by images, kept for uniformity).
    pub fill: Option<Color>,
    /// Whether the element responds to drag gestures.
    pub draggable: bool,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl ImageElement {
    /// Create a new image element.
    pub fn new(src: impl Into<String>, position: Point, width: f64, height: f64) -> Self {
        Self {
            id: ElementId::new(),
            position,
            src: src.into(),
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            scale_x: 1.0,
            scale_y: 1.0,
            fill: None,
            draggable: true,
            rotation: 0.0,
        }
    }

    /// Center of the displayed image (ignores `scale_x`/`scale_y`).
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    pub(crate) fn apply(&mut self, patch: &ElementPatch) {
        if let Some(src) = &patch.src {
            self.src = src.clone();
        }
        if let Some(width) = patch.width {
            self.width = clamp_dimension(width);
        }
        if let Some(height) = patch.height {
            self.height = clamp_dimension(height);
        }
        if let Some(scale_x) = patch.scale_x {
            self.scale_x = scale_x;
        }
        if let Some(scale_y) = patch.scale_y {
            self.scale_y = scale_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let image = ImageElement::new(
            "data:image/png;base64,AAAA",
            Point::new(100.0, 100.0),
            200.0,
            150.0,
        );
        assert!((image.scale_x - 1.0).abs() < f64::EPSILON);
        assert!((image.scale_y - 1.0).abs() < f64::EPSILON);
        assert_eq!(image.center(), Point::new(200.0, 175.0));
    }

    #[test]
    fn test_image_resize_patch() {
        let mut image = ImageElement::new("uri", Point::ZERO, 200.0, 100.0);
        image.apply(
            &ElementPatch::new()
                .with_width(400.0)
                .with_height(200.0)
                .with_scale(1.0, 1.0),
        );
        assert!((image.width - 400.0).abs() < f64::EPSILON);
        assert!((image.height - 200.0).abs() < f64::EPSILON);
    }
}
