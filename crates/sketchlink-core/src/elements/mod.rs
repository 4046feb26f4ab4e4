//! Element definitions for the canvas scene.

mod circle;
mod image;
mod line;
mod rect;
mod star;
mod text;
mod triangle;

pub use circle::CircleElement;
pub use image::ImageElement;
pub use line::LineElement;
pub use rect::RectElement;
pub use star::StarElement;
pub use text::{FontStyle, TextDecoration, TextElement};
pub use triangle::TriangleElement;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Unique identifier for elements.
///
/// Assigned by the document store from its own monotonically increasing
/// counter; ids are never reused within a document's lifetime.
pub type ElementId = String;

/// Lower bound for text font sizes.
pub const FONT_SIZE_MIN: f64 = 8.0;
/// Upper bound for text font sizes.
pub const FONT_SIZE_MAX: f64 = 100.0;
/// Smallest accepted value for size-like fields (width, height, radius, stroke width).
pub const MIN_DIMENSION: f64 = 1.0;
/// Smallest accepted number of star points.
pub const MIN_STAR_POINTS: u32 = 3;

/// Clamp a font size into the supported range.
pub(crate) fn clamp_font_size(size: f64) -> f64 {
    size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

/// Clamp a size-like field to its minimum.
pub(crate) fn clamp_dimension(value: f64) -> f64 {
    value.max(MIN_DIMENSION)
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Default fill for rectangles.
    pub fn sky_blue() -> Self {
        Self::new(135, 206, 235, 255)
    }

    /// Default fill for circles.
    pub fn light_green() -> Self {
        Self::new(144, 238, 144, 255)
    }

    /// Default fill for triangles.
    pub fn salmon() -> Self {
        Self::new(250, 128, 114, 255)
    }

    /// Default fill for stars.
    pub fn gold() -> Self {
        Self::new(255, 215, 0, 255)
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` hex string, as produced by
    /// color-picker inputs. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?.trim();
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16).ok()?
                } else {
                    255
                };
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }
}

/// Element kind, used for dispatch and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Rect,
    Circle,
    Triangle,
    Line,
    Star,
    Image,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Rect => "rect",
            ElementKind::Circle => "circle",
            ElementKind::Triangle => "triangle",
            ElementKind::Line => "line",
            ElementKind::Star => "star",
            ElementKind::Image => "image",
        }
    }
}

/// Enum wrapper for all element types (for serialization and dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text(TextElement),
    Rect(RectElement),
    Circle(CircleElement),
    Triangle(TriangleElement),
    Line(LineElement),
    Star(StarElement),
    Image(ImageElement),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Text(e) => &e.id,
            Element::Rect(e) => &e.id,
            Element::Circle(e) => &e.id,
            Element::Triangle(e) => &e.id,
            Element::Line(e) => &e.id,
            Element::Star(e) => &e.id,
            Element::Image(e) => &e.id,
        }
    }

    /// Replace the element's id. Only the document store assigns ids.
    pub(crate) fn set_id(&mut self, id: ElementId) {
        match self {
            Element::Text(e) => e.id = id,
            Element::Rect(e) => e.id = id,
            Element::Circle(e) => e.id = id,
            Element::Triangle(e) => e.id = id,
            Element::Line(e) => e.id = id,
            Element::Star(e) => e.id = id,
            Element::Image(e) => e.id = id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Rect(_) => ElementKind::Rect,
            Element::Circle(_) => ElementKind::Circle,
            Element::Triangle(_) => ElementKind::Triangle,
            Element::Line(_) => ElementKind::Line,
            Element::Star(_) => ElementKind::Star,
            Element::Image(_) => ElementKind::Image,
        }
    }

    /// Position of the element. The meaning varies by kind: top-left corner
    /// for rect/image, center for circle/star, text anchor for text, and the
    /// origin the endpoints are relative to for line/triangle.
    pub fn position(&self) -> Point {
        match self {
            Element::Text(e) => e.position,
            Element::Rect(e) => e.position,
            Element::Circle(e) => e.position,
            Element::Triangle(e) => e.position,
            Element::Line(e) => e.position,
            Element::Star(e) => e.position,
            Element::Image(e) => e.position,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Element::Text(e) => e.position = position,
            Element::Rect(e) => e.position = position,
            Element::Circle(e) => e.position = position,
            Element::Triangle(e) => e.position = position,
            Element::Line(e) => e.position = position,
            Element::Star(e) => e.position = position,
            Element::Image(e) => e.position = position,
        }
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        match self {
            Element::Text(e) => e.rotation,
            Element::Rect(e) => e.rotation,
            Element::Circle(e) => e.rotation,
            Element::Triangle(e) => e.rotation,
            Element::Line(e) => e.rotation,
            Element::Star(e) => e.rotation,
            Element::Image(e) => e.rotation,
        }
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        match self {
            Element::Text(e) => e.rotation = rotation,
            Element::Rect(e) => e.rotation = rotation,
            Element::Circle(e) => e.rotation = rotation,
            Element::Triangle(e) => e.rotation = rotation,
            Element::Line(e) => e.rotation = rotation,
            Element::Star(e) => e.rotation = rotation,
            Element::Image(e) => e.rotation = rotation,
        }
    }

    pub fn fill(&self) -> Option<Color> {
        match self {
            Element::Text(e) => e.fill,
            Element::Rect(e) => e.fill,
            Element::Circle(e) => e.fill,
            Element::Triangle(e) => e.fill,
            Element::Line(e) => e.fill,
            Element::Star(e) => e.fill,
            Element::Image(e) => e.fill,
        }
    }

    pub fn draggable(&self) -> bool {
        match self {
            Element::Text(e) => e.draggable,
            Element::Rect(e) => e.draggable,
            Element::Circle(e) => e.draggable,
            Element::Triangle(e) => e.draggable,
            Element::Line(e) => e.draggable,
            Element::Star(e) => e.draggable,
            Element::Image(e) => e.draggable,
        }
    }

    /// Merge a partial update into this element.
    ///
    /// Common fields apply to every kind; kind-specific fields are applied
    /// only where they make sense and silently ignored otherwise. Numeric
    /// fields are clamped into their supported ranges on the way in.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(position) = patch.position {
            self.set_position(position);
        }
        if let Some(rotation) = patch.rotation {
            self.set_rotation(rotation);
        }
        if let Some(fill) = patch.fill {
            match self {
                Element::Text(e) => e.fill = Some(fill),
                Element::Rect(e) => e.fill = Some(fill),
                Element::Circle(e) => e.fill = Some(fill),
                Element::Triangle(e) => e.fill = Some(fill),
                Element::Line(e) => e.fill = Some(fill),
                Element::Star(e) => e.fill = Some(fill),
                Element::Image(e) => e.fill = Some(fill),
            }
        }
        if let Some(draggable) = patch.draggable {
            match self {
                Element::Text(e) => e.draggable = draggable,
                Element::Rect(e) => e.draggable = draggable,
                Element::Circle(e) => e.draggable = draggable,
                Element::Triangle(e) => e.draggable = draggable,
                Element::Line(e) => e.draggable = draggable,
                Element::Star(e) => e.draggable = draggable,
                Element::Image(e) => e.draggable = draggable,
            }
        }
        match self {
            Element::Text(e) => e.apply(patch),
            Element::Rect(e) => e.apply(patch),
            Element::Circle(e) => e.apply(patch),
            Element::Triangle(e) => e.apply(patch),
            Element::Line(e) => e.apply(patch),
            Element::Star(e) => e.apply(patch),
            Element::Image(e) => e.apply(patch),
        }
    }
}

/// A partial element update, carried by the update command.
///
/// Every field is optional; unset fields leave the element untouched.
/// Fields that do not apply to the target element's kind are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    pub position: Option<Point>,
    pub rotation: Option<f64>,
    pub fill: Option<Color>,
    pub draggable: Option<bool>,
    // Text
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_style: Option<FontStyle>,
    pub text_decoration: Option<TextDecoration>,
    // Rect / image
    pub width: Option<f64>,
    pub height: Option<f64>,
    // Circle
    pub radius: Option<f64>,
    // Triangle
    pub points: Option<[Point; 3]>,
    // Line
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    // Star
    pub inner_radius: Option<f64>,
    pub outer_radius: Option<f64>,
    pub num_points: Option<u32>,
    // Image
    pub src: Option<String>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = Some(font_style);
        self
    }

    pub fn with_text_decoration(mut self, text_decoration: TextDecoration) -> Self {
        self.text_decoration = Some(text_decoration);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_points(mut self, points: [Point; 3]) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_endpoints(mut self, start: Point, end: Point) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    pub fn with_radii(mut self, inner_radius: f64, outer_radius: f64) -> Self {
        self.inner_radius = Some(inner_radius);
        self.outer_radius = Some(outer_radius);
        self
    }

    pub fn with_num_points(mut self, num_points: u32) -> Self {
        self.num_points = Some(num_points);
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = Some(scale_x);
        self.scale_y = Some(scale_y);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#000000"), Some(Color::black()));
        assert_eq!(Color::from_hex("#87ceeb"), Some(Color::sky_blue()));
        assert_eq!(Color::from_hex("#fff"), Some(Color::white()));
        assert_eq!(
            Color::from_hex("#ff000080"),
            Some(Color::new(255, 0, 0, 128))
        );
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::from_hex("#12345"), None);
    }

    #[test]
    fn test_patch_applies_common_fields() {
        let mut element = Element::Rect(RectElement::new(Point::new(0.0, 0.0), 100.0, 50.0));
        let patch = ElementPatch::new()
            .with_position(Point::new(30.0, 40.0))
            .with_rotation(45.0)
            .with_fill(Color::gold());

        element.apply_patch(&patch);

        assert_eq!(element.position(), Point::new(30.0, 40.0));
        assert!((element.rotation() - 45.0).abs() < f64::EPSILON);
        assert_eq!(element.fill(), Some(Color::gold()));
    }

    #[test]
    fn test_patch_ignores_foreign_fields() {
        let mut element = Element::Circle(CircleElement::new(Point::new(0.0, 0.0), 25.0));
        let before = element.clone();

        // Width/text/src mean nothing to a circle.
        let patch = ElementPatch::new()
            .with_width(500.0)
            .with_text("hello")
            .with_src("data:image/png;base64,");
        element.apply_patch(&patch);

        assert_eq!(element, before);
    }

    #[test]
    fn test_element_kind_names() {
        let circle = Element::Circle(CircleElement::new(Point::new(0.0, 0.0), 10.0));
        assert_eq!(circle.kind(), ElementKind::Circle);
        assert_eq!(circle.kind().as_str(), "circle");
    }
}
