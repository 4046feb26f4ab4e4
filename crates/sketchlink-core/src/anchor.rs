//! Anchor resolution for connection routing.

use crate::elements::Element;
use kurbo::Point;

/// Resolve the anchor point of an element: the single point a connection
/// attaches to. Pure and total over all element kinds.
///
/// - rect/image: center of the width × height box.
/// - circle: position offset by the radius on both axes.
/// - text: the text anchor itself. Glyph metrics are not accounted for, so
///   the anchor sits at the top-left of the rendered run rather than its
///   visual center. Known limitation.
/// - everything else (line, triangle, star): the element position.
pub fn anchor(element: &Element) -> Point {
    match element {
        Element::Rect(rect) => rect.center(),
        Element::Image(image) => image.center(),
        Element::Circle(circle) => Point::new(
            circle.position.x + circle.radius,
            circle.position.y + circle.radius,
        ),
        Element::Text(text) => text.position,
        _ => element.position(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{
        CircleElement, ImageElement, LineElement, RectElement, StarElement, TextElement,
        TriangleElement,
    };

    #[test]
    fn test_rect_anchor() {
        let rect = Element::Rect(RectElement::new(Point::new(10.0, 20.0), 40.0, 30.0));
        assert_eq!(anchor(&rect), Point::new(30.0, 35.0));
    }

    #[test]
    fn test_circle_anchor() {
        let circle = Element::Circle(CircleElement::new(Point::new(5.0, 5.0), 10.0));
        assert_eq!(anchor(&circle), Point::new(15.0, 15.0));
    }

    #[test]
    fn test_image_anchor() {
        let image = Element::Image(ImageElement::new("uri", Point::new(100.0, 100.0), 200.0, 150.0));
        assert_eq!(anchor(&image), Point::new(200.0, 175.0));
    }

    #[test]
    fn test_text_anchor_is_position() {
        let text = Element::Text(TextElement::new(Point::new(50.0, 60.0), "hi"));
        assert_eq!(anchor(&text), Point::new(50.0, 60.0));
    }

    #[test]
    fn test_default_anchor_is_position() {
        let line = Element::Line(LineElement::new(
            Point::new(1.0, 2.0),
            Point::ZERO,
            Point::new(10.0, 10.0),
        ));
        assert_eq!(anchor(&line), Point::new(1.0, 2.0));

        let triangle = Element::Triangle(TriangleElement::new(
            Point::new(3.0, 4.0),
            [Point::ZERO, Point::new(1.0, 1.0), Point::new(2.0, 0.0)],
        ));
        assert_eq!(anchor(&triangle), Point::new(3.0, 4.0));

        let star = Element::Star(StarElement::new(Point::new(5.0, 6.0), 10.0, 20.0, 5));
        assert_eq!(anchor(&star), Point::new(5.0, 6.0));
    }
}
