//! Shape definitions.

mod line;
mod marker;
mod rectangle;
mod text;

pub use line::Line;
pub use marker::Marker;
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Segment;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke style for outlines and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Colour and stroke used to draw a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: SerializableColor,
    pub width: f64,
    #[serde(default)]
    pub stroke: StrokeStyle,
}

impl Pen {
    pub fn new(color: Color, width: f64, stroke: StrokeStyle) -> Self {
        Self {
            color: color.into(),
            width,
            stroke,
        }
    }

    /// A pen that draws nothing.
    pub fn invisible() -> Self {
        Self {
            color: SerializableColor::transparent(),
            width: 0.0,
            stroke: StrokeStyle::Solid,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.color.a > 0 && self.width > 0.0
    }

    /// Get the pen colour as a peniko Color.
    pub fn color(&self) -> Color {
        self.color.into()
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            width: 1.0,
            stroke: StrokeStyle::Solid,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Kind tag for each shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Line,
    Text,
    Marker,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Normalized bounding box.
    fn bounds(&self) -> Rect;

    /// Stored geometry as a rectangle. For lines this is the unnormalized
    /// line rect running from start to end.
    fn geometry(&self) -> Rect;

    /// Replace the stored geometry with a finished gesture rectangle.
    fn set_geometry(&mut self, rect: Rect);

    /// Move the shape by `delta`.
    fn translate(&mut self, delta: Vec2);

    fn pen(&self) -> &Pen;

    fn pen_mut(&mut self) -> &mut Pen;

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);
}

/// Enum wrapper for all shape types.
///
/// Equality is structural: two copies of a shape compare equal as long as
/// every field, including the id, matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Line(Line),
    Text(Text),
    Marker(Marker),
}

impl Shape {
    /// Sentinel shape: zero-size rectangle, invisible pen, nil id.
    pub fn null() -> Self {
        Shape::Rectangle(Rectangle::reconstruct(
            Uuid::nil(),
            Rect::ZERO,
            Pen::invisible(),
            false,
        ))
    }

    pub fn is_null(&self) -> bool {
        self.id().is_nil()
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Text(_) => ShapeKind::Text,
            Shape::Marker(_) => ShapeKind::Marker,
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Line(s) => s.id(),
            Shape::Text(s) => s.id(),
            Shape::Marker(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
            Shape::Marker(s) => s.bounds(),
        }
    }

    pub fn geometry(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.geometry(),
            Shape::Line(s) => s.geometry(),
            Shape::Text(s) => s.geometry(),
            Shape::Marker(s) => s.geometry(),
        }
    }

    pub fn set_geometry(&mut self, rect: Rect) {
        match self {
            Shape::Rectangle(s) => s.set_geometry(rect),
            Shape::Line(s) => s.set_geometry(rect),
            Shape::Text(s) => s.set_geometry(rect),
            Shape::Marker(s) => s.set_geometry(rect),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Line(s) => s.translate(delta),
            Shape::Text(s) => s.translate(delta),
            Shape::Marker(s) => s.translate(delta),
        }
    }

    pub fn pen(&self) -> &Pen {
        match self {
            Shape::Rectangle(s) => s.pen(),
            Shape::Line(s) => s.pen(),
            Shape::Text(s) => s.pen(),
            Shape::Marker(s) => s.pen(),
        }
    }

    pub fn pen_mut(&mut self) -> &mut Pen {
        match self {
            Shape::Rectangle(s) => s.pen_mut(),
            Shape::Line(s) => s.pen_mut(),
            Shape::Text(s) => s.pen_mut(),
            Shape::Marker(s) => s.pen_mut(),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.is_selected(),
            Shape::Line(s) => s.is_selected(),
            Shape::Text(s) => s.is_selected(),
            Shape::Marker(s) => s.is_selected(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Rectangle(s) => s.set_selected(selected),
            Shape::Line(s) => s.set_selected(selected),
            Shape::Text(s) => s.set_selected(selected),
            Shape::Marker(s) => s.set_selected(selected),
        }
    }

    /// The segment of a line shape.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Shape::Line(l) => Some(l.segment),
            _ => None,
        }
    }

    /// Regenerate the shape's ID, e.g. when a copy must become a new shape.
    pub fn regenerate_id(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Line(s) => s.id = new_id,
            Shape::Text(s) => s.id = new_id,
            Shape::Marker(s) => s.id = new_id,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

impl From<Text> for Shape {
    fn from(shape: Text) -> Self {
        Shape::Text(shape)
    }
}

impl From<Marker> for Shape {
    fn from(shape: Marker) -> Self {
        Shape::Marker(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_null_shape() {
        let null = Shape::null();
        assert!(null.is_null());
        assert_eq!(null.bounds(), Rect::ZERO);
        assert!(!null.pen().is_visible());
        assert_eq!(null.kind(), ShapeKind::Rectangle);
    }

    #[test]
    fn test_copies_compare_equal() {
        let shape: Shape = Rectangle::new(Rect::new(0.0, 0.0, 10.0, 10.0)).into();
        let json = serde_json::to_string(&shape).unwrap();
        let copy: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, copy);
        assert_eq!(shape.id(), copy.id());
    }

    #[test]
    fn test_equality_is_structural() {
        let mut a: Shape = Rectangle::new(Rect::new(0.0, 0.0, 10.0, 10.0)).into();
        let b = a.clone();
        a.translate(Vec2::new(1.0, 0.0));
        assert_ne!(a, b);
        a.translate(Vec2::new(-1.0, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_regenerate_id() {
        let mut shape: Shape = Line::new(Segment::new(Point::ZERO, Point::new(5.0, 5.0))).into();
        let old = shape.id();
        shape.regenerate_id();
        assert_ne!(shape.id(), old);
    }

    #[test]
    fn test_pen_color_round_trip() {
        let pen = Pen::new(Color::from_rgba8(10, 20, 30, 255), 2.0, StrokeStyle::Dashed);
        let color = pen.color().to_rgba8();
        assert_eq!((color.r, color.g, color.b, color.a), (10, 20, 30, 255));
    }
}
