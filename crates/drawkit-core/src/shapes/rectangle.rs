//! Rectangle shape.

use super::{Pen, ShapeId, ShapeTrait};
use crate::geometry::RectExt;
use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outlined rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Corners of the rectangle.
    pub rect: Rect,
    pub pen: Pen,
    #[serde(default)]
    pub is_selected: bool,
}

impl Rectangle {
    /// Create a new rectangle with the default pen.
    pub fn new(rect: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
            pen: Pen::default(),
            is_selected: false,
        }
    }

    /// Reconstruct a rectangle with a specific ID.
    pub(crate) fn reconstruct(id: ShapeId, rect: Rect, pen: Pen, is_selected: bool) -> Self {
        Self {
            id,
            rect,
            pen,
            is_selected,
        }
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.rect.normalized()
    }

    fn geometry(&self) -> Rect {
        self.rect
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn translate(&mut self, delta: Vec2) {
        self.rect = self.rect + delta;
    }

    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn pen_mut(&mut self) -> &mut Pen {
        &mut self.pen
    }

    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Rect::new(10.0, 20.0, 110.0, 70.0));
        assert!((rect.rect.width() - 100.0).abs() < f64::EPSILON);
        assert!((rect.rect.height() - 50.0).abs() < f64::EPSILON);
        assert!(!rect.is_selected());
    }

    #[test]
    fn test_bounds_are_normalized() {
        let rect = Rectangle::new(Rect::new(110.0, 70.0, 10.0, 20.0));
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate() {
        let mut rect = Rectangle::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        rect.translate(Vec2::new(5.0, -2.0));
        assert_eq!(rect.geometry(), Rect::new(5.0, -2.0, 15.0, 8.0));
    }
}
