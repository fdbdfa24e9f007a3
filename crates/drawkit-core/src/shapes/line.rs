//! Line shape.

use super::{Pen, ShapeId, ShapeTrait};
use crate::geometry::Segment;
use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight line between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    pub segment: Segment,
    pub pen: Pen,
    #[serde(default)]
    pub is_selected: bool,
}

impl Line {
    /// Create a new line with the default pen.
    pub fn new(segment: Segment) -> Self {
        Self {
            id: Uuid::new_v4(),
            segment,
            pen: Pen::default(),
            is_selected: false,
        }
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = pen;
        self
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.segment.bounding_rect()
    }

    fn geometry(&self) -> Rect {
        self.segment.as_rect()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.segment = Segment::from_rect(rect);
    }

    fn translate(&mut self, delta: Vec2) {
        self.segment = self.segment.translate(delta);
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
    use kurbo::Point;

    #[test]
    fn test_line_geometry_keeps_direction() {
        let line = Line::new(Segment::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0)));
        let geometry = line.geometry();
        assert!((geometry.x0 - 50.0).abs() < f64::EPSILON);
        assert!((geometry.x1 - 10.0).abs() < f64::EPSILON);
        assert_eq!(line.bounds(), Rect::new(10.0, 20.0, 50.0, 80.0));
    }

    #[test]
    fn test_set_geometry() {
        let mut line = Line::new(Segment::new(Point::ZERO, Point::new(1.0, 1.0)));
        line.set_geometry(Rect::new(30.0, 40.0, 5.0, 6.0));
        assert_eq!(line.segment.start, Point::new(30.0, 40.0));
        assert_eq!(line.segment.end, Point::new(5.0, 6.0));
    }
}
