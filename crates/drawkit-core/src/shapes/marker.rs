//! Selection marker shape.

use super::{Pen, ShapeId, ShapeTrait, StrokeStyle};
use crate::geometry::RectExt;
use kurbo::{Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dashed rubber-band box shown while a region is being dragged out.
///
/// Markers are overlays: they are never hit by the hit tester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub(crate) id: ShapeId,
    pub rect: Rect,
    pub pen: Pen,
    #[serde(default)]
    pub is_selected: bool,
}

impl Marker {
    pub fn new(rect: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
            pen: Pen::new(Color::from_rgba8(64, 128, 255, 255), 1.0, StrokeStyle::Dashed),
            is_selected: false,
        }
    }
}

impl ShapeTrait for Marker {
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
