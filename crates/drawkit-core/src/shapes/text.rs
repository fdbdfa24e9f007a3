//! Text box shape.

use super::{Pen, ShapeId, ShapeTrait};
use crate::geometry::RectExt;
use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A filled text box. Unlike rectangles it is hit anywhere inside its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ShapeId,
    /// Box the text is laid out in.
    pub rect: Rect,
    pub content: String,
    pub font_size: f64,
    pub pen: Pen,
    #[serde(default)]
    pub is_selected: bool,
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    pub fn new(rect: Rect, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            pen: Pen::default(),
            is_selected: false,
        }
    }
}

impl ShapeTrait for Text {
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
