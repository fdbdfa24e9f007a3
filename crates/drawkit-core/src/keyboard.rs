//! Keyboard edits on the current selection.

use crate::collection::ShapeCollection;
use crate::geometry::RectExt;
use crate::shapes::ShapeId;
use kurbo::Vec2;

/// Deletes or nudges every selected shape of a collection.
///
/// Unlike the pointer interactors this works on the live collection
/// directly. A nudge moves the whole selection or nothing: if the union of
/// the selected bounds would leave the collection bounds, no shape moves.
#[derive(Debug)]
pub struct KeyboardInteractor<'a> {
    shapes: &'a mut ShapeCollection,
}

impl<'a> KeyboardInteractor<'a> {
    pub fn new(shapes: &'a mut ShapeCollection) -> Self {
        Self { shapes }
    }

    /// Remove every selected shape. Returns the removed ids.
    pub fn delete(&mut self) -> Vec<ShapeId> {
        let doomed = self.shapes.selected_ids();
        for &id in &doomed {
            self.shapes.remove_shape(id);
        }
        log::debug!("Deleted {} selected shapes", doomed.len());
        doomed
    }

    pub fn move_left(&mut self, n: f64) -> bool {
        self.nudge(Vec2::new(-n, 0.0))
    }

    pub fn move_right(&mut self, n: f64) -> bool {
        self.nudge(Vec2::new(n, 0.0))
    }

    pub fn move_up(&mut self, n: f64) -> bool {
        self.nudge(Vec2::new(0.0, -n))
    }

    pub fn move_down(&mut self, n: f64) -> bool {
        self.nudge(Vec2::new(0.0, n))
    }

    /// Move every selected shape by `delta`, or none of them. Returns
    /// whether the move was applied.
    pub fn nudge(&mut self, delta: Vec2) -> bool {
        let Some(union) = self.shapes.selection_bounds() else {
            return false;
        };
        if !self.shapes.bounds.contains_rect(union + delta) {
            log::debug!("Nudge by {:?} rejected: selection would leave bounds", delta);
            return false;
        }
        for id in self.shapes.selected_ids() {
            if let Some(shape) = self.shapes.get_shape_mut(id) {
                shape.translate(delta);
            }
        }
        true
    }
}
