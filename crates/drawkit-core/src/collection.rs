//! Keyed shape collection with z-order and outer bounds.

use crate::geometry::{RectExt, Segment};
use crate::hit_test::{HitTestResult, HitTester};
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect};
use std::collections::HashMap;

/// The shapes on a drawing surface.
///
/// Interactors never touch the collection; the owner commits finished
/// gesture geometry with [`ShapeCollection::commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCollection {
    /// Outer limit every shape must stay inside.
    pub bounds: Rect,
    shapes: HashMap<ShapeId, Shape>,
    /// Back to front.
    z_order: Vec<ShapeId>,
}

impl ShapeCollection {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: bounds.normalized(),
            shapes: HashMap::new(),
            z_order: Vec::new(),
        }
    }

    /// Add a shape on top. Returns its id.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let shape = shape.into();
        let id = shape.id();
        if self.shapes.insert(id, shape).is_none() {
            self.z_order.push(id);
        }
        id
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.z_order.clear();
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Shapes back to front.
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Shapes front to back, the order hit testing uses.
    pub fn shapes_front_to_back(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().rev().filter_map(|id| self.shapes.get(id))
    }

    pub fn bring_to_front(&mut self, id: ShapeId) {
        if self.shapes.contains_key(&id) {
            self.z_order.retain(|&shape_id| shape_id != id);
            self.z_order.push(id);
        }
    }

    pub fn send_to_back(&mut self, id: ShapeId) {
        if self.shapes.contains_key(&id) {
            self.z_order.retain(|&shape_id| shape_id != id);
            self.z_order.insert(0, id);
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Select or deselect one shape. Returns false for an unknown id.
    pub fn set_selected(&mut self, id: ShapeId, selected: bool) -> bool {
        match self.shapes.get_mut(&id) {
            Some(shape) => {
                shape.set_selected(selected);
                true
            }
            None => false,
        }
    }

    /// Make `id` the only selected shape.
    pub fn select_only(&mut self, id: ShapeId) -> bool {
        self.clear_selection();
        self.set_selected(id, true)
    }

    pub fn clear_selection(&mut self) {
        for shape in self.shapes.values_mut() {
            shape.set_selected(false);
        }
    }

    /// Ids of selected shapes, back to front.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.shapes_ordered()
            .filter(|s| s.is_selected())
            .map(Shape::id)
            .collect()
    }

    /// Union of the bounds of every selected shape.
    pub fn selection_bounds(&self) -> Option<Rect> {
        self.shapes_ordered()
            .filter(|s| s.is_selected())
            .map(Shape::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Shapes that touch `rect`, back to front. Lines count when their
    /// segment does, not merely their bounding box.
    pub fn shapes_in_rect(&self, rect: Rect) -> Vec<ShapeId> {
        let rect = rect.normalized();
        self.shapes_ordered()
            .filter(|s| match s {
                Shape::Line(line) => line.segment.intersects_rect(rect),
                Shape::Marker(_) => false,
                _ => overlaps(rect, s.bounds()),
            })
            .map(Shape::id)
            .collect()
    }

    /// Write finished gesture geometry onto a shape. Returns false for an
    /// unknown id.
    pub fn commit(&mut self, id: ShapeId, geometry: Rect) -> bool {
        match self.shapes.get_mut(&id) {
            Some(shape) => {
                shape.set_geometry(geometry);
                log::debug!("Committed {:?} to shape {}", geometry, id);
                true
            }
            None => {
                log::debug!("Commit to unknown shape {} ignored", id);
                false
            }
        }
    }

    /// Hit test front to back; the first shape hit wins.
    pub fn hit_test(&self, tester: &HitTester, point: Point) -> HitTestResult {
        tester.hit_test_first(self.shapes_front_to_back(), point)
    }

    /// The line of a line shape, if `id` names one.
    pub fn segment_of(&self, id: ShapeId) -> Option<Segment> {
        self.get_shape(id).and_then(Shape::segment)
    }
}

/// Closed overlap test; touching edges count.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
