//! Rubber-banding a region to erase.

use super::{GestureNotifier, GesturePhase, Interactor, NewShapeInteractor};
use crate::config::InteractionConfig;
use crate::shapes::Marker;
use kurbo::{Point, Rect};

/// Drags out the region whose shapes should be erased.
///
/// Only the region is produced. The owner resolves it against its shapes,
/// e.g. with [`crate::collection::ShapeCollection::shapes_in_rect`].
#[derive(Debug)]
pub struct EraseInteractor {
    inner: NewShapeInteractor,
}

impl EraseInteractor {
    pub fn new(bounds: Rect, config: &InteractionConfig) -> Self {
        Self {
            inner: NewShapeInteractor::new(bounds, config),
        }
    }

    /// A marker outlining the current region, for display while dragging.
    pub fn marker(&self) -> Marker {
        Marker::new(self.preview())
    }
}

impl Interactor for EraseInteractor {
    fn interaction_start(&mut self, point: Point) {
        self.inner.interaction_start(point);
    }

    fn interaction_update(&mut self, point: Point) {
        self.inner.interaction_update(point);
    }

    fn interaction_end(&mut self, point: Point) {
        self.inner.interaction_end(point);
    }

    fn escape(&mut self) {
        self.inner.escape();
    }

    fn confirm(&mut self) {
        self.inner.confirm();
    }

    fn rectangle(&self) -> Rect {
        self.inner.rectangle()
    }

    fn phase(&self) -> GesturePhase {
        self.inner.phase()
    }

    fn notifier(&mut self) -> &mut GestureNotifier {
        self.inner.notifier()
    }
}
