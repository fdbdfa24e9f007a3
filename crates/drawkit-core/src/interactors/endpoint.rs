//! Dragging one end of a line.

use super::{GestureCore, GestureNotifier, GesturePhase, Interactor};
use crate::geometry::{Endpoint, Segment};
use kurbo::{Point, Rect};

/// Moves one endpoint while the other stays fixed.
#[derive(Debug)]
pub struct LineEndpointInteractor {
    core: GestureCore,
    endpoint: Endpoint,
    original: Segment,
    segment: Segment,
}

impl LineEndpointInteractor {
    /// Built on the press, so it starts active.
    pub fn new(bounds: Rect, segment: Segment, endpoint: Endpoint) -> Self {
        Self {
            core: GestureCore::active(bounds),
            endpoint,
            original: segment,
            segment,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn drag_to(&mut self, point: Point) {
        let p = self.core.clip(point);
        self.segment = match self.endpoint {
            Endpoint::Start => self.original.with_start(p),
            Endpoint::End => self.original.with_end(p),
        };
    }
}

impl Interactor for LineEndpointInteractor {
    fn interaction_start(&mut self, _point: Point) {
        self.core.begin();
    }

    fn interaction_update(&mut self, point: Point) {
        if self.core.is_active("update") {
            self.drag_to(point);
        }
    }

    fn interaction_end(&mut self, point: Point) {
        if self.core.is_active("end") {
            self.drag_to(point);
            self.core.complete(self.segment.as_rect());
        }
    }

    fn escape(&mut self) {
        self.core.abandon();
    }

    fn confirm(&mut self) {
        if self.core.is_active("confirm") {
            self.core.complete(self.segment.as_rect());
        }
    }

    fn rectangle(&self) -> Rect {
        self.segment.as_rect()
    }

    fn line(&self) -> Segment {
        self.segment
    }

    fn phase(&self) -> GesturePhase {
        self.core.phase()
    }

    fn notifier(&mut self) -> &mut GestureNotifier {
        self.core.notifier()
    }
}
