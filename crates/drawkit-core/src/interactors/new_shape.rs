//! Creating rectangles and lines by dragging or clicking.

use super::{GestureCore, GestureNotifier, GesturePhase, Interactor};
use crate::config::InteractionConfig;
use crate::geometry::{create_around, RectExt, Segment};
use kurbo::{Point, Rect, Size};

/// Rubber-bands a new rectangle from the press point to the pointer.
///
/// During the drag the working rectangle keeps the press corner at
/// `(x0, y0)` and may be unnormalized. The minimum size is applied once, when
/// the gesture ends.
#[derive(Debug)]
pub struct NewShapeInteractor {
    core: GestureCore,
    rect: Rect,
    min_size: Size,
    default_size: Size,
}

impl NewShapeInteractor {
    pub fn new(bounds: Rect, config: &InteractionConfig) -> Self {
        Self {
            core: GestureCore::new(bounds),
            rect: Rect::ZERO,
            min_size: config.min_shape_size,
            default_size: config.default_shape_size,
        }
    }

    /// Place a default-size rectangle centered on `point` and complete at
    /// once, without a drag.
    pub fn click(&mut self, point: Point) {
        if !self.core.begin() {
            return;
        }
        let bounds = self.core.bounds();
        self.rect = create_around(point, self.default_size).clip_to(bounds);
        self.core.complete(self.rect);
    }

    fn drag_to(&mut self, point: Point) {
        let p = self.core.clip(point);
        self.rect.x1 = p.x;
        self.rect.y1 = p.y;
        log::trace!("New shape drag: {:?}", self.rect);
    }

    /// Near the bounds the grown rectangle is shifted back inside, so it is
    /// no longer centered on the press point.
    fn finish(&mut self) {
        self.rect = self
            .rect
            .normalized()
            .ensure_viable_size(self.min_size)
            .shifted_inside(self.core.bounds());
        self.core.complete(self.rect);
    }
}

impl Interactor for NewShapeInteractor {
    fn interaction_start(&mut self, point: Point) {
        if self.core.begin() {
            let p = self.core.clip(point);
            self.rect = Rect::new(p.x, p.y, p.x, p.y);
        }
    }

    fn interaction_update(&mut self, point: Point) {
        if self.core.is_active("update") {
            self.drag_to(point);
        }
    }

    fn interaction_end(&mut self, point: Point) {
        if self.core.is_active("end") {
            self.drag_to(point);
            self.finish();
        }
    }

    fn escape(&mut self) {
        self.core.abandon();
    }

    fn confirm(&mut self) {
        if self.core.is_active("confirm") {
            self.finish();
        }
    }

    fn rectangle(&self) -> Rect {
        self.rect
    }

    fn phase(&self) -> GesturePhase {
        self.core.phase()
    }

    fn notifier(&mut self) -> &mut GestureNotifier {
        self.core.notifier()
    }
}

/// Drags out a new line from the press point to the pointer.
///
/// Lines keep their direction and have no minimum length.
#[derive(Debug)]
pub struct NewLineInteractor {
    core: GestureCore,
    segment: Segment,
}

impl NewLineInteractor {
    pub fn new(bounds: Rect) -> Self {
        Self {
            core: GestureCore::new(bounds),
            segment: Segment::default(),
        }
    }

    fn drag_to(&mut self, point: Point) {
        self.segment = self.segment.with_end(self.core.clip(point));
    }
}

impl Interactor for NewLineInteractor {
    fn interaction_start(&mut self, point: Point) {
        if self.core.begin() {
            let p = self.core.clip(point);
            self.segment = Segment::new(p, p);
        }
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
