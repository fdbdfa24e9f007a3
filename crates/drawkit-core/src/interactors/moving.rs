//! Moving a rectangle or a line.
//!
//! Each update translates the geometry captured at press time by
//! `clip(point) - press`, so returning to the press point restores the exact
//! original. The translation is clamped so the moved shape stays inside the
//! bounds at its original size.

use super::{GestureCore, GestureNotifier, GesturePhase, Interactor};
use crate::geometry::{RectExt, Segment};
use kurbo::{Point, Rect, Vec2};

/// Limit `delta` so `rect + delta` stays inside `bounds` on every axis where
/// it fits.
fn clamp_translation(bounds: Rect, rect: Rect, delta: Vec2) -> Vec2 {
    let r = rect.normalized();
    let clamp_axis = |d: f64, lo: f64, hi: f64| d.max(lo.min(0.0)).min(hi.max(0.0));
    Vec2::new(
        clamp_axis(delta.x, bounds.x0 - r.x0, bounds.x1 - r.x1),
        clamp_axis(delta.y, bounds.y0 - r.y0, bounds.y1 - r.y1),
    )
}

/// Moves a box-shaped geometry.
#[derive(Debug)]
pub struct MoveInteractor {
    core: GestureCore,
    press: Point,
    original: Rect,
    rect: Rect,
}

impl MoveInteractor {
    /// `press` is where the pointer went down. Built on the press, so it
    /// starts active.
    pub fn new(bounds: Rect, geometry: Rect, press: Point) -> Self {
        let core = GestureCore::active(bounds);
        let press = core.clip(press);
        Self {
            core,
            press,
            original: geometry,
            rect: geometry,
        }
    }

    fn drag_to(&mut self, point: Point) {
        let delta = self.core.clip(point) - self.press;
        let delta = clamp_translation(self.core.bounds(), self.original, delta);
        self.rect = self.original + delta;
        log::trace!("Move by {:?}: {:?}", delta, self.rect);
    }
}

impl Interactor for MoveInteractor {
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
            self.core.complete(self.rect);
        }
    }

    fn escape(&mut self) {
        self.core.abandon();
    }

    fn confirm(&mut self) {
        if self.core.is_active("confirm") {
            self.core.complete(self.rect);
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

/// Moves a line, keeping its direction.
#[derive(Debug)]
pub struct MoveLineInteractor {
    core: GestureCore,
    press: Point,
    original: Segment,
    segment: Segment,
}

impl MoveLineInteractor {
    pub fn new(bounds: Rect, segment: Segment, press: Point) -> Self {
        let core = GestureCore::active(bounds);
        let press = core.clip(press);
        Self {
            core,
            press,
            original: segment,
            segment,
        }
    }

    fn drag_to(&mut self, point: Point) {
        let delta = self.core.clip(point) - self.press;
        let delta = clamp_translation(self.core.bounds(), self.original.bounding_rect(), delta);
        self.segment = self.original.translate(delta);
    }
}

impl Interactor for MoveLineInteractor {
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
